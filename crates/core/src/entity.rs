//! Identity of stored records.

use core::borrow::Borrow;

/// A record addressed by a fixed identifier.
///
/// [`OrderedStore`](crate::OrderedStore) uses this to look items up by id; it
/// never checks uniqueness itself.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Compare against any borrowed form of the id (`&str` for `String` ids).
    fn has_id<Q>(&self, id: &Q) -> bool
    where
        Self::Id: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        Borrow::<Q>::borrow(self.id()) == id
    }
}
