//! Lock-guarded stores.
//!
//! Guards never leave this module: callers either run a closure under the lock
//! or receive an owned copy, so a lookup can never block a later mutation.

use std::sync::{PoisonError, RwLock};

use crate::store::{Direction, OrderedStore, Traverse};

/// An [`OrderedStore`] behind a single reader/writer lock.
///
/// A poisoned lock is recovered rather than propagated: owners validate before
/// they mutate, so a panicking holder never leaves partial state.
#[derive(Debug)]
pub struct SharedStore<T> {
    inner: RwLock<OrderedStore<T>>,
}

impl<T> SharedStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(OrderedStore::new()),
        }
    }

    /// Run `f` over the live contents under the read lock.
    ///
    /// The lock is released when `f` returns. Calling back into a write path
    /// of the same store from inside `f` blocks.
    pub fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&OrderedStore<T>) -> R,
    {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` over the live contents under the write lock.
    pub fn write<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderedStore<T>) -> R,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn len(&self) -> usize {
        self.read(OrderedStore::len)
    }

    pub fn is_empty(&self) -> bool {
        self.read(OrderedStore::is_empty)
    }
}

impl<T: Clone> SharedStore<T> {
    /// Copy of the current contents.
    pub fn snapshot(&self) -> OrderedStore<T> {
        self.read(OrderedStore::clone)
    }

    /// Copy of the first item matching `predicate`.
    pub fn find_cloned<P>(&self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.read(|store| store.find(predicate).cloned())
    }

    /// Copy of the current contents, traversed in `direction`.
    pub fn listing(&self, direction: Direction) -> Listing<T> {
        Listing {
            items: self.snapshot(),
            direction,
        }
    }
}

impl<T> Default for SharedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy, finite, restartable traversal over a copy of a [`SharedStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    items: OrderedStore<T>,
    direction: Direction,
}

impl<T> Listing<T> {
    /// Start (or restart) the traversal.
    pub fn iter(&self) -> Traverse<'_, T> {
        self.items.traverse(self.direction)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Listing<T> {
    type Item = &'a T;
    type IntoIter = Traverse<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_of(items: &[u32]) -> SharedStore<u32> {
        let shared = SharedStore::new();
        shared.write(|store| {
            for item in items {
                store.append(*item);
            }
        });
        shared
    }

    #[test]
    fn read_sees_live_contents() {
        let shared = shared_of(&[1, 2]);
        assert_eq!(shared.len(), 2);

        shared.write(|store| store.append(3));
        assert_eq!(shared.read(|store| *store.get(2).unwrap()), 3);
    }

    #[test]
    fn write_returns_closure_result() {
        let shared = shared_of(&[1, 2, 3]);
        let removed = shared.write(|store| store.remove_at(0));
        assert_eq!(removed.unwrap(), 1);
        assert_eq!(shared.snapshot().iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn listing_is_restartable() {
        let shared = shared_of(&[1, 2, 3]);
        let listing = shared.listing(Direction::Backward);

        let first: Vec<_> = listing.iter().copied().collect();
        let second: Vec<_> = (&listing).into_iter().copied().collect();

        assert_eq!(first, vec![3, 2, 1]);
        assert_eq!(first, second);
        assert_eq!(listing.len(), 3);
    }

    #[test]
    fn listing_does_not_block_writes() {
        let shared = shared_of(&[1]);
        let listing = shared.listing(Direction::Forward);

        shared.write(|store| store.append(2));

        assert_eq!(listing.len(), 1);
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn find_cloned_copies_first_match() {
        let shared = shared_of(&[4, 5, 5]);
        assert_eq!(shared.find_cloned(|v| *v == 5), Some(5));
        assert!(shared.find_cloned(|v| *v == 9).is_none());

        // The copy holds no lock.
        let found = shared.find_cloned(|v| *v == 4);
        shared.write(|store| store.clear());
        assert_eq!(found, Some(4));
        assert!(shared.is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let shared = shared_of(&[1]);
        let snapshot = shared.snapshot();

        shared.write(|store| store.append(2));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(shared.len(), 2);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let shared = std::sync::Arc::new(shared_of(&[7]));
        let clone = shared.clone();
        let _ = std::thread::spawn(move || {
            clone.write(|store| {
                if store.len() == 1 {
                    panic!("poison the lock");
                }
            });
        })
        .join();

        assert_eq!(shared.read(|store| *store.get(0).unwrap()), 7);
    }
}
