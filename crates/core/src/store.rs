//! Position-addressable ordered container.

use core::borrow::Borrow;
use core::slice;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// Insertion-ordered sequence with positional access.
///
/// Appends are amortised O(1); positional removal shifts the tail, O(n).
/// The store performs no duplicate detection: uniqueness and other semantic
/// invariants belong to the layer that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedStore<T> {
    items: Vec<T>,
}

/// Traversal order over an [`OrderedStore`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Insertion order (oldest first).
    #[default]
    Forward,
    /// Reverse insertion order (newest first).
    Backward,
}

impl<T> OrderedStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `item` at the end. Always succeeds.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Item at `index`, or `OutOfRange` when `index >= len()`.
    pub fn get(&self, index: usize) -> DomainResult<&T> {
        let size = self.items.len();
        self.items
            .get(index)
            .ok_or(DomainError::out_of_range(index, size))
    }

    pub fn get_mut(&mut self, index: usize) -> DomainResult<&mut T> {
        let size = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(DomainError::out_of_range(index, size))
    }

    /// Remove and return the item at `index`; later items move up one position.
    pub fn remove_at(&mut self, index: usize) -> DomainResult<T> {
        if index >= self.items.len() {
            return Err(DomainError::out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insertion-order iterator; `.rev()` walks it backwards.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate in the requested direction without touching the store.
    pub fn traverse(&self, direction: Direction) -> Traverse<'_, T> {
        Traverse {
            inner: self.items.iter(),
            direction,
        }
    }

    /// Position of the first item matching `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }
}

impl<T: Entity> OrderedStore<T> {
    /// Position of the first entity whose id equals `id`.
    pub fn position_of<Q>(&self, id: &Q) -> Option<usize>
    where
        T::Id: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(|item| item.has_id(id))
    }

    pub fn find_by_id<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(|item| item.has_id(id))
    }

    pub fn find_by_id_mut<Q>(&mut self, id: &Q) -> Option<&mut T>
    where
        T::Id: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.items.iter_mut().find(|item| item.has_id(id))
    }
}

impl<T> Default for OrderedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedStore<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Directional borrowing iterator returned by [`OrderedStore::traverse`].
#[derive(Debug, Clone)]
pub struct Traverse<'a, T> {
    inner: slice::Iter<'a, T>,
    direction: Direction,
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Forward => self.inner.next(),
            Direction::Backward => self.inner.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Traverse<'_, T> {}
