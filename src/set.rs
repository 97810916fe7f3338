//! Provides the `Set` type returned by the set algebra.
//!
//! A `Set` is backed by an `indexmap` set with the `fxhash` hasher, so its
//! elements iterate in the order they were first inserted. Equality ignores
//! that order.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

type Elements<T> = IndexSet<T, FxBuildHasher>;

/// A `Set` holds distinct elements, in the order they were first inserted.
#[derive(Clone)]
pub struct Set<T> {
    elements: Elements<T>,
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set { elements: Elements::default() }
    }
}

impl<T: Hash + Eq> Set<T> {
    /// An empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `element`, returning `false` if it was already present. A repeated
    /// element keeps its original position.
    pub fn insert(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Is `element` in the set?
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(element)
    }
}

impl<T> Set<T> {
    /// The number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Does the set have no elements?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in insertion order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.elements.iter())
    }
}

/// Iterator over the elements of a borrowed `Set`
pub struct Iter<'a, T>(indexmap::set::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over the elements of an owned `Set`
pub struct IntoIter<T>(indexmap::set::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.elements.into_iter())
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Set { elements: items.into_iter().collect() }
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.elements.extend(items);
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}
impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}
