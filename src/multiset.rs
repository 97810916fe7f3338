//! Provides the `Multiset` type returned by the multiset algebra.
//!
//! A `Multiset` is backed by an `indexmap` map with the `fxhash` hasher, so
//! its elements iterate in the order they were first inserted. Equality
//! ignores that order.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter;

use crate::set::Set;

type Counts<T> = IndexMap<T, usize, FxBuildHasher>;

/// A `Multiset` maps each distinct element to the number of times it occurs.
/// * Every stored count is positive: an element whose count drops to zero is
///   removed, not kept with a zero count.
/// * Elements iterate in the order they were first inserted.
/// * Two multisets are equal when they hold the same `(element, count)` pairs,
///   whatever their order.
#[derive(Clone)]
pub struct Multiset<T> {
    counts: Counts<T>,
}

impl<T> Default for Multiset<T> {
    fn default() -> Self {
        Multiset { counts: Counts::default() }
    }
}

impl<T: Hash + Eq> Multiset<T> {
    /// An empty multiset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a multiset from `(element, count)` pairs. Counts for repeated
    /// elements are added together; zero counts are ignored.
    pub fn from_counts(pairs: impl IntoIterator<Item = (T, usize)>) -> Self {
        let mut multiset = Self::new();
        for (element, n) in pairs {
            multiset.insert_many(element, n);
        }
        multiset
    }

    /// Adds one occurrence of `element` and returns its new count.
    pub fn insert(&mut self, element: T) -> usize {
        self.insert_many(element, 1)
    }

    /// Adds `n` occurrences of `element` and returns its new count. Adding
    /// zero occurrences leaves the multiset unchanged.
    pub fn insert_many(&mut self, element: T, n: usize) -> usize {
        if n == 0 {
            return self.count(&element);
        }
        let count = self.counts.entry(element).or_insert(0);
        *count += n;
        *count
    }

    /// Removes one occurrence of `element` and returns how many remain. If
    /// `element` is absent nothing happens and the result is zero.
    ///
    /// When the last occurrence goes, the element is removed in a way that
    /// keeps the insertion order of the others, which is `O(n)`.
    pub fn remove<Q>(&mut self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let remaining = match self.counts.get_mut(element) {
            None => return 0,
            Some(count) => {
                *count -= 1;
                *count
            }
        };
        if remaining == 0 {
            self.counts.shift_remove(element);
        }
        remaining
    }

    /// Sets the count of `element` to `n`, returning its previous count. A
    /// count of zero removes the element.
    pub fn set_count(&mut self, element: T, n: usize) -> usize {
        if n == 0 {
            self.counts.shift_remove(&element).unwrap_or(0)
        } else {
            self.counts.insert(element, n).unwrap_or(0)
        }
    }

    /// The number of occurrences of `element`, zero if it is absent
    pub fn count<Q>(&self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(element).copied().unwrap_or(0)
    }

    /// Does `element` occur at least once?
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(element)
    }

    /// The distinct elements, each exactly once
    pub fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts.keys()
    }

    /// Every occurrence: each element is repeated as many times as its count
    pub fn occurrences(&self) -> impl Iterator<Item = &T> + '_ {
        self.counts.iter().flat_map(|(element, &n)| iter::repeat_n(element, n))
    }

    /// Collapses the multiset to the set of its distinct elements
    #[must_use]
    pub fn element_set(&self) -> Set<T>
    where
        T: Clone,
    {
        self.counts.keys().cloned().collect()
    }

    /// Raises the count of `element` to `n` if it is currently lower,
    /// inserting `element` if it is absent.
    pub(crate) fn raise_to(&mut self, element: T, n: usize) {
        if n == 0 {
            return;
        }
        let count = self.counts.entry(element).or_insert(0);
        if *count < n {
            *count = n;
        }
    }

    /// Lowers every count to the count in `other`, dropping elements `other`
    /// lacks.
    pub(crate) fn intersect_with(&mut self, other: &Multiset<T>) {
        self.counts.retain(|element, count| {
            *count = (*count).min(other.count(element));
            *count > 0
        });
    }

    /// Removes one occurrence per item of `items`, never going below zero.
    ///
    /// `shift_remove` is `O(n)`, so removing elements one by one as they hit
    /// zero would be `O(n^2)`. Instead the counts saturate at zero and a
    /// single order-preserving `retain` drops them afterwards.
    pub(crate) fn subtract_occurrences<Q>(&mut self, items: impl IntoIterator<Item = Q>)
    where
        T: Borrow<Q>,
        Q: Hash + Eq,
    {
        for item in items {
            if let Some(count) = self.counts.get_mut(&item) {
                *count = count.saturating_sub(1);
            }
        }
        self.counts.retain(|_element, count| *count > 0);
    }
}

impl<T> Multiset<T> {
    /// The number of distinct elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// The total number of occurrences, the sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Does the multiset have no elements?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(element, count)` pairs in insertion order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

/// Iterator over the `(element, count)` pairs of a borrowed `Multiset`
pub struct Iter<'a, T>(indexmap::map::Iter<'a, T, usize>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(element, &n)| (element, n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over the `(element, count)` pairs of an owned `Multiset`
pub struct IntoIter<T>(indexmap::map::IntoIter<T, usize>);

impl<T> Iterator for IntoIter<T> {
    type Item = (T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a Multiset<T> {
    type Item = (&'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.counts.iter())
    }
}

impl<T> IntoIterator for Multiset<T> {
    type Item = (T, usize);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.counts.into_iter())
    }
}

/// The multiset view of a group: each item adds one occurrence.
impl<T: Hash + Eq> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut multiset = Self::new();
        multiset.extend(items);
        multiset
    }
}

impl<T: Hash + Eq> Extend<T> for Multiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq> PartialEq for Multiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}
impl<T: Hash + Eq> Eq for Multiset<T> {}

impl<T: fmt::Debug> fmt::Debug for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}
