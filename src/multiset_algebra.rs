//! N-ary multiset operations. Each operation takes a sequence of groups,
//! views every group as a multiset, and folds the groups left to right into
//! the multiset built from the first group.
//!
//! Every operation here seeds from the first group, so calling one with no
//! groups at all is an `Error::EmptyInput`.
//!
//! * `concatenate` adds counts,
//! * `union` takes the largest count any group has,
//! * `intersection` takes the smallest count any group has, and
//! * `difference` subtracts the counts of the later groups from the first,
//!   never going below zero.
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::multiset::Multiset;

/// Splits `groups` into the multiset of its first group and an iterator over
/// the rest. Fails before looking at any element if there is no first group.
fn seed_and_rest<T, G, I>(
    operation: &'static str,
    groups: I,
) -> Result<(Multiset<T>, I::IntoIter)>
where
    T: Hash + Eq,
    G: IntoIterator<Item = T>,
    I: IntoIterator<Item = G>,
{
    let mut groups = groups.into_iter();
    match groups.next() {
        None => Err(Error::EmptyInput { operation }),
        Some(first) => Ok((first.into_iter().collect(), groups)),
    }
}

/// The multiset sum of the groups: an element's count is the total number of
/// times it occurs, over all groups.
///
/// ```
/// use groupset::{multiset_algebra::concatenate, Multiset};
///
/// let sum = concatenate([vec!["a", "a", "b"], vec!["b", "c"]]).unwrap();
/// assert_eq!(sum, Multiset::from_counts([("a", 2), ("b", 2), ("c", 1)]));
/// ```
pub fn concatenate<T, G>(groups: impl IntoIterator<Item = G>) -> Result<Multiset<T>>
where
    T: Hash + Eq,
    G: IntoIterator<Item = T>,
{
    let (mut sum, rest) = seed_and_rest("multiset concatenate", groups)?;
    for group in rest {
        sum.extend(group);
    }
    Ok(sum)
}

/// The multiset union of the groups: an element's count is the largest number
/// of times it occurs in any single group.
pub fn union<T, G>(groups: impl IntoIterator<Item = G>) -> Result<Multiset<T>>
where
    T: Hash + Eq,
    G: IntoIterator<Item = T>,
{
    let (mut set, rest) = seed_and_rest("multiset union", groups)?;
    for group in rest {
        let other: Multiset<T> = group.into_iter().collect();
        for (element, n) in other {
            set.raise_to(element, n);
        }
    }
    Ok(set)
}

/// The multiset intersection of the groups: an element's count is the
/// smallest number of times it occurs in any group. Elements missing from any
/// group are absent from the result.
pub fn intersection<T, G>(groups: impl IntoIterator<Item = G>) -> Result<Multiset<T>>
where
    T: Hash + Eq,
    G: IntoIterator<Item = T>,
{
    let (mut set, rest) = seed_and_rest("multiset intersection", groups)?;
    for group in rest {
        let other: Multiset<T> = group.into_iter().collect();
        set.intersect_with(&other);
    }
    Ok(set)
}

/// The multiset difference of the first group and the rest: every item of the
/// second and later groups removes one occurrence of itself from the first
/// group's multiset, if there is one left to remove. So an element's count is
/// its count in the first group minus its counts in all the others, or zero if
/// that would be negative.
///
/// Unlike `union` and `intersection` the order of the groups matters: the first
/// group is the one subtracted from.
pub fn difference<T, G>(groups: impl IntoIterator<Item = G>) -> Result<Multiset<T>>
where
    T: Hash + Eq,
    G: IntoIterator<Item = T>,
{
    let (mut set, rest) = seed_and_rest("multiset difference", groups)?;
    for group in rest {
        set.subtract_occurrences(group);
    }
    Ok(set)
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn counts(pairs: &[(&'static str, usize)]) -> Multiset<&'static str> {
        Multiset::from_counts(pairs.iter().copied())
    }

    const NO_GROUPS: [Vec<&str>; 0] = [];

    #[test]
    fn concatenate_adds_counts() {
        let result = concatenate([vec!["a", "a", "b"], vec!["b", "c"]]).unwrap();
        assert_eq!(result, counts(&[("a", 2), ("b", 2), ("c", 1)]));
    }

    #[test]
    fn union_takes_the_largest_count() {
        let result = union([vec!["a", "a", "b"], vec!["a", "b", "b", "b"]]).unwrap();
        assert_eq!(result, counts(&[("a", 2), ("b", 3)]));
    }

    #[test]
    fn union_inserts_elements_missing_from_the_first_group() {
        let result = union([vec!["a"], vec![], vec!["c", "c"]]).unwrap();
        assert_eq!(result, counts(&[("a", 1), ("c", 2)]));
    }

    #[test]
    fn intersection_takes_the_smallest_count() {
        let result = intersection([vec!["a", "a", "a"], vec!["a", "a"]]).unwrap();
        assert_eq!(result, counts(&[("a", 2)]));
    }

    #[test]
    fn intersection_drops_elements_missing_from_any_group() {
        let result =
            intersection([vec!["a", "b", "b"], vec!["b", "c", "b", "a"], vec!["b", "b", "b"]])
                .unwrap();
        assert_eq!(result, counts(&[("b", 2)]));
    }

    #[test]
    fn difference_removes_one_occurrence_per_item() {
        let result = difference([vec!["a", "a", "a"], vec!["a"], vec!["a"]]).unwrap();
        assert_eq!(result, counts(&[("a", 1)]));
    }

    #[test]
    fn difference_never_goes_negative() {
        let result = difference([vec!["a"], vec!["a", "a"]]).unwrap();
        assert!(result.is_empty());
        let result = difference([vec!["a", "b"], vec!["a", "a", "a"], vec!["b", "c"]]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn difference_ignores_elements_not_in_the_first_group() {
        let result = difference([vec!["a", "b", "b"], vec!["c", "b"]]).unwrap();
        assert_eq!(result, counts(&[("a", 1), ("b", 1)]));
    }

    #[test]
    fn given_a_single_group_every_operation_returns_its_counts() {
        let group = vec!["x", "y", "x", "z", "x"];
        let expected = counts(&[("x", 3), ("y", 1), ("z", 1)]);
        assert_eq!(concatenate([group.clone()]).unwrap(), expected);
        assert_eq!(union([group.clone()]).unwrap(), expected);
        assert_eq!(intersection([group.clone()]).unwrap(), expected);
        assert_eq!(difference([group]).unwrap(), expected);
    }

    #[test]
    fn every_operation_fails_on_zero_groups() {
        let expect = |operation| -> Result<Multiset<&str>> { Err(Error::EmptyInput { operation }) };
        assert_eq!(concatenate(NO_GROUPS), expect("multiset concatenate"));
        assert_eq!(union(NO_GROUPS), expect("multiset union"));
        assert_eq!(intersection(NO_GROUPS), expect("multiset intersection"));
        assert_eq!(difference(NO_GROUPS), expect("multiset difference"));
    }

    #[test]
    fn intersecting_a_group_with_itself_keeps_its_counts() {
        let group = vec!["p", "q", "p", "r", "p", "q"];
        let result = intersection([&group, &group]).unwrap();
        assert_eq!(result, group.iter().collect::<Multiset<_>>());
    }

    #[test]
    fn union_intersection_and_concatenate_ignore_group_order() {
        let groups = vec![
            vec!["a", "a", "b", "c"],
            vec!["a", "b", "b", "b", "d"],
            vec!["c", "a", "b", "b", "a", "a"],
            vec!["b", "e", "a"],
        ];
        let union_expected = union(groups.clone()).unwrap();
        let intersection_expected = intersection(groups.clone()).unwrap();
        let concatenate_expected = concatenate(groups.clone()).unwrap();
        for order in groups.iter().permutations(groups.len()) {
            let order: Vec<Vec<&str>> = order.into_iter().cloned().collect();
            assert_eq!(union(order.clone()).unwrap(), union_expected, "for {order:?}");
            assert_eq!(
                intersection(order.clone()).unwrap(),
                intersection_expected,
                "for {order:?}"
            );
            assert_eq!(concatenate(order.clone()).unwrap(), concatenate_expected, "for {order:?}");
        }
        assert_eq!(union_expected, counts(&[("a", 3), ("b", 3), ("c", 1), ("d", 1), ("e", 1)]));
        assert_eq!(intersection_expected, counts(&[("a", 1), ("b", 1)]));
    }
}
