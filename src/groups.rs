//! Gathers separately passed groups into the single sequence of groups that
//! the `set_algebra` and `multiset_algebra` operations take. The `groups!`
//! macro is the usual way in:
//!
//! ```
//! use groupset::{groups, set_algebra};
//!
//! let (a, b, c) = (vec![1, 2], vec![2, 3], vec![3, 4]);
//! let more = vec![vec![4, 5], vec![5, 6]];
//! let all = set_algebra::union(groups![a, b, c; more]);
//! assert_eq!(all.len(), 6);
//! ```

/// Returns the `N` groups of `fixed` followed by every group of `tail`, in
/// order. `tail` may be empty.
pub fn with_tail<G, const N: usize>(fixed: [G; N], tail: impl IntoIterator<Item = G>) -> Vec<G> {
    let tail = tail.into_iter();
    let mut groups = Vec::with_capacity(N + tail.size_hint().0);
    groups.extend(fixed);
    groups.extend(tail);
    groups
}

/// Collects any iterable into an in-memory sequence
pub fn materialize<T>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().collect()
}

/// Builds a `Vec` of groups from groups passed one by one, optionally
/// followed by `;` and an iterable of further groups.
///
/// * `groups![a, b, c]` is `vec![a, b, c]`
/// * `groups![a, b; rest]` is `a`, `b`, then each group of `rest`
#[macro_export]
macro_rules! groups {
    ($($group:expr),+ ; $tail:expr) => {
        $crate::groups::with_tail([$($group),+], $tail)
    };
    ($($group:expr),* $(,)?) => {
        $crate::groups::with_tail([$($group),*], ::std::iter::empty())
    };
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::{multiset_algebra, set_algebra, Multiset};

    #[test]
    fn fixed_groups_come_before_the_tail() {
        let groups = with_tail([vec![1], vec![2]], vec![vec![3], vec![4, 4]]);
        assert_eq!(groups, [vec![1], vec![2], vec![3], vec![4, 4]]);
    }

    #[test]
    fn an_empty_tail_adds_nothing() {
        let groups = with_tail(["a", "b", "c"], std::iter::empty());
        assert_eq!(groups, ["a", "b", "c"]);
    }

    #[test]
    fn macro_accepts_fixed_groups_with_and_without_a_tail() {
        let fixed: Vec<Vec<u8>> = groups![vec![1], vec![2, 2],];
        assert_eq!(fixed, [vec![1], vec![2, 2]]);
        let with_rest = groups![vec![1]; vec![vec![2], vec![3]]];
        assert_eq!(with_rest, [vec![1], vec![2], vec![3]]);
        let none: Vec<Vec<u8>> = groups![];
        assert!(none.is_empty());
    }

    #[test]
    fn ten_fixed_groups_and_a_tail_reach_the_algebra() {
        let tail = vec![vec!["k"], vec!["k", "l"]];
        let all = groups![
            vec!["a"], vec!["b"], vec!["c"], vec!["d"], vec!["e"],
            vec!["f"], vec!["g"], vec!["h"], vec!["i"], vec!["j"];
            tail
        ];
        assert_eq!(all.len(), 12);
        assert_eq!(set_algebra::union(all.clone()).len(), 12);
        let sum = multiset_algebra::concatenate(all).unwrap();
        assert_eq!(sum.count("k"), 2);
        assert_eq!(sum.total(), 13);
    }

    #[test]
    fn materialize_keeps_order_and_duplicates() {
        let m: Multiset<char> = "abca".chars().collect();
        assert_eq!(materialize(m.occurrences().copied()), ['a', 'a', 'b', 'c']);
        assert_eq!(materialize("xyx".chars()), ['x', 'y', 'x']);
    }
}
