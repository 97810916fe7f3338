//! N-ary set operations. Each group is considered only for which elements it
//! contains: how often an element occurs within a group makes no difference,
//! except to `symmetric_difference`, which is defined by occurrence parity.
//!
//! * `union` returns the elements that occur in any group,
//! * `intersection` returns the elements that occur in every group,
//! * `difference` returns the elements of the first group that occur in no
//!   other group, and
//! * `symmetric_difference` returns the elements that occur an odd number of
//!   times altogether.
//!
//! Only `intersection` needs a first group; the others return the empty set
//! when given no groups.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::set::Set;
use crate::multiset_algebra;

// A `Marked` set keeps one bookkeeping flag per element. Its meaning differs
// from operation to operation.
type Marked<T> = IndexMap<T, bool, FxBuildHasher>;

fn marked_with<T: Hash + Eq>(group: impl IntoIterator<Item = T>, mark: bool) -> Marked<T> {
    let mut set = Marked::default();
    for element in group {
        set.insert(element, mark);
    }
    set
}

/// The elements that occur in at least one group. Zero groups give the empty
/// set.
pub fn union<T, G>(groups: impl IntoIterator<Item = G>) -> Set<T>
where
    T: Hash + Eq,
    G: IntoIterator<Item = T>,
{
    let mut set = Set::default();
    for group in groups {
        set.extend(group);
    }
    set
}

/// The elements that occur in every group.
///
/// Each element of the first group starts out colored with `this_cycle`, so:
/// (1)  All elements in `set` colored with `this_cycle` have been seen in
///      every group so far, and
/// (2)  All elements in `set` are colored with `this_cycle`, so
/// (3)  All elements in `set` have been seen in every group so far.
///
/// When we look at the next group, (1) becomes unknown. We restore its truth
/// by flipping `this_cycle` to the opposite color, and giving every element
/// that occurs in the next group the new color. Then we restore the truth of
/// (2) by removing every element whose color is not `this_cycle`.
///
/// Fails with `Error::EmptyInput` if there are no groups.
pub fn intersection<T, G>(groups: impl IntoIterator<Item = G>) -> Result<Set<T>>
where
    T: Hash + Eq,
    G: IntoIterator<Item = T>,
{
    const BLUE: bool = true; //  We're using Booleans, but we could
    const _RED: bool = false; // be using two different colors

    let mut groups = groups.into_iter();
    let Some(first) = groups.next() else {
        return Err(Error::EmptyInput { operation: "set intersection" });
    };
    let mut this_cycle = BLUE;
    let mut set = marked_with(first, this_cycle);
    for group in groups {
        this_cycle = !this_cycle; // flip BLUE -> RED and RED -> BLUE
        for element in group {
            if let Some(when_seen) = set.get_mut(&element) {
                *when_seen = this_cycle;
            }
        }
        set.retain(|_element, when_seen| *when_seen == this_cycle);
    }
    Ok(set.into_iter().map(|(element, _)| element).collect())
}

/// The elements of the first group that occur in no later group. Zero groups
/// give the empty set. Presence is all that counts: one occurrence in a later
/// group removes an element however often it occurs in the first.
///
/// The bookkeeping flag `true` means the element has been seen only in the
/// first group, and `false` that it occurs in some later group too.
pub fn difference<T, G>(groups: impl IntoIterator<Item = G>) -> Set<T>
where
    T: Hash + Eq,
    G: IntoIterator<Item = T>,
{
    let mut groups = groups.into_iter();
    let Some(first) = groups.next() else { return Set::default() };
    let mut set = marked_with(first, true);
    for group in groups {
        for element in group {
            if let Some(keepme) = set.get_mut(&element) {
                *keepme = false;
            }
        }
    }
    set.retain(|_element, keepme| *keepme);
    set.into_iter().map(|(element, _)| element).collect()
}

/// The elements whose total number of occurrences, counting every occurrence
/// in every group, is odd. Duplicates within a single group count too, so
/// `[a, a], [a]` gives `{a}`.
///
/// For two groups without internal duplicates this is the classical symmetric
/// difference: the elements in exactly one of the two. Zero groups give the
/// empty set.
pub fn symmetric_difference<T, G>(groups: impl IntoIterator<Item = G>) -> Set<T>
where
    T: Hash + Eq,
    G: IntoIterator<Item = T>,
{
    let mut groups = groups.into_iter().peekable();
    if groups.peek().is_none() {
        return Set::default();
    }
    // `groups` has a first group, so `concatenate` can't fail
    let sum = multiset_algebra::concatenate(groups).unwrap_or_default();
    sum.into_iter().filter(|(_, n)| n % 2 == 1).map(|(element, _)| element).collect()
}
