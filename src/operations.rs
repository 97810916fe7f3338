//! Houses the `calculate` and `exec` functions, which run an operation named
//! on the command line over files considered as groups of lines.
use anyhow::Result;
use log::debug;
use std::borrow::Cow;
use std::io;

use crate::args::{Algebra, Args, OpName};
use crate::groups::materialize;
use crate::io::{first_and_rest, lines_of, Layout};
use crate::multiset::Multiset;
use crate::set::Set;
use crate::{multiset_algebra, set_algebra};

/// Lines from the first operand are borrowed from its contents; lines from
/// later operands are owned.
pub type Line<'data> = Cow<'data, [u8]>;

/// The result of an operation: a set of lines, or a multiset of lines.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<'data> {
    /// Result of a set operation
    Set(Set<Line<'data>>),
    /// Result of a multiset operation
    Multiset(Multiset<Line<'data>>),
}

/// Runs `operation` over `groups` in the given `algebra`:
///
/// * `OpName::Union` keeps the lines that occur in any group,
/// * `OpName::Intersect` keeps the lines that occur in every group,
/// * `OpName::Diff` keeps the lines of the first group that are in no other group,
/// * `OpName::SymDiff` keeps the lines that occur an odd number of times overall, and
/// * `OpName::Concat` keeps every line, counting all its occurrences.
///
/// In the multiset algebra `Union`, `Intersect` and `Diff` count lines too.
/// `SymDiff` is always a set operation and `Concat` always a multiset
/// operation, whatever `algebra` says.
pub fn calculate(
    operation: OpName,
    algebra: Algebra,
    groups: Vec<Vec<Line<'_>>>,
) -> crate::Result<Outcome<'_>> {
    debug!("{operation:?} in the {algebra:?} algebra over {} groups", groups.len());
    let outcome = match (operation, algebra) {
        (OpName::Union, Algebra::Set) => Outcome::Set(set_algebra::union(groups)),
        (OpName::Intersect, Algebra::Set) => Outcome::Set(set_algebra::intersection(groups)?),
        (OpName::Diff, Algebra::Set) => Outcome::Set(set_algebra::difference(groups)),
        (OpName::SymDiff, _) => Outcome::Set(set_algebra::symmetric_difference(groups)),
        (OpName::Union, Algebra::Multiset) => Outcome::Multiset(multiset_algebra::union(groups)?),
        (OpName::Intersect, Algebra::Multiset) => {
            Outcome::Multiset(multiset_algebra::intersection(groups)?)
        }
        (OpName::Diff, Algebra::Multiset) => {
            Outcome::Multiset(multiset_algebra::difference(groups)?)
        }
        (OpName::Concat, _) => Outcome::Multiset(multiset_algebra::concatenate(groups)?),
    };
    debug!("{} distinct lines in the result", outcome.len());
    Ok(outcome)
}

impl Outcome<'_> {
    /// The number of distinct lines
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Outcome::Set(set) => set.len(),
            Outcome::Multiset(multiset) => multiset.len(),
        }
    }

    /// Is the result empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the lines of the outcome with the given `layout`. A multiset
    /// writes each line as many times as it occurs, or, if `count` is set, once
    /// after its count. `count` makes no difference to a set.
    pub fn output_to(&self, layout: &Layout, count: bool, out: impl io::Write) -> Result<()> {
        match self {
            Outcome::Set(set) => layout.write_lines(set.iter().map(Cow::as_ref), out),
            Outcome::Multiset(multiset) if count => {
                layout.write_counted(multiset.iter().map(|(line, n)| (Cow::as_ref(line), n)), out)
            }
            Outcome::Multiset(multiset) => {
                layout.write_lines(multiset.occurrences().map(Cow::as_ref), out)
            }
        }
    }
}

/// Reads the files named in `args`, runs the requested operation, and writes
/// the result to `out`. With no files, operations that need a first group
/// fail, and the rest write nothing.
pub fn exec(args: &Args, out: impl io::Write) -> Result<()> {
    let Some((first_operand, rest)) = first_and_rest(&args.files)? else {
        let outcome = calculate(args.op, args.algebra, Vec::new())?;
        return outcome.output_to(&Layout::default(), args.count, out);
    };

    let layout = Layout::of(&first_operand);
    let mut groups: Vec<Vec<Line>> =
        vec![materialize(lines_of(layout.body(&first_operand)).map(Cow::Borrowed))];
    for operand in rest {
        let lines = operand?.lines()?;
        groups.push(lines.into_iter().map(Cow::Owned).collect());
    }

    let outcome = calculate(args.op, args.algebra, groups)?;
    outcome.output_to(&layout, args.count, out)
}
