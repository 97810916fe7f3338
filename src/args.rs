//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Returns the parsed command line, or an error if its options don't fit
/// together. The `Args` return value says which operation to run, with which
/// algebra, and on which files.
pub fn parsed() -> Result<Args> {
    resolved(CliArgs::parse())
}

/// The resolved command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// `op` is the operation requested
    pub op: OpName,
    /// `algebra` says whether lines are counted or only noticed
    pub algebra: Algebra,
    /// `count` asks for each distinct line to be printed once, after its count
    pub count: bool,
    /// `files` is the list of files from the command line
    pub files: Vec<PathBuf>,
}

/// Name of the requested operation
#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
pub enum OpName {
    /// Print the lines present in any file
    Union,
    /// Print the lines present in every file
    Intersect,
    /// Print the lines of the first file that are in no other file
    Diff,
    /// Print the lines that occur an odd number of times in all the files
    SymDiff,
    /// Print every line of every file, counted (always a multiset operation)
    Concat,
}

/// The algebra an operation runs in
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Algebra {
    /// Each file is a set of lines: only presence matters
    Set,
    /// Each file is a multiset of lines: the number of occurrences matters
    Multiset,
}

#[derive(Debug, Parser)]
#[command(name = "groupset", version, about)]
/// `CliArgs` contains the command line as `clap` parses it.
struct CliArgs {
    #[arg(value_enum)]
    /// The operation to run
    op: OpName,
    #[arg(short, long)]
    /// Treat files as multisets of lines, so repeated lines count
    multiset: bool,
    #[arg(short, long)]
    /// Print each distinct line once, prefixed by its count (multiset results only)
    count: bool,
    #[arg(name = "Input files")]
    /// The files to take as operands
    files: Vec<PathBuf>,
}

/// Settles which algebra to use, and rejects options that don't fit together.
fn resolved(cli: CliArgs) -> Result<Args> {
    let algebra = match (cli.op, cli.multiset) {
        (OpName::Concat, _) | (_, true) => Algebra::Multiset,
        (_, false) => Algebra::Set,
    };
    if cli.op == OpName::SymDiff && cli.multiset {
        bail!("sym-diff is a set operation and has no --multiset form");
    }
    if cli.count && algebra == Algebra::Set {
        bail!("--count needs a multiset result; add --multiset");
    }
    Ok(Args { op: cli.op, algebra, count: cli.count, files: cli.files })
}
