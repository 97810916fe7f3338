//! N-ary set and multiset algebra over groups of elements.
//!
//! A *group* is any finite sequence of hashable elements, duplicates allowed,
//! and every operation takes a sequence of groups. The `multiset_algebra`
//! module counts occurrences; the `set_algebra` module only notices presence.
//!
//! ```
//! use groupset::{multiset_algebra, set_algebra, Multiset};
//!
//! let groups = [vec!["a", "a", "b"], vec!["a", "b", "b", "b"]];
//! let counted = multiset_algebra::union(groups.clone()).unwrap();
//! assert_eq!(counted, Multiset::from_counts([("a", 2), ("b", 3)]));
//!
//! let noticed = set_algebra::symmetric_difference(groups);
//! assert!(noticed.contains("a") && !noticed.contains("b"));
//! ```
//!
//! The `args`, `io` and `operations` modules make up the `groupset` command,
//! which treats each file named on the command line as a group of lines.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod error;
pub use crate::error::{Error, Result};
pub mod multiset;
pub use crate::multiset::Multiset;
pub mod set;
pub use crate::set::Set;
pub mod groups;
pub mod multiset_algebra;
pub mod set_algebra;

pub mod args;
pub mod io;
pub mod operations;
