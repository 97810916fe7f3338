//! Errors returned by the set and multiset algebra

use thiserror::Error;

/// Result type alias for the algebra operations
pub type Result<T> = std::result::Result<T, Error>;

/// The ways an algebra operation can fail
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation seeds its result from the first group, and was given no
    /// groups at all. `operation` names the operation, e.g. `"multiset union"`.
    #[error("{operation} needs at least one group")]
    EmptyInput {
        /// Name of the operation that was called with zero groups
        operation: &'static str,
    },
}
