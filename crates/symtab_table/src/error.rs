//! Error types for the scope stack.

use thiserror::Error;

/// Errors surfaced by the scope stack.
///
/// Only construction can fail fatally. Once a stack exists, every failure is
/// a recoverable result value: duplicate inserts and missing names come back
/// as plain `bool`/`Option` results, and a refused scope exit leaves the
/// stack unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymtabError {
    /// A bucket count of zero would make the hash modulus undefined.
    #[error("bucket count must be positive")]
    InvalidBucketCount,

    /// `exit_scope` was called with only the global scope live.
    #[error("cannot exit the global scope")]
    ScopeUnderflow,
}
