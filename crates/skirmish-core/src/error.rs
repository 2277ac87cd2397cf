//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A selection kind that cannot be bound to an acting fighter.
    ///
    /// Enemy-target selections are read by battle setup instead of being
    /// bound; callers branch on the selection kind first.
    #[error("selection of kind {kind} cannot be bound to an owner")]
    UnbindableSelection {
        /// The selection kind that was rejected.
        kind: &'static str,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),
}
