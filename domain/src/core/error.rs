//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("A query is already pending")]
    QueryPending,
}

impl DomainError {
    /// Rejections the user never sees: the submission is simply dropped.
    pub fn is_silent_rejection(&self) -> bool {
        matches!(self, DomainError::EmptyQuery | DomainError::QueryPending)
    }
}
