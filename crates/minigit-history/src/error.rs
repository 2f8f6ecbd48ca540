//! History error types.

use thiserror::Error;

/// Result type for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Errors that can occur while manipulating the commit history.
///
/// None of these are fatal: every failing operation leaves the repository
/// exactly as it was, and the message is meant to be shown to the user
/// as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Commit attempted with an empty staging area while a HEAD exists.
    #[error("No files staged. Nothing to commit.")]
    NothingToCommit,

    /// Checkout asked for an id that is not in the graph.
    #[error("Commit ID not found: {0}")]
    CommitNotFound(String),

    /// Log or file inspection before any commit exists.
    #[error("No commits yet.")]
    EmptyHistory,
}

impl HistoryError {
    /// Create a not found error.
    pub fn commit_not_found(id: impl Into<String>) -> Self {
        Self::CommitNotFound(id.into())
    }
}
