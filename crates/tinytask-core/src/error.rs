//! Error types for task list mutations

use crate::id::TaskId;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by [`crate::TaskStore`]
///
/// Every variant is local to the single call that produced it; the store is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Title was empty or whitespace only
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Referenced task does not exist (any more)
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Move index outside the allowed range
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// Offending index
        index: usize,
        /// List length at the time of the call
        len: usize,
    },

    /// Commit requested while no edit session is open
    #[error("no edit session is active")]
    NoActiveEdit,
}
