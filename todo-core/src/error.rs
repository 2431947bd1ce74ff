//! Error types for todo-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::TodoId;

/// All errors that can arise from store I/O.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (save path).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`StoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}

/// All errors that can arise from manager operations.
///
/// Business-rule violations carry their user-facing message; store failures
/// pass through unchanged.
#[derive(Debug, Error)]
pub enum TodoError {
    /// The title was empty or whitespace-only after trimming.
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// No todo with the requested id exists in the store.
    #[error("Todo #{id} not found")]
    NotFound { id: TodoId },

    /// The todo is already marked done; completion is one-way.
    #[error("Todo #{id} is already done")]
    AlreadyDone { id: TodoId },

    /// An error from the store, uninterpreted.
    #[error(transparent)]
    Store(#[from] StoreError),
}
