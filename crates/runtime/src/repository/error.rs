//! Error types raised by repository implementations.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("player repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data for player {name:?}: {reason}")]
    CorruptedData { name: String, reason: String },

    #[error("player name {name:?} is too long to store")]
    NameTooLong { name: String },

    #[error("player write task failed")]
    WriteTask(#[source] tokio::task::JoinError),

    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
