//! Unified error type surfaced by the HP service.
//!
//! Wraps repository failures and broken stored documents so transports can
//! tell "no such player" apart from everything that should never happen.
use hp_content::RecordError;
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("player {name:?} not found")]
    PlayerNotFound { name: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("stored player {name:?} is invalid")]
    InvalidRecord {
        name: String,
        #[source]
        source: RecordError,
    },
}
