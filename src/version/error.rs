use thiserror::Error;

use crate::version::types::VersionState;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Cache lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Repository not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid registry base URL: {0}")]
    InvalidBaseUrl(String),
}

impl RegistryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RegistryError::Network(_) | RegistryError::InvalidBaseUrl(_) => {
                FailureKind::TransportFailure
            }
            RegistryError::RateLimited { .. }
            | RegistryError::NotFound(_)
            | RegistryError::InvalidResponse(_) => FailureKind::UpstreamError,
        }
    }
}

/// Ways a resolution can fail to produce a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never got a response
    TransportFailure,
    /// Non-success status or a body that is not a tag list
    UpstreamError,
    /// A valid, empty tag list
    NoTagsPublished,
}

impl From<FailureKind> for VersionState {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::TransportFailure | FailureKind::UpstreamError => VersionState::Error,
            FailureKind::NoTagsPublished => VersionState::Unknown,
        }
    }
}
