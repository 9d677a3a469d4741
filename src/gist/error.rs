//! Error taxonomy for Gist API operations

use thiserror::Error;

/// Errors produced by [`GistClient`](super::GistClient) operations
///
/// `Validation` and the pre-flight `Authentication` case are raised before any
/// network I/O. Every other variant describes the outcome of exactly one
/// request.
#[derive(Debug, Error)]
pub enum GistError {
    /// Malformed caller input (empty id, empty or non-object payload)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// No HTTP response was obtained
    #[error("Can't perform this action due to network errors. Reason: {0}")]
    Network(String),

    /// HTTP 404
    #[error("The requested gist does not exist, or the token does not have enough permissions")]
    NotFound,

    /// HTTP 401/403, or a mutating call attempted without a token
    #[error("{0}")]
    Authentication(String),

    /// HTTP 422
    #[error("The provided data has errors")]
    UnprocessableData,

    /// Any other status >= 300
    #[error("Unexpected error ({status}). Reason: {message}")]
    Unexpected { status: u16, message: String },

    /// A success status whose body could not be decoded as JSON
    #[error("Failed to decode gist response: {0}")]
    InvalidResponse(String),
}

/// Discriminant of [`GistError`] for callers that only need to branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GistErrorKind {
    Validation,
    Network,
    NotFound,
    Authentication,
    UnprocessableData,
    Unexpected,
    InvalidResponse,
}

impl GistError {
    pub fn kind(&self) -> GistErrorKind {
        match self {
            GistError::Validation(_) => GistErrorKind::Validation,
            GistError::Network(_) => GistErrorKind::Network,
            GistError::NotFound => GistErrorKind::NotFound,
            GistError::Authentication(_) => GistErrorKind::Authentication,
            GistError::UnprocessableData => GistErrorKind::UnprocessableData,
            GistError::Unexpected { .. } => GistErrorKind::Unexpected,
            GistError::InvalidResponse(_) => GistErrorKind::InvalidResponse,
        }
    }

    pub(crate) fn credentials_required() -> Self {
        GistError::Authentication("GitHub credentials are required".to_string())
    }

    pub(crate) fn credentials_rejected() -> Self {
        GistError::Authentication(
            "The credentials are invalid, or the token does not have permissions".to_string(),
        )
    }
}

/// Result alias for Gist API operations
pub type GistResult<T> = Result<T, GistError>;
