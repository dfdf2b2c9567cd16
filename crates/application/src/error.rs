//! Application error types

use thiserror::Error;
use wayfinder_domain::DomainError;

use crate::ports::NamespaceSourceError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Loading namespace data failed.
    #[error("namespace source error: {0}")]
    NamespaceSource(#[from] NamespaceSourceError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
