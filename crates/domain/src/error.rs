//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The query text contains no keyword.
    #[error("empty query: {0}")]
    EmptyQuery(String),

    /// A namespace name is invalid or empty.
    #[error("invalid namespace name: {0}")]
    InvalidNamespaceName(String),

    /// A shortcut definition is missing its URL template.
    #[error("shortcut without URL template: {0}")]
    MissingUrlTemplate(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
