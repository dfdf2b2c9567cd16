//! Namespace source port
//!
//! The core never fetches or parses shortcut data itself; it resolves
//! within namespace lists handed to it. This port is the seam where
//! already-loaded namespace data enters, in configured priority order.

use async_trait::async_trait;
use wayfinder_domain::Namespace;

/// Errors that can occur while loading namespaces.
#[derive(Debug, thiserror::Error)]
pub enum NamespaceSourceError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Namespace data could not be parsed.
    #[error("invalid namespace data in {name}: {message}")]
    Invalid {
        /// The namespace whose data failed to parse.
        name: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Supplies loaded namespaces in configured priority order.
#[async_trait]
pub trait NamespaceSource: Send + Sync {
    /// Loads the named namespaces, preserving the order of `names`.
    ///
    /// A namespace with no data is returned empty rather than omitted, so
    /// the priority order stays aligned with the configuration.
    ///
    /// # Errors
    /// Returns an error when namespace data exists but cannot be read or
    /// parsed.
    async fn load(&self, names: &[String]) -> Result<Vec<Namespace>, NamespaceSourceError>;
}
