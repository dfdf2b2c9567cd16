//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolution core and external
//! systems. Each port is a trait implemented by adapters in the
//! infrastructure layer.

mod namespace_source;

pub use namespace_source::{NamespaceSource, NamespaceSourceError};
