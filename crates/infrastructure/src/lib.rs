//! Wayfinder Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: file-based namespace and config loading.

pub mod persistence;
pub mod serialization;

pub use persistence::{Config, ConfigError, ConfigRepository, YamlNamespaceRepository};
pub use serialization::{SerializationError, from_yaml_slice, from_yaml_str};
