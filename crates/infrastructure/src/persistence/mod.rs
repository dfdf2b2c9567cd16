//! File-based persistence adapters

mod config_repository;
mod namespace_repository;

pub use config_repository::{Config, ConfigError, ConfigRepository};
pub use namespace_repository::YamlNamespaceRepository;
