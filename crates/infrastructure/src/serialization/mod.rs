//! Serialization helpers

mod yaml;

pub use yaml::{SerializationError, from_yaml_slice, from_yaml_str};
