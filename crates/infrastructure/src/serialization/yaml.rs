//! YAML deserialization helpers
//!
//! Shortcut and config data live in YAML files; these helpers wrap
//! `serde_yaml` with a typed error.

use serde::de::DeserializeOwned;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// YAML deserialization failed.
    #[error("YAML deserialization failed: {0}")]
    Deserialize(#[from] serde_yaml::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Deserializes a value from YAML text.
///
/// # Errors
/// Returns an error if the text is not valid YAML for the target type.
pub fn from_yaml_str<T: DeserializeOwned>(text: &str) -> Result<T, SerializationError> {
    Ok(serde_yaml::from_str(text)?)
}

/// Deserializes a value from YAML bytes.
///
/// # Errors
/// Returns an error if the bytes are not UTF-8 or not valid YAML for the
/// target type.
pub fn from_yaml_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    from_yaml_str(std::str::from_utf8(bytes)?)
}
