//! Shortcut definition types
//!
//! A shortcut is a keyword-indexed URL template plus metadata. Shortcuts are
//! loaded from YAML namespace files and are immutable during resolution.

use serde::{Deserialize, Serialize};

/// A single shortcut definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// The URL template, may contain placeholders.
    pub url: String,

    /// Human-readable title shown in suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Set when the shortcut is deprecated in favor of another query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,

    /// Whether the shortcut's target is currently usable.
    ///
    /// Not part of the data files; the loading collaborator marks every
    /// shortcut it loads reachable unless it has checked and found it broken.
    #[serde(default = "default_reachable")]
    pub reachable: bool,
}

const fn default_reachable() -> bool {
    true
}

impl Shortcut {
    /// Creates a reachable shortcut from a URL template.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            deprecated: None,
            reachable: true,
        }
    }

    /// Adds a title to this shortcut.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Marks this shortcut unreachable.
    #[must_use]
    pub fn unreachable(mut self) -> Self {
        self.reachable = false;
        self
    }

    /// Returns true if the shortcut carries a deprecation record.
    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }
}

/// Deprecation metadata for a shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    /// The replacement query, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative: Option<DeprecationAlternative>,

    /// ISO date the deprecation was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// The suggested replacement for a deprecated shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecationAlternative {
    /// A query template the user should run instead.
    pub query: String,
}
