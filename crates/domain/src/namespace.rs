//! Namespace types
//!
//! A namespace is a named, prioritized source of shortcut definitions. Its
//! index maps `"<keyword> <argumentCount>"` keys to shortcuts and is
//! read-only during resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::shortcut::Shortcut;

/// Builds the index key for a keyword and argument count.
#[must_use]
pub fn shortcut_key(keyword: &str, argument_count: usize) -> String {
    format!("{keyword} {argument_count}")
}

/// The origin of a namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    /// A curated, site-provided namespace (e.g. `o`, `en`, `.de`).
    #[default]
    Site,
    /// A user-defined namespace.
    User,
}

/// A named source of shortcuts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// The namespace name, also its identity in pick order.
    pub name: String,

    /// Whether the namespace is site-provided or user-defined.
    #[serde(default)]
    pub kind: NamespaceKind,

    /// Index from `"<keyword> <argumentCount>"` to the shortcut definition.
    #[serde(default)]
    pub shortcuts: HashMap<String, Shortcut>,
}

impl Namespace {
    /// Creates an empty site namespace.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NamespaceKind::Site,
            shortcuts: HashMap::new(),
        }
    }

    /// Creates an empty user namespace.
    #[must_use]
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NamespaceKind::User,
            shortcuts: HashMap::new(),
        }
    }

    /// Adds a shortcut under the given keyword and argument count.
    #[must_use]
    pub fn with_shortcut(mut self, keyword: &str, argument_count: usize, shortcut: Shortcut) -> Self {
        self.shortcuts
            .insert(shortcut_key(keyword, argument_count), shortcut);
        self
    }

    /// Looks up the shortcut for a keyword and argument count.
    #[must_use]
    pub fn find(&self, keyword: &str, argument_count: usize) -> Option<&Shortcut> {
        self.shortcuts.get(&shortcut_key(keyword, argument_count))
    }

    /// Returns the number of indexed shortcuts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    /// Returns true if the namespace holds no shortcuts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn key_format_matches_index() {
        assert_eq!(shortcut_key("g", 1), "g 1");
        assert_eq!(shortcut_key("db", 2), "db 2");
    }

    #[test]
    fn find_honors_argument_count() {
        let namespace = Namespace::new("o")
            .with_shortcut("w", 1, Shortcut::new("https://en.wikipedia.org/wiki/<query>"))
            .with_shortcut("w", 0, Shortcut::new("https://en.wikipedia.org"));

        assert!(namespace.find("w", 1).is_some());
        assert!(namespace.find("w", 0).is_some());
        assert_eq!(namespace.find("w", 2), None);
    }
}
