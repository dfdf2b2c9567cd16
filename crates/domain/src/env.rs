//! Environment state
//!
//! Ambient values that variable placeholders draw from during template
//! expansion: language, country, and any extra named variables. Read-only
//! from the core's perspective.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The resolution environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Env {
    /// Two-letter language code, lowercase.
    pub language: String,

    /// Two-letter country code, lowercase.
    pub country: String,

    /// Keyword used as a last resort when no shortcut matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_keyword: Option<String>,

    /// Additional named variables available to templates.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variables: HashMap<String, String>,
}

impl Default for Env {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            country: "us".to_string(),
            default_keyword: None,
            variables: HashMap::new(),
        }
    }
}

impl Env {
    /// Creates an environment with the given language and country.
    #[must_use]
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        let language: String = language.into();
        let country: String = country.into();
        Self {
            language: language.to_lowercase(),
            country: country.to_lowercase(),
            default_keyword: None,
            variables: HashMap::new(),
        }
    }

    /// Sets the default keyword.
    #[must_use]
    pub fn with_default_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.default_keyword = Some(keyword.into());
        self
    }

    /// Adds an extra named variable.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Resolves a variable name to its value.
    ///
    /// `language` and `country` resolve to the dedicated fields; any other
    /// name is looked up among the extra variables.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "language" => Some(&self.language),
            "country" => Some(&self.country),
            _ => self.variables.get(name).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_covers_builtin_and_extra_variables() {
        let env = Env::new("de", "DE").with_variable("city", "berlin");

        assert_eq!(env.lookup("language"), Some("de"));
        assert_eq!(env.lookup("country"), Some("de"));
        assert_eq!(env.lookup("city"), Some("berlin"));
        assert_eq!(env.lookup("missing"), None);
    }

    #[test]
    fn defaults_are_en_us() {
        let env = Env::default();
        assert_eq!(env.language, "en");
        assert_eq!(env.country, "us");
        assert_eq!(env.default_keyword, None);
    }
}
