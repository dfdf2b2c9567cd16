//! Query types
//!
//! A query is the parsed form of what the user typed: a keyword, its
//! comma-separated arguments, and the unsplit remainder. Fallback resolution
//! attempts derive fresh query values; a query is never mutated in place.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A parsed user query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// The keyword, the first whitespace-delimited token.
    pub keyword: String,

    /// Comma-separated arguments, each trimmed.
    pub args: Vec<String>,

    /// The unsplit remainder after the keyword.
    pub argument_string: String,

    /// The full query text as typed.
    pub text: String,
}

impl Query {
    /// Parses raw query text into keyword, arguments and argument string.
    ///
    /// The first whitespace-delimited token is the keyword; the remainder is
    /// kept verbatim as the argument string and additionally split on commas
    /// (with surrounding whitespace trimmed) into positional arguments.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyQuery`] when the text contains no keyword.
    pub fn parse(text: &str) -> DomainResult<Self> {
        let trimmed = text.trim();
        let Some(keyword) = trimmed.split_whitespace().next() else {
            return Err(DomainError::EmptyQuery(text.to_string()));
        };

        let argument_string = trimmed[keyword.len()..].trim_start().to_string();
        let args = split_arguments(&argument_string);

        Ok(Self {
            keyword: keyword.to_string(),
            args,
            argument_string,
            text: trimmed.to_string(),
        })
    }

    /// Returns the number of positional arguments.
    #[must_use]
    pub fn argument_count(&self) -> usize {
        self.args.len()
    }

    /// Derives the whole-string fallback query: the same keyword with the
    /// unsplit argument string as the single argument.
    #[must_use]
    pub fn with_whole_argument_string(&self) -> Self {
        Self {
            keyword: self.keyword.clone(),
            args: vec![self.argument_string.clone()],
            argument_string: self.argument_string.clone(),
            text: self.text.clone(),
        }
    }

    /// Derives the default-keyword fallback query: the configured default
    /// keyword with the full original query text as the single argument.
    #[must_use]
    pub fn with_default_keyword(&self, default_keyword: &str) -> Self {
        Self {
            keyword: default_keyword.to_string(),
            args: vec![self.text.clone()],
            argument_string: self.text.clone(),
            text: self.text.clone(),
        }
    }
}

/// Splits an argument string on commas, trimming each piece.
fn split_arguments(argument_string: &str) -> Vec<String> {
    if argument_string.is_empty() {
        return Vec::new();
    }
    argument_string
        .split(',')
        .map(|arg| arg.trim().to_string())
        .collect()
}
