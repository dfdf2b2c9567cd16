//! Resolve query use case
//!
//! Composes the full resolution pipeline: locale transforms on the raw
//! argument text, the namespace-ordered shortcut search, and template
//! expansion of the chosen shortcut.

use url::Url;
use wayfinder_domain::{Env, Namespace, Query, Shortcut};

use crate::finder::{collect_shortcuts, pick_shortcut};
use crate::template::expand_template;
use crate::transforms::transform_eo_cx;

/// The outcome of resolving a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// A shortcut matched and its template was expanded.
    Resolved {
        /// The fully substituted URL.
        url: String,
        /// The chosen shortcut, including any deprecation record.
        shortcut: Shortcut,
    },

    /// No shortcut matched after all fallback attempts.
    NotFound,

    /// Shortcuts matched, but none of them is marked reachable.
    NoneReachable,
}

impl ResolveOutcome {
    /// Returns the resolved URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Resolved { url, .. } => Some(url),
            Self::NotFound | Self::NoneReachable => None,
        }
    }
}

/// Resolves a parsed query against an environment and namespace list.
pub struct ResolveQuery;

impl ResolveQuery {
    /// Executes the resolution pipeline.
    ///
    /// The namespaces are searched and picked in the order given, which
    /// encodes user-configured priority. Template expansion always
    /// completes; an expanded URL that does not parse is reported at warn
    /// level but still returned.
    #[must_use]
    pub fn execute(query: &Query, env: &Env, namespaces: &[Namespace]) -> ResolveOutcome {
        let query = apply_transforms(query, env);

        let Some(matched) = collect_shortcuts(&query, env, namespaces) else {
            tracing::debug!(keyword = %query.keyword, "no shortcut found");
            return ResolveOutcome::NotFound;
        };

        let shortcut = match pick_shortcut(&matched.shortcuts, namespaces) {
            Ok(shortcut) => shortcut,
            Err(error) => {
                tracing::warn!(keyword = %matched.query.keyword, %error, "resolution failed");
                return ResolveOutcome::NoneReachable;
            }
        };

        if let Some(deprecation) = &shortcut.deprecated {
            let alternative = deprecation
                .alternative
                .as_ref()
                .map_or("none", |alt| alt.query.as_str());
            tracing::warn!(keyword = %matched.query.keyword, alternative, "shortcut is deprecated");
        }

        let url = expand_template(&shortcut.url, &matched.query, env);
        if Url::parse(&url).is_err() {
            tracing::warn!(%url, "expanded URL does not parse");
        }

        ResolveOutcome::Resolved {
            url,
            shortcut: shortcut.clone(),
        }
    }
}

/// Applies locale transforms to the raw argument text.
///
/// For Esperanto environments the x-digraph transliteration runs over the
/// arguments, the argument string and the query text before any matching
/// or substitution.
fn apply_transforms(query: &Query, env: &Env) -> Query {
    if env.language != "eo" {
        return query.clone();
    }
    Query {
        keyword: query.keyword.clone(),
        args: query.args.iter().map(|arg| transform_eo_cx(arg)).collect(),
        argument_string: transform_eo_cx(&query.argument_string),
        text: transform_eo_cx(&query.text),
    }
}
