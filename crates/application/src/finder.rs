//! Shortcut finder
//!
//! Turns a `(keyword, argument count)` pair into a chosen shortcut through
//! three escalating match attempts over an ordered namespace list, then
//! picks the final shortcut in namespace-priority order.

use std::collections::HashMap;

use thiserror::Error;
use wayfinder_domain::{Env, Namespace, Query, Shortcut};

/// Shortcuts collected for one match attempt, keyed by namespace name.
///
/// A keyword/count pair may exist in several namespaces simultaneously;
/// all hits are collected, not just the first.
pub type FoundShortcuts = HashMap<String, Shortcut>;

/// The result of a successful collection: the hits plus the (possibly
/// fallback-derived) query whose arguments the template must be expanded
/// with.
#[derive(Debug, Clone)]
pub struct ShortcutMatch {
    /// Hits keyed by namespace name.
    pub shortcuts: FoundShortcuts,
    /// The effective query of the attempt that matched.
    pub query: Query,
}

/// Error from [`pick_shortcut`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickError {
    /// Hits were collected but none of them is marked reachable.
    ///
    /// The namespace load step is expected to mark every loaded shortcut
    /// reachable unless it checked and found it broken, so callers should
    /// treat this as an explicit error, never as an implicit fallback.
    #[error("no reachable shortcut among {0} collected match(es)")]
    NoneReachable(usize),
}

/// Looks up `"<keyword> <argumentCount>"` in every namespace.
#[must_use]
pub fn match_shortcuts(
    keyword: &str,
    argument_count: usize,
    namespaces: &[Namespace],
) -> FoundShortcuts {
    let mut found = FoundShortcuts::new();
    for namespace in namespaces {
        if let Some(shortcut) = namespace.find(keyword, argument_count) {
            found.insert(namespace.name.clone(), shortcut.clone());
        }
    }
    found
}

/// Collects shortcuts for a query, escalating through fallback attempts.
///
/// 1. Exact: `(keyword, args.len())`.
/// 2. Whole string: if nothing matched and the query has arguments, retry
///    with the unsplit argument string as the only argument.
/// 3. Default keyword: if still nothing and the environment configures a
///    default keyword, retry with it and the full query text as the only
///    argument.
///
/// Each attempt derives a fresh query value; the caller's query is never
/// modified. Returns `None` when all attempts come up empty.
#[must_use]
pub fn collect_shortcuts(
    query: &Query,
    env: &Env,
    namespaces: &[Namespace],
) -> Option<ShortcutMatch> {
    let found = match_shortcuts(&query.keyword, query.argument_count(), namespaces);
    if !found.is_empty() {
        return Some(ShortcutMatch {
            shortcuts: found,
            query: query.clone(),
        });
    }

    if query.argument_count() > 0 {
        tracing::debug!(keyword = %query.keyword, "not found yet, trying via whole argument string");
        let derived = query.with_whole_argument_string();
        let found = match_shortcuts(&derived.keyword, derived.argument_count(), namespaces);
        if !found.is_empty() {
            return Some(ShortcutMatch {
                shortcuts: found,
                query: derived,
            });
        }
    }

    if let Some(default_keyword) = env.default_keyword.as_deref() {
        tracing::debug!(default_keyword, "not found yet, trying via default keyword");
        let derived = query.with_default_keyword(default_keyword);
        let found = match_shortcuts(&derived.keyword, derived.argument_count(), namespaces);
        if !found.is_empty() {
            return Some(ShortcutMatch {
                shortcuts: found,
                query: derived,
            });
        }
    }

    None
}

/// Picks the final shortcut from the collected hits.
///
/// Iterates hits in namespace-priority order — the order of `namespaces`,
/// which encodes user-configured priority, never the iteration order of the
/// collected mapping — and returns the first hit whose `reachable` flag is
/// set.
///
/// # Errors
/// Returns [`PickError::NoneReachable`] when no collected hit is reachable.
pub fn pick_shortcut<'a>(
    found: &'a FoundShortcuts,
    namespaces: &[Namespace],
) -> Result<&'a Shortcut, PickError> {
    for namespace in namespaces {
        if let Some(shortcut) = found.get(&namespace.name) {
            if shortcut.reachable {
                return Ok(shortcut);
            }
        }
    }
    Err(PickError::NoneReachable(found.len()))
}
