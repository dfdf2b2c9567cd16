//! Placeholder grammar for URL templates
//!
//! Recognizes placeholder tokens in two syntax generations and splits each
//! into a semantic name plus an attribute mapping:
//!
//! - new: `<name>`, `<$name>`, `<name: attr: value, ...>` — attributes may
//!   also be wrapped in braces, `<name: { attr: value }>`;
//! - legacy: `{%name}`, `{$name}`, `{%name|attr=value|...}`.
//!
//! A `$` sigil marks a variable (environment lookup) in both generations;
//! everything else is a positional argument. Malformed tokens (unbalanced
//! delimiters, empty names) are not matched and never produce partial
//! results. A template may mix both generations; each token is parsed
//! independently.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

/// How a placeholder is filled during substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Filled from the user's positional query arguments.
    Argument,
    /// Filled from ambient environment state (language, country, ...).
    Variable,
}

/// A placeholder token detected in a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Semantic identifier, trimmed, without the `$` sigil.
    pub name: String,

    /// The exact matched substring, used for verbatim replacement.
    pub raw: String,

    /// Key/value modifiers parsed from the token body. Always present,
    /// empty for bare names.
    pub attributes: HashMap<String, String>,

    /// Argument or variable.
    pub kind: PlaceholderKind,

    /// Byte range of the token in the template.
    pub span: Range<usize>,
}

/// Grouped view of scanned placeholders: name → raw token → attributes.
///
/// The same name may legally occur more than once in a template (e.g. in
/// path and query string) with different raw tokens and attributes; callers
/// substitute each raw occurrence independently.
pub type PlaceholderMap = BTreeMap<String, BTreeMap<String, HashMap<String, String>>>;

/// Scans a template for placeholders of both syntax generations.
///
/// Returns tokens in document order with non-overlapping spans.
#[must_use]
pub fn scan(template: &str) -> Vec<Placeholder> {
    let mut placeholders = scan_new(template);
    placeholders.extend(scan_legacy(template));
    placeholders.sort_by_key(|p| p.span.start);
    placeholders
}

/// Returns all placeholders grouped by name.
#[must_use]
pub fn placeholders_from(template: &str) -> PlaceholderMap {
    group(scan(template))
}

/// Returns only variable placeholders, grouped by name.
#[must_use]
pub fn variables_from(template: &str) -> PlaceholderMap {
    group(
        scan(template)
            .into_iter()
            .filter(|p| p.kind == PlaceholderKind::Variable),
    )
}

/// Returns only argument placeholders, grouped by name.
#[must_use]
pub fn arguments_from(template: &str) -> PlaceholderMap {
    group(
        scan(template)
            .into_iter()
            .filter(|p| p.kind == PlaceholderKind::Argument),
    )
}

fn group(placeholders: impl IntoIterator<Item = Placeholder>) -> PlaceholderMap {
    let mut map = PlaceholderMap::new();
    for placeholder in placeholders {
        map.entry(placeholder.name)
            .or_default()
            .insert(placeholder.raw, placeholder.attributes);
    }
    map
}

/// Scans for new-syntax tokens: `<` body `>`.
fn scan_new(template: &str) -> Vec<Placeholder> {
    let mut placeholders = Vec::new();
    let mut pos = 0;

    while let Some(offset) = template[pos..].find('<') {
        let open = pos + offset;
        let after_open = &template[open + 1..];

        let Some(close) = after_open.find('>') else {
            // Unterminated token; nothing further can match.
            break;
        };
        let body = &after_open[..close];

        if let Some(inner) = body.find('<') {
            // A second opener before the closer; restart from it.
            pos = open + 1 + inner;
            continue;
        }

        let end = open + 1 + close + 1;
        if let Some((name, kind, attributes)) = parse_new_body(body) {
            placeholders.push(Placeholder {
                name,
                raw: template[open..end].to_string(),
                attributes,
                kind,
                span: open..end,
            });
        }
        pos = end;
    }

    placeholders
}

/// Parses the body of a new-syntax token into name, kind and attributes.
fn parse_new_body(body: &str) -> Option<(String, PlaceholderKind, HashMap<String, String>)> {
    let body = body.trim();
    let (body, kind) = match body.strip_prefix('$') {
        Some(rest) => (rest, PlaceholderKind::Variable),
        None => (body, PlaceholderKind::Argument),
    };

    let (name, attributes) = match body.split_once(':') {
        Some((name, attribute_block)) => (name.trim(), parse_new_attributes(attribute_block)),
        None => (body.trim(), HashMap::new()),
    };

    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), kind, attributes))
}

/// Parses a new-syntax attribute block: `k: v, k2: v2`, optionally wrapped
/// in braces as `{ k: v, k2: v2 }`.
fn parse_new_attributes(block: &str) -> HashMap<String, String> {
    let block = block.trim();
    let block = block
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(block);

    let mut attributes = HashMap::new();
    for pair in block.split(',') {
        if let Some((key, value)) = pair.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                attributes.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    attributes
}

/// Scans for legacy tokens: `{%` body `}` (argument) and `{$` body `}`
/// (variable).
fn scan_legacy(template: &str) -> Vec<Placeholder> {
    let mut placeholders = Vec::new();
    let mut pos = 0;

    while let Some(offset) = template[pos..].find('{') {
        let open = pos + offset;
        let kind = match template.as_bytes().get(open + 1).copied() {
            Some(b'%') => PlaceholderKind::Argument,
            Some(b'$') => PlaceholderKind::Variable,
            _ => {
                pos = open + 1;
                continue;
            }
        };

        let body_start = open + 2;
        let Some(close) = template[body_start..].find('}') else {
            break;
        };
        let body = &template[body_start..body_start + close];

        if let Some(inner) = body.find('{') {
            pos = body_start + inner;
            continue;
        }

        let end = body_start + close + 1;
        if let Some((name, attributes)) = parse_legacy_body(body) {
            placeholders.push(Placeholder {
                name,
                raw: template[open..end].to_string(),
                attributes,
                kind,
                span: open..end,
            });
        }
        pos = end;
    }

    placeholders
}

/// Parses the body of a legacy token: `name` or `name|k=v|k2=v2`.
fn parse_legacy_body(body: &str) -> Option<(String, HashMap<String, String>)> {
    let mut segments = body.split('|');
    let name = segments.next()?.trim();
    if name.is_empty() {
        return None;
    }

    let mut attributes = HashMap::new();
    for segment in segments {
        if let Some((key, value)) = segment.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                attributes.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    Some((name.to_string(), attributes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn variables_from_new_syntax() {
        let map = variables_from("https://<$language>.<query>");
        assert_eq!(map.len(), 1);
        assert_eq!(map["language"]["<$language>"], attrs(&[]));
    }

    #[test]
    fn variables_from_legacy_syntax() {
        let map = variables_from("https://{$language}.{%query}");
        assert_eq!(map.len(), 1);
        assert_eq!(map["language"]["{$language}"], attrs(&[]));
    }

    #[test]
    fn arguments_from_new_syntax() {
        let map = arguments_from("https://<$language>.<query>");
        assert_eq!(map.len(), 1);
        assert_eq!(map["query"]["<query>"], attrs(&[]));
    }

    #[test]
    fn arguments_from_legacy_syntax() {
        let map = arguments_from("https://{%query}");
        assert_eq!(map.len(), 1);
        assert_eq!(map["query"]["{%query}"], attrs(&[]));
    }

    #[test]
    fn bare_name_yields_present_empty_attributes() {
        let map = placeholders_from("https://<query>");
        assert_eq!(map["query"]["<query>"], attrs(&[]));
    }

    #[test]
    fn new_syntax_attributes() {
        let map = placeholders_from("https://<Start: type: city>");
        assert_eq!(map["Start"]["<Start: type: city>"], attrs(&[("type", "city")]));
    }

    #[test]
    fn new_syntax_attributes_with_braces() {
        let map = placeholders_from("https://<Start: { type: city }>");
        assert_eq!(
            map["Start"]["<Start: { type: city }>"],
            attrs(&[("type", "city")])
        );
    }

    #[test]
    fn legacy_attributes() {
        let map = placeholders_from("https://{%Start|type=city}");
        assert_eq!(map["Start"]["{%Start|type=city}"], attrs(&[("type", "city")]));
    }

    #[test]
    fn multiple_attributes_with_loose_whitespace() {
        let map = placeholders_from("<Start: type : city , encoding : iso-8859-1>");
        assert_eq!(
            map["Start"].values().next().unwrap(),
            &attrs(&[("type", "city"), ("encoding", "iso-8859-1")])
        );

        let legacy = placeholders_from("{%Start| type = city | encoding = iso-8859-1 }");
        assert_eq!(
            legacy["Start"].values().next().unwrap(),
            &attrs(&[("type", "city"), ("encoding", "iso-8859-1")])
        );
    }

    #[test]
    fn same_name_repeats_with_distinct_raw_tokens() {
        let map = placeholders_from("https://example.com/<query>?q=<query: encoding: none>");
        let occurrences = &map["query"];
        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences["<query>"], attrs(&[]));
        assert_eq!(occurrences["<query: encoding: none>"], attrs(&[("encoding", "none")]));
    }

    #[test]
    fn both_generations_in_one_template() {
        let placeholders = scan("https://{$language}.example.com/<query>?p={%1}");
        let names: Vec<_> = placeholders.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["language", "query", "1"]);
        assert_eq!(placeholders[0].kind, PlaceholderKind::Variable);
        assert_eq!(placeholders[1].kind, PlaceholderKind::Argument);
        assert_eq!(placeholders[2].kind, PlaceholderKind::Argument);
    }

    #[test]
    fn malformed_tokens_are_not_matched() {
        assert!(scan("https://example.com/<query").is_empty());
        assert!(scan("https://example.com/{%query").is_empty());
        assert!(scan("https://example.com/<>").is_empty());
        assert!(scan("https://example.com/{%}").is_empty());
        // Plain braces without a sigil are not placeholders.
        assert!(scan("https://example.com/{query}").is_empty());
    }

    #[test]
    fn stray_opener_before_real_token_is_skipped() {
        let placeholders = scan("https://a<b.example.com/<query>");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].name, "query");
        assert_eq!(placeholders[0].raw, "<query>");
    }

    #[test]
    fn scan_leaves_no_placeholder_shaped_residue() {
        let template = "https://{$language}.example.com/<first>/{%2|encoding=none}?q=<query: type: text>";
        let mut rebuilt = template.to_string();
        for placeholder in scan(template) {
            rebuilt = rebuilt.replace(&placeholder.raw, "X");
        }
        assert!(scan(&rebuilt).is_empty(), "residue in {rebuilt}");
    }
}
