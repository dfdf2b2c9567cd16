//! Template substitutor
//!
//! Expands a URL template against a query and an environment. Arguments are
//! substituted before variables; variable values never depend on argument
//! substitution. [`expand_template`] scans the template once and replaces
//! every placeholder span in a single rebuild, so substituted values are
//! never re-scanned and cannot introduce new placeholders.
//!
//! Expansion always completes: a missing argument or variable substitutes
//! as the empty string.

use std::collections::HashMap;

use wayfinder_domain::{Env, Query};

use super::encoding::process_attribute_encoding;
use super::parser::{Placeholder, PlaceholderKind, scan};

/// The argument name that selects the whole unsplit argument string.
const WHOLE_STRING_NAME: &str = "query";

/// Expands a template, filling arguments from the query and variables from
/// the environment in one pass over the original template text.
#[must_use]
pub fn expand_template(template: &str, query: &Query, env: &Env) -> String {
    let placeholders = scan(template);
    let argument_values = assign_argument_values(&placeholders, query);

    substitute(template, &placeholders, |placeholder| match placeholder.kind {
        PlaceholderKind::Argument => {
            let value = argument_values
                .get(&placeholder.name)
                .map_or("", String::as_str);
            process_attribute_encoding(&placeholder.attributes, value)
        }
        PlaceholderKind::Variable => env.lookup(&placeholder.name).unwrap_or("").to_string(),
    })
}

/// Substitutes only the argument placeholders of a template.
///
/// A numeric name `n` selects the n-th argument (1-based); the name
/// `query` selects the unsplit argument string; any other name is filled
/// positionally in order of first appearance, one argument per distinct
/// name. Repeated occurrences of a name all receive the same value, each
/// encoded according to its own attributes.
#[must_use]
pub fn replace_arguments(template: &str, query: &Query) -> String {
    let placeholders: Vec<Placeholder> = scan(template)
        .into_iter()
        .filter(|p| p.kind == PlaceholderKind::Argument)
        .collect();

    let values = assign_argument_values(&placeholders, query);

    substitute(template, &placeholders, |placeholder| {
        let value = values.get(&placeholder.name).map_or("", String::as_str);
        process_attribute_encoding(&placeholder.attributes, value)
    })
}

/// Substitutes only the variable placeholders of a template.
///
/// Variable values are machine-supplied identifiers and are inserted
/// verbatim; a missing variable substitutes as the empty string.
#[must_use]
pub fn replace_variables(template: &str, env: &Env) -> String {
    let placeholders: Vec<Placeholder> = scan(template)
        .into_iter()
        .filter(|p| p.kind == PlaceholderKind::Variable)
        .collect();

    substitute(template, &placeholders, |placeholder| {
        env.lookup(&placeholder.name).unwrap_or("").to_string()
    })
}

/// Assigns a value to each distinct argument name in order of first
/// appearance. Variable placeholders in the input are ignored.
fn assign_argument_values(placeholders: &[Placeholder], query: &Query) -> HashMap<String, String> {
    let mut values = HashMap::new();
    let mut next_positional = 0;

    for placeholder in placeholders {
        if placeholder.kind != PlaceholderKind::Argument || values.contains_key(&placeholder.name)
        {
            continue;
        }
        let value = if let Ok(index) = placeholder.name.parse::<usize>() {
            index
                .checked_sub(1)
                .and_then(|i| query.args.get(i))
                .cloned()
                .unwrap_or_default()
        } else if placeholder.name == WHOLE_STRING_NAME {
            query.argument_string.clone()
        } else {
            let value = query.args.get(next_positional).cloned().unwrap_or_default();
            next_positional += 1;
            value
        };
        values.insert(placeholder.name.clone(), value);
    }

    values
}

/// Rebuilds the template, replacing each placeholder span with the value
/// produced by `resolve`. Spans are in document order and non-overlapping.
fn substitute(
    template: &str,
    placeholders: &[Placeholder],
    resolve: impl Fn(&Placeholder) -> String,
) -> String {
    let mut result = String::with_capacity(template.len());
    let mut last_end = 0;

    for placeholder in placeholders {
        result.push_str(&template[last_end..placeholder.span.start]);
        result.push_str(&resolve(placeholder));
        last_end = placeholder.span.end;
    }
    result.push_str(&template[last_end..]);

    result
}
