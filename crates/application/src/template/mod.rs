//! Placeholder template engine
//!
//! Parsing and substitution of placeholders in URL templates, in two
//! syntax generations (new `<name: attr: value>` and legacy
//! `{%name|attr=value}` / `{$name}`).

pub mod encoding;
pub mod engine;
pub mod parser;

pub use encoding::process_attribute_encoding;
pub use engine::{expand_template, replace_arguments, replace_variables};
pub use parser::{
    Placeholder, PlaceholderKind, PlaceholderMap, arguments_from, placeholders_from, scan,
    variables_from,
};
