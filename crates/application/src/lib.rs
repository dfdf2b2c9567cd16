//! Wayfinder Application - Resolution core
//!
//! This crate holds the algorithmic core of the shortcut resolver: the
//! placeholder grammar, the template substitutor, the namespace-ordered
//! shortcut finder and the locale text transforms, composed by the
//! [`use_cases::ResolveQuery`] use case. Everything here is pure and
//! synchronous; the only async surface is the [`ports::NamespaceSource`]
//! port awaited by callers that load namespace data.

pub mod error;
pub mod finder;
pub mod ports;
pub mod template;
pub mod transforms;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use finder::{FoundShortcuts, PickError, ShortcutMatch, collect_shortcuts, pick_shortcut};
pub use template::{
    Placeholder, PlaceholderKind, PlaceholderMap, expand_template, process_attribute_encoding,
};
pub use transforms::transform_eo_cx;
pub use use_cases::{ResolveOutcome, ResolveQuery};
