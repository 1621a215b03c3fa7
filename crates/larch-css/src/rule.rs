//! Pre-parsed style rules.
//!
//! Stylesheet text is never parsed here; callers hand over a list of
//! [`Rule`]s that is already flattened to one declaration per rule and
//! ordered from lowest to highest priority.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which part of an element a simple selector tests.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    /// Matches the element's tag name.
    Tag,
    /// Matches the element's `id` attribute.
    Id,
    /// Matches the element's whole `class` attribute string.
    Class,
}

/// A single-declaration rule: `<selector> { <name>: <value> }`.
///
/// The position of a rule in its list is its cascade priority: when
/// several matching rules set the same property on one element, the one
/// that comes last wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// What the selector tests.
    #[serde(rename = "selectorType", alias = "kind")]
    pub kind: SelectorKind,
    /// The tag name, id, or class string to compare against.
    pub selector: String,
    /// The property this rule sets.
    pub name: String,
    /// The raw property value.
    pub value: String,
}

impl Rule {
    /// Create a rule.
    #[must_use]
    pub fn new(
        kind: SelectorKind,
        selector: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            selector: selector.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// Shorthand for a tag-selector rule.
    #[must_use]
    pub fn tag(selector: &str, name: &str, value: &str) -> Self {
        Self::new(SelectorKind::Tag, selector, name, value)
    }

    /// Shorthand for an id-selector rule.
    #[must_use]
    pub fn id(selector: &str, name: &str, value: &str) -> Self {
        Self::new(SelectorKind::Id, selector, name, value)
    }

    /// Shorthand for a class-selector rule.
    #[must_use]
    pub fn class(selector: &str, name: &str, value: &str) -> Self {
        Self::new(SelectorKind::Class, selector, name, value)
    }
}
