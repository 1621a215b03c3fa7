//! The styled tree: document nodes paired with their specified values.

mod properties;
mod values;

pub use properties::PropertyMap;
pub use values::{Display, Value};

use std::fmt::Write;

use larch_common::warning::warn_once;
use larch_dom::Node;

/// A document node with the property values the cascade assigned to it.
///
/// The styled tree has exactly the shape of the document tree it was built
/// from: same number of children, in the same order, at every level.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledNode<'a> {
    /// The document node this styles.
    pub node: &'a Node,
    /// Specified values from matching rules.
    pub specified_values: PropertyMap,
    /// Styled children, one per document child.
    pub children: Vec<StyledNode<'a>>,
}

impl StyledNode<'_> {
    /// The parsed value of `name`, if it is set and parseable.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<Value> {
        self.specified_values.get(name).and_then(Value::parse)
    }

    /// The value of the first name in `names` that has a value, or
    /// `default`.
    ///
    /// Used for longhand to shorthand fallback, e.g.
    /// `["margin-left", "margin"]`.
    #[must_use]
    pub fn lookup(&self, names: &[&str], default: &Value) -> Value {
        names
            .iter()
            .find_map(|name| self.value(name))
            .unwrap_or_else(|| default.clone())
    }

    /// The resolved `display` keyword.
    ///
    /// `None` when the property is absent or not a keyword the layout
    /// tree builder understands.
    #[must_use]
    pub fn display(&self) -> Option<Display> {
        let raw = self.specified_values.get("display")?;
        let parsed = raw.trim().parse::<Display>().ok();
        if parsed.is_none() {
            let _ = warn_once("style", &format!("unsupported display value '{raw}'"));
        }
        parsed
    }
}

/// Render the styled tree as the document tree dump with each node's
/// specified values appended in `{name: value; ...}` form.
#[must_use]
pub fn dump_styled_tree(root: &StyledNode<'_>) -> String {
    let mut out = String::new();
    dump_styled_node(root, 0, &mut out);
    out
}

fn dump_styled_node(styled: &StyledNode<'_>, depth: usize, out: &mut String) {
    if depth > 0 {
        out.push('\n');
        let _ = write!(out, "{}-", " ".repeat(depth));
    }
    out.push_str(styled.node.name());
    if !styled.specified_values.is_empty() {
        let declarations: Vec<String> = styled
            .specified_values
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect();
        let _ = write!(out, " {{{}}}", declarations.join(" "));
    }
    for child in &styled.children {
        dump_styled_node(child, depth + 1, out);
    }
}
