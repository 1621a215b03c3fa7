//! Document tree for the Larch rendering pipeline.
//!
//! The tree is a plain owned hierarchy: every [`Node`] owns its children
//! exclusively, in document order, with no parent or sibling back edges.
//! Nodes are built once by the parser and never mutated afterwards; later
//! stages hold shared references into the tree instead of copying it.

mod dump;

pub use dump::dump_tree;

use std::collections::HashMap;

/// Map of attribute names to values for an element.
///
/// Keys are unique; insertion order carries no meaning.
pub type AttributesMap = HashMap<String, String>;

/// A node in the document tree.
///
/// Children are only reachable through [`Node::children`], and only element
/// nodes can be constructed with children, so a text node never has any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// What kind of node this is, with the variant's own data.
    pub node_type: NodeType,
    children: Vec<Node>,
}

/// The node variants that markup can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// An element with a tag name and attributes.
    Element(ElementData),
    /// Raw character data, exactly as it appeared in the input.
    Text(String),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The element's tag name, as written in the markup.
    pub tag_name: String,
    /// The element's attributes.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Returns the element's `id` attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// Returns the element's raw `class` attribute value if present.
    ///
    /// NOTE: this is the whole attribute string, not a set of
    /// space-separated class tokens. Selector matching compares against it
    /// verbatim.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.attrs.get("class").map(String::as_str)
    }
}

impl Node {
    /// Create an element node owning `children`.
    #[must_use]
    pub fn element(tag_name: impl Into<String>, attrs: AttributesMap, children: Vec<Self>) -> Self {
        Self {
            node_type: NodeType::Element(ElementData {
                tag_name: tag_name.into(),
                attrs,
            }),
            children,
        }
    }

    /// Create a text node. Text nodes never have children.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Text(data.into()),
            children: Vec::new(),
        }
    }

    /// The node's children in document order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match &self.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Text(_) => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.node_type {
            NodeType::Text(data) => Some(data.as_str()),
            NodeType::Element(_) => None,
        }
    }

    /// Look up an attribute by name. Always `None` for text nodes.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.as_element()
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    /// The name shown for this node in tree dumps: the tag name of an
    /// element, or the raw character data of a text node.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.node_type {
            NodeType::Element(data) => &data.tag_name,
            NodeType::Text(data) => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_lookup_is_total() {
        let mut attrs = AttributesMap::new();
        let _ = attrs.insert("id".to_string(), "main".to_string());
        let _ = attrs.insert("class".to_string(), "a b".to_string());
        let div = Node::element("div", attrs, vec![Node::text("hi")]);

        assert_eq!(div.attr("id"), Some("main"));
        assert_eq!(div.as_element().and_then(ElementData::class), Some("a b"));
        assert_eq!(div.attr("missing"), None);
        assert_eq!(div.children()[0].attr("id"), None);
    }

    #[test]
    fn test_text_node_has_no_children() {
        let text = Node::text("hello");
        assert!(text.children().is_empty());
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_element().is_none());
        assert_eq!(text.name(), "hello");
    }
}
