//! Selector matching and the rule-order cascade.
//!
//! [CSS 2.1 § 6.4 The cascade](https://www.w3.org/TR/CSS2/cascade.html#cascade)
//!
//! This is a deliberately reduced cascade: there is no specificity and no
//! inheritance. The rule list is assumed to be sorted from lowest to
//! highest priority already, so "sort by specificity, then by order" is
//! just "later rules win".

use larch_dom::{ElementData, Node, NodeType};

use crate::rule::{Rule, SelectorKind};
use crate::style::{PropertyMap, StyledNode};

/// [CSS 2.1 § 5.2 Selector syntax](https://www.w3.org/TR/CSS2/selector.html#selector-syntax)
///
/// Test a single simple selector against an element.
///
/// NOTE: a class selector compares against the element's entire `class`
/// attribute, so `class="a b"` matches the selector `a b` but not `a`.
#[must_use]
pub fn matches_simple_selector(element: &ElementData, rule: &Rule) -> bool {
    match rule.kind {
        SelectorKind::Tag => element.tag_name == rule.selector,
        SelectorKind::Id => element.id() == Some(rule.selector.as_str()),
        SelectorKind::Class => element.class() == Some(rule.selector.as_str()),
    }
}

/// Fold `rules` over one node, in order, keeping the last value each
/// matching rule sets.
///
/// Text nodes never match anything and get an empty map.
#[must_use]
pub fn specified_values(node: &Node, rules: &[Rule]) -> PropertyMap {
    let mut values = PropertyMap::new();
    let NodeType::Element(element) = &node.node_type else {
        return values;
    };
    for rule in rules.iter().filter(|r| matches_simple_selector(element, r)) {
        if let Some(previous) = values.insert(rule.name.as_str(), rule.value.as_str()) {
            log::trace!(
                target: "style",
                "<{}> {}: '{}' overrides '{previous}'",
                element.tag_name,
                rule.name,
                rule.value
            );
        }
    }
    values
}

/// Build the styled tree for `root` and every descendant.
#[must_use]
pub fn build_style_tree<'a>(root: &'a Node, rules: &[Rule]) -> StyledNode<'a> {
    StyledNode {
        node: root,
        specified_values: specified_values(root, rules),
        children: root
            .children()
            .iter()
            .map(|child| build_style_tree(child, rules))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larch_dom::AttributesMap;

    fn div(id: Option<&str>, class: Option<&str>) -> Node {
        let mut attrs = AttributesMap::new();
        if let Some(id) = id {
            let _ = attrs.insert("id".to_string(), id.to_string());
        }
        if let Some(class) = class {
            let _ = attrs.insert("class".to_string(), class.to_string());
        }
        Node::element("div", attrs, vec![])
    }

    #[test]
    fn test_match_each_selector_kind() {
        let node = div(Some("main"), Some("test"));
        let element = node.as_element().unwrap();

        assert!(matches_simple_selector(element, &Rule::tag("div", "x", "1")));
        assert!(!matches_simple_selector(element, &Rule::tag("p", "x", "1")));
        assert!(matches_simple_selector(element, &Rule::id("main", "x", "1")));
        assert!(!matches_simple_selector(element, &Rule::id("other", "x", "1")));
        assert!(matches_simple_selector(element, &Rule::class("test", "x", "1")));
        assert!(!matches_simple_selector(element, &Rule::class("main", "x", "1")));
    }

    #[test]
    fn test_class_is_whole_attribute_comparison() {
        let node = div(None, Some("a b"));
        let element = node.as_element().unwrap();

        assert!(matches_simple_selector(element, &Rule::class("a b", "x", "1")));
        assert!(!matches_simple_selector(element, &Rule::class("a", "x", "1")));
    }

    #[test]
    fn test_missing_attribute_never_matches() {
        let node = div(None, None);
        let element = node.as_element().unwrap();

        assert!(!matches_simple_selector(element, &Rule::id("", "x", "1")));
        assert!(!matches_simple_selector(element, &Rule::class("", "x", "1")));
    }

    #[test]
    fn test_text_node_gets_empty_values() {
        let rules = [Rule::tag("div", "color", "red")];
        assert!(specified_values(&Node::text("div"), &rules).is_empty());
    }
}
