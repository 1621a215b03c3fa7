//! Integration tests for the markup parser.

use larch_dom::{Node, NodeType, dump_tree};
use larch_html::{SyntaxError, parse};

const DEMO: &str = r#"<html>
<body>
    <h1>Title</h1>
    <div id="main" class="test">
        <p>Hello <em>world</em>!</p>
    </div>
</body>
</html>
"#;

/// Helper to get the tag names of a node's element children, in order.
fn child_tags(node: &Node) -> Vec<&str> {
    node.children()
        .iter()
        .filter_map(|c| c.as_element().map(|e| e.tag_name.as_str()))
        .collect()
}

#[test]
fn test_single_root_is_returned_directly() {
    let root = parse("<html><body></body></html>").unwrap();

    let html = root.as_element().expect("root should be an element");
    assert_eq!(html.tag_name, "html");
    assert_eq!(child_tags(&root), vec!["body"]);
}

#[test]
fn test_children_in_document_order() {
    let root = parse("<ul><li>a</li><li>b</li><li>c</li></ul>").unwrap();

    assert_eq!(root.children().len(), 3);
    let texts: Vec<&str> = root
        .children()
        .iter()
        .map(|li| li.children()[0].as_text().unwrap())
        .collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn test_multiple_roots_are_wrapped_in_html() {
    let root = parse("<p>one</p><div>two</div>").unwrap();

    match &root.node_type {
        NodeType::Element(data) => {
            assert_eq!(data.tag_name, "html");
            assert!(data.attrs.is_empty());
        }
        NodeType::Text(_) => panic!("expected synthesized html element"),
    }
    assert_eq!(child_tags(&root), vec!["p", "div"]);
}

#[test]
fn test_top_level_text_and_element_are_wrapped() {
    let root = parse("hello<b>x</b>").unwrap();

    assert_eq!(root.name(), "html");
    assert_eq!(root.children()[0].as_text(), Some("hello"));
    assert_eq!(root.children()[1].name(), "b");
}

#[test]
fn test_empty_input_yields_empty_html_root() {
    for input in ["", "   \n\t  "] {
        let root = parse(input).unwrap();
        assert_eq!(root.name(), "html");
        assert!(root.children().is_empty());
    }
}

#[test]
fn test_attributes_parsed() {
    let root = parse(r#"<div id="main" class='test'></div>"#).unwrap();

    assert_eq!(root.attr("id"), Some("main"));
    assert_eq!(root.attr("class"), Some("test"));
}

#[test]
fn test_duplicate_attribute_last_wins() {
    let root = parse(r#"<div id="a" id="b"></div>"#).unwrap();
    assert_eq!(root.attr("id"), Some("b"));
}

#[test]
fn test_quote_may_contain_other_quote() {
    let root = parse(r#"<a title='say "hi"'></a>"#).unwrap();
    assert_eq!(root.attr("title"), Some(r#"say "hi""#));
}

#[test]
fn test_text_is_raw() {
    let root = parse("<p>a &amp; b</p>").unwrap();
    assert_eq!(root.children()[0].as_text(), Some("a &amp; b"));
}

#[test]
fn test_text_keeps_trailing_whitespace() {
    let root = parse("<p>Hello <em>world</em>!</p>").unwrap();
    let texts: Vec<&str> = root.children().iter().map(Node::name).collect();
    assert_eq!(texts, vec!["Hello ", "em", "!"]);
}

#[test]
fn test_demo_document_structure_and_dump() {
    let root = parse(DEMO).unwrap();

    assert_eq!(root.name(), "html");
    assert_eq!(child_tags(&root), vec!["body"]);
    assert_eq!(child_tags(&root.children()[0]), vec!["h1", "div"]);

    let expected = [
        "html",
        " -body",
        "  -h1",
        "   -Title",
        "  -div",
        "   -p",
        "    -Hello ",
        "    -em",
        "     -world",
        "    -!",
    ]
    .join("\n");
    assert_eq!(dump_tree(&root), expected);
}

// ---------------------------------------------------------------------------
// Syntax errors
// ---------------------------------------------------------------------------

#[test]
fn test_tag_name_mismatch_positioned_at_closing_tag() {
    let err = parse("<p>text</div>").unwrap_err();

    assert_eq!(
        err,
        SyntaxError::TagNameMismatch {
            position: 7,
            expected: "p".to_string(),
            found: "div".to_string(),
        }
    );
    assert_eq!(err.position(), 7);
}

#[test]
fn test_nested_mismatch_aborts_whole_parse() {
    let err = parse("<div><p>x</div></p>").unwrap_err();
    assert!(matches!(err, SyntaxError::TagNameMismatch { .. }));
}

#[test]
fn test_unterminated_attribute_quote() {
    let err = parse(r#"<a href="x>"#).unwrap_err();

    assert!(matches!(
        err,
        SyntaxError::QuoteMismatch {
            expected: '"',
            found: None,
            ..
        }
    ));
}

#[test]
fn test_unquoted_attribute_value() {
    let err = parse("<a href=x></a>").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::QuoteExpected {
            position: 8,
            found: Some('x'),
        }
    );
}

#[test]
fn test_missing_equals() {
    let err = parse(r#"<a href "x"></a>"#).unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::AttributeEqualsExpected {
            found: Some(' '),
            ..
        }
    ));
}

#[test]
fn test_self_closing_syntax_rejected() {
    let err = parse("<br/>").unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::AttributeNameExpected {
            found: Some('/'),
            ..
        }
    ));
}

#[test]
fn test_unclosed_element_at_end_of_input() {
    let err = parse("<div><p>text</p>").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::TagOpenExpected {
            position: 16,
            found: None,
        }
    );
}

#[test]
fn test_start_tag_cut_off() {
    let err = parse("<div").unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::AttributeNameExpected { found: None, .. }
    ));
}

#[test]
fn test_closing_tag_missing_angle() {
    let err = parse("<b>x</b").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::TagCloseExpected {
            position: 7,
            found: None,
        }
    );
}

#[test]
fn test_missing_tag_name() {
    let err = parse("< p></p>").unwrap_err();
    assert!(matches!(
        err,
        SyntaxError::TagNameExpected {
            position: 1,
            found: Some(' '),
        }
    ));
}

#[test]
fn test_non_ascii_tag_name_rejected() {
    assert!(parse("<é></é>").is_err());
    assert!(parse("<my-tag></my-tag>").is_err());
}

#[test]
fn test_stray_closing_tag_at_top_level() {
    let err = parse("<p>x</p></div>").unwrap_err();
    assert_eq!(err, SyntaxError::UnmatchedClosingTag { position: 8 });
}

#[test]
fn test_error_message_mentions_position() {
    let err = parse("<p>text</div>").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("byte 7"), "{message}");
    assert!(message.contains("</div>"), "{message}");
}
