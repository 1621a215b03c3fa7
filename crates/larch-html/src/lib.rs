//! Markup parser for the Larch rendering pipeline.
//!
//! # Scope
//!
//! This crate implements a strict recursive-descent parser for a small
//! subset of HTML:
//! - Elements with ASCII alphanumeric tag names and matching close tags
//! - Attributes written as `name="value"` or `name='value'`
//! - Raw text (no entity decoding)
//!
//! # Not Supported
//!
//! - Self-closing tags, comments, doctype, CDATA
//! - Implicit tag closing or any other error recovery
//!
//! Any structural violation aborts the parse with a [`SyntaxError`].

/// Syntax errors raised by the parser.
pub mod error;
/// Recursive-descent parser over the input text.
pub mod parser;

pub use error::SyntaxError;
pub use parser::Parser;

use larch_dom::{AttributesMap, Node};

/// Tag name of the root element synthesized around multi-node input.
pub const IMPLICIT_ROOT_TAG: &str = "html";

/// Parse a markup document and return its root node.
///
/// If the input contains exactly one top-level node it becomes the root.
/// Otherwise (zero or several top-level nodes) an empty-attribute `html`
/// element is synthesized to wrap them in order.
///
/// # Errors
///
/// Returns the first [`SyntaxError`] encountered; no partial tree is
/// produced.
pub fn parse(source: &str) -> Result<Node, SyntaxError> {
    let mut parser = Parser::new(source);
    let nodes = parser.parse_nodes()?;

    // parse_nodes stops at "</" or end of input; at the top level only the
    // latter is legitimate.
    if !parser.eof() {
        return Err(SyntaxError::UnmatchedClosingTag {
            position: parser.position(),
        });
    }

    log::debug!(target: "html", "parsed {} top-level node(s)", nodes.len());

    match <[Node; 1]>::try_from(nodes) {
        Ok([root]) => Ok(root),
        Err(nodes) => Ok(Node::element(
            IMPLICIT_ROOT_TAG,
            AttributesMap::new(),
            nodes,
        )),
    }
}
