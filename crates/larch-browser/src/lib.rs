//! High-level pipeline API for the Larch renderer.
//!
//! # Scope
//!
//! This crate wires the stages together:
//! - **Parsing** - markup text to document tree ([`parse_document`])
//! - **Style Resolution** - document tree plus rules to styled tree
//!   ([`style_document`])
//! - **Layout** - styled tree to a laid-out box tree ([`layout_document`])
//!
//! Each stage borrows the previous stage's tree, so the trees only live as
//! long as the caller keeps the earlier ones around. [`render`] runs the
//! whole pipeline in one call and returns owned results instead.

mod snapshot;

pub use larch_css as css;
pub use larch_dom as dom;
pub use larch_html as html;

pub use snapshot::LayoutSnapshot;

use larch_common::warning::clear_warnings;
use larch_css::{
    LayoutBox, LayoutError, Rect, Rule, StyledNode, build_style_tree, dump_styled_tree,
    layout_tree,
};
use larch_dom::{Node, dump_tree};
use larch_html::SyntaxError;
use thiserror::Error;

/// Any failure of the pipeline. No partial tree accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The markup is malformed.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// The document cannot be laid out.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Everything [`render`] produces, detached from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// Depth-indicated dump of the document tree.
    pub document_dump: String,
    /// Dump of the styled tree with each node's specified values.
    pub styled_dump: String,
    /// The laid-out box tree.
    pub layout: LayoutSnapshot,
}

/// The rule list the `larch` binary falls back to when none is given.
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![Rule::tag("html", "font-size", "14px")]
}

/// The default viewport: 800x600 at the origin.
///
/// Only the width constrains layout; the root box grows with its content.
#[must_use]
pub const fn default_viewport() -> Rect {
    Rect {
        x: 0.0,
        y: 0.0,
        width: 800.0,
        height: 600.0,
    }
}

/// Parse markup into a document tree.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed markup.
pub fn parse_document(markup: &str) -> Result<Node, Error> {
    Ok(larch_html::parse(markup)?)
}

/// Match `rules` against every node of `document`.
#[must_use]
pub fn style_document<'a>(document: &'a Node, rules: &[Rule]) -> StyledNode<'a> {
    build_style_tree(document, rules)
}

/// Build the layout tree for `styled` and lay it out in `viewport`.
///
/// # Errors
///
/// Returns [`Error::Layout`] if the root has `display: none`.
pub fn layout_document<'a>(
    styled: &'a StyledNode<'a>,
    viewport: Rect,
) -> Result<LayoutBox<'a>, Error> {
    Ok(layout_tree(styled, viewport)?)
}

/// Run the whole pipeline on `markup`.
///
/// # Errors
///
/// Returns the first [`Error`] from any stage.
pub fn render(markup: &str, rules: &[Rule], viewport: Rect) -> Result<RenderedDocument, Error> {
    clear_warnings();

    let document = parse_document(markup)?;
    let styled = style_document(&document, rules);
    let root = layout_document(&styled, viewport)?;

    log::debug!(
        target: "layout",
        "laid out document: {}x{}",
        root.dimensions.content.width,
        root.dimensions.content.height
    );

    Ok(RenderedDocument {
        document_dump: dump_tree(&document),
        styled_dump: dump_styled_tree(&styled),
        layout: LayoutSnapshot::capture(&root),
    })
}
