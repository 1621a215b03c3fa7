//! Layout Engine
//!
//! Turns a styled tree into a tree of boxes and computes each box's
//! geometry.
//!
//! # Relevant Specifications
//!
//! - [CSS 2.1 Visual Formatting Model](https://www.w3.org/TR/CSS2/visuren.html)
//! - [CSS 2.1 Visual Formatting Model Details](https://www.w3.org/TR/CSS2/visudet.html)
//! - [CSS 2.1 Box Model](https://www.w3.org/TR/CSS2/box.html)
//!
//! # Module Structure
//!
//! - [`box_model`] - Box dimensions, rectangles, and edge sizes
//! - [`values`] - Auto-or-length values for width resolution
//! - [`layout_box`] - Layout box types and layout tree construction
//! - `block` - The block layout algorithm

mod block;
pub mod box_model;
pub mod layout_box;
pub mod values;

pub use box_model::{BoxDimensions, EdgeSizes, Rect};
pub use layout_box::{BoxKind, BoxType, LayoutBox, LayoutState, build_layout_tree};
pub use values::AutoOr;

use thiserror::Error;

use crate::style::StyledNode;

/// Failures while building or laying out the layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The root element resolved to `display: none`, so there is nothing to
    /// lay out.
    #[error("root element has display: none")]
    RootDisplayNone,
}

/// Build the layout tree for `root` and lay it out in a viewport.
///
/// The initial containing block is the viewport's width at its origin. Its
/// height is treated as zero so the root box starts at the viewport's top
/// edge, and the root's own height follows from its content.
///
/// # Errors
///
/// Returns [`LayoutError::RootDisplayNone`] if the root is not rendered.
pub fn layout_tree<'a>(
    root: &'a StyledNode<'a>,
    viewport: Rect,
) -> Result<LayoutBox<'a>, LayoutError> {
    let mut root_box = build_layout_tree(root)?;

    let mut containing_block = BoxDimensions::default();
    containing_block.content = Rect {
        height: 0.0,
        ..viewport
    };
    let _ = root_box.layout(containing_block);

    Ok(root_box)
}
