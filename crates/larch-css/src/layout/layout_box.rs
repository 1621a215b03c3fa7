//! Layout box types and layout tree construction.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)

use larch_common::warning::warn_once;
use serde::Serialize;
use strum_macros::Display as StrumDisplay;

use crate::style::{Display, StyledNode};

use super::LayoutError;
use super::box_model::BoxDimensions;

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// The kind of box, with the styled node it was generated for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxType<'a> {
    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    Block(&'a StyledNode<'a>),
    /// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    Inline(&'a StyledNode<'a>),
    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Wraps a run of inline children of a block box. It is synthesized
    /// and has no styled node of its own.
    Anonymous,
}

/// [`BoxType`] without the styled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BoxKind {
    /// A block box.
    Block,
    /// An inline box.
    Inline,
    /// An anonymous box.
    Anonymous,
}

/// Whether a box's dimensions hold computed geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "kind", rename_all = "lowercase")]
pub enum LayoutState {
    /// Layout has not run on this box yet.
    #[default]
    Pending,
    /// Layout ran and the dimensions are this pass's used values.
    Computed,
    /// Layout for this kind of box is not implemented. The dimensions are
    /// zero because nothing was computed, not because the box is empty.
    Unsupported(BoxKind),
}

/// A node in the layout tree.
#[derive(Debug, Clone)]
pub struct LayoutBox<'a> {
    /// Box kind and the styled node it represents.
    pub box_type: BoxType<'a>,
    /// Geometry, filled in by [`LayoutBox::layout`].
    pub dimensions: BoxDimensions,
    /// Child boxes in document order.
    pub children: Vec<LayoutBox<'a>>,
    /// Whether `dimensions` are meaningful.
    pub state: LayoutState,
}

impl<'a> BoxType<'a> {
    /// The kind of box, without the styled node.
    #[must_use]
    pub const fn kind(self) -> BoxKind {
        match self {
            Self::Block(_) => BoxKind::Block,
            Self::Inline(_) => BoxKind::Inline,
            Self::Anonymous => BoxKind::Anonymous,
        }
    }

    /// The styled node this box was generated for. `None` for anonymous
    /// boxes.
    #[must_use]
    pub const fn styled_node(self) -> Option<&'a StyledNode<'a>> {
        match self {
            Self::Block(node) | Self::Inline(node) => Some(node),
            Self::Anonymous => None,
        }
    }
}

impl<'a> LayoutBox<'a> {
    /// Create a childless box with zeroed dimensions.
    #[must_use]
    pub fn new(box_type: BoxType<'a>) -> Self {
        Self {
            box_type,
            dimensions: BoxDimensions::default(),
            children: Vec::new(),
            state: LayoutState::Pending,
        }
    }

    /// The kind of this box.
    #[must_use]
    pub const fn kind(&self) -> BoxKind {
        self.box_type.kind()
    }

    /// [§ 9.2.1.1 Anonymous block boxes](https://www.w3.org/TR/CSS2/visuren.html#anonymous-block-level)
    ///
    /// Where a new inline child should go.
    ///
    /// Inline and anonymous boxes take inline children directly. A block
    /// box routes them into its trailing anonymous box, creating one if
    /// the last child is not anonymous, so each consecutive run of inline
    /// children shares a single wrapper.
    pub fn inline_container(&mut self) -> &mut Self {
        match self.box_type {
            BoxType::Inline(_) | BoxType::Anonymous => self,
            BoxType::Block(_) => {
                let ends_with_anonymous = self
                    .children
                    .last()
                    .is_some_and(|last| last.kind() == BoxKind::Anonymous);
                if !ends_with_anonymous {
                    self.children.push(Self::new(BoxType::Anonymous));
                }
                let last = self.children.len() - 1;
                &mut self.children[last]
            }
        }
    }
}

/// [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
///
/// Build the tree of layout boxes for `root`, without computing any
/// geometry.
///
/// The root's own `display` picks its box: `inline` makes an inline box,
/// `block`, a missing value, or an unrecognised one makes a block box.
///
/// # Errors
///
/// Returns [`LayoutError::RootDisplayNone`] if the root has
/// `display: none`.
pub fn build_layout_tree<'a>(root: &'a StyledNode<'a>) -> Result<LayoutBox<'a>, LayoutError> {
    let box_type = match root.display() {
        Some(Display::None) => return Err(LayoutError::RootDisplayNone),
        Some(Display::Inline) => BoxType::Inline(root),
        Some(Display::Block) | None => BoxType::Block(root),
    };
    Ok(build_box(box_type))
}

/// Generate a box and, recursively, the boxes of its styled children.
///
/// Each child box refers to that child's own styled node. A child with
/// `display: block` becomes a block child and `display: inline` goes into
/// the inline container. Any other child, including one with no usable
/// `display` and every text node, generates nothing.
fn build_box<'a>(box_type: BoxType<'a>) -> LayoutBox<'a> {
    let mut layout_box = LayoutBox::new(box_type);
    let Some(style) = box_type.styled_node() else {
        return layout_box;
    };

    for child in &style.children {
        match child.display() {
            Some(Display::Block) => layout_box.children.push(build_box(BoxType::Block(child))),
            Some(Display::Inline) => layout_box
                .inline_container()
                .children
                .push(build_box(BoxType::Inline(child))),
            Some(Display::None) | None => {
                log::trace!(target: "layout", "no box for <{}>", child.node.name());
            }
        }
    }
    layout_box
}

impl LayoutBox<'_> {
    /// Lay out this box and its descendants inside `containing_block`.
    ///
    /// Only block boxes are laid out. Inline and anonymous boxes are reset
    /// to zero and marked [`LayoutState::Unsupported`] so callers can tell
    /// them apart from boxes that were computed to be empty.
    pub fn layout(&mut self, containing_block: BoxDimensions) -> LayoutState {
        self.state = match self.box_type {
            BoxType::Block(style) => {
                self.layout_block(style, containing_block);
                LayoutState::Computed
            }
            BoxType::Inline(_) | BoxType::Anonymous => {
                let kind = self.kind();
                let _ = warn_once(
                    "layout",
                    &format!("{kind} layout is not supported; {kind} boxes are left unsized"),
                );
                self.dimensions = BoxDimensions::default();
                LayoutState::Unsupported(kind)
            }
        };
        self.state
    }
}
