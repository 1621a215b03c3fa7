//! Owned, serialisable copy of a laid-out box tree.

use std::fmt;

use larch_css::{BoxDimensions, BoxKind, LayoutBox, LayoutState};
use serde::Serialize;

/// A layout box detached from the trees it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    /// Kind of box.
    pub kind: BoxKind,
    /// Tag name or text of the node the box was generated for; `None` for
    /// anonymous boxes.
    pub name: Option<String>,
    /// Whether `dimensions` hold computed geometry.
    pub state: LayoutState,
    /// The box's geometry.
    pub dimensions: BoxDimensions,
    /// Child boxes in document order.
    pub children: Vec<LayoutSnapshot>,
}

impl LayoutSnapshot {
    /// Copy `layout_box` and its descendants.
    #[must_use]
    pub fn capture(layout_box: &LayoutBox<'_>) -> Self {
        Self {
            kind: layout_box.kind(),
            name: layout_box
                .box_type
                .styled_node()
                .map(|styled| styled.node.name().to_string()),
            state: layout_box.state,
            dimensions: layout_box.dimensions,
            children: layout_box.children.iter().map(Self::capture).collect(),
        }
    }

    fn fmt_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{}{}", "  ".repeat(depth), self.kind)?;
        if let Some(name) = &self.name {
            write!(f, " {name:?}")?;
        }
        match self.state {
            LayoutState::Computed => {
                let c = self.dimensions.content;
                write!(f, " @ ({}, {}) {}x{}", c.x, c.y, c.width, c.height)?;
            }
            LayoutState::Pending => write!(f, " (not laid out)")?,
            LayoutState::Unsupported(_) => write!(f, " (unsupported)")?,
        }
        for child in &self.children {
            writeln!(f)?;
            child.fmt_depth(f, depth + 1)?;
        }
        Ok(())
    }
}

/// One line per box, indented two spaces per level:
///
/// ```text
/// block "html" @ (0, 0) 800x0
///   anonymous (unsupported)
///     inline "body" (not laid out)
/// ```
impl fmt::Display for LayoutSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_depth(f, 0)
    }
}
