//! Box model geometry.
//!
//! [CSS 2.1 § 8.1 Box dimensions](https://www.w3.org/TR/CSS2/box.html#box-dimensions)

use serde::Serialize;

/// [§ 8.1 Box dimensions](https://www.w3.org/TR/CSS2/box.html#box-dimensions)
///
/// "Each box has a content area and optional surrounding padding, border,
/// and margin areas."
///
/// Only `content` is stored as a rectangle; the other areas are derived by
/// expanding it outward by the edge sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxDimensions {
    /// Content area, positioned relative to the document origin.
    pub content: Rect,
    /// Padding widths around the content area.
    pub padding: EdgeSizes,
    /// Border widths around the padding area.
    pub border: EdgeSizes,
    /// Margin widths around the border area.
    pub margin: EdgeSizes,
}

/// A rectangle positioned in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    pub x: f32,
    /// Vertical position of the top-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

/// Edge sizes for padding, border, or margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeSizes {
    /// Left edge size.
    pub left: f32,
    /// Top edge size.
    pub top: f32,
    /// Right edge size.
    pub right: f32,
    /// Bottom edge size.
    pub bottom: f32,
}

impl Rect {
    /// Grow the rectangle outward by `edge` on every side.
    #[must_use]
    pub fn expanded_by(self, edge: EdgeSizes) -> Self {
        Self {
            x: self.x - edge.left,
            y: self.y - edge.top,
            width: self.width + edge.left + edge.right,
            height: self.height + edge.top + edge.bottom,
        }
    }
}

impl BoxDimensions {
    // ┌─────────────────────────────────────────┐
    // │              margin-top                 │
    // │   ┌─────────────────────────────────┐   │
    // │   │          border-top             │   │
    // │   │   ┌─────────────────────────┐   │   │
    // │   │   │      padding-top        │   │   │
    // │   │   │   ┌─────────────────┐   │   │   │
    // │ m │ b │ p │     CONTENT     │ p │ b │ m │
    // │   │   │   └─────────────────┘   │   │   │
    // │   │   │      padding-bottom     │   │   │
    // │   │   └─────────────────────────┘   │   │
    // │   │          border-bottom          │   │
    // │   └─────────────────────────────────┘   │
    // │              margin-bottom              │
    // └─────────────────────────────────────────┘

    /// The area covered by the content area plus its padding.
    #[must_use]
    pub fn padding_box(&self) -> Rect {
        self.content.expanded_by(self.padding)
    }

    /// The area covered by the content area plus padding and borders.
    #[must_use]
    pub fn border_box(&self) -> Rect {
        self.padding_box().expanded_by(self.border)
    }

    /// The area covered by the content area plus padding, borders, and
    /// margin.
    #[must_use]
    pub fn margin_box(&self) -> Rect {
        self.border_box().expanded_by(self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(size: f32) -> EdgeSizes {
        EdgeSizes {
            left: size,
            top: size,
            right: size,
            bottom: size,
        }
    }

    #[test]
    fn test_nested_boxes() {
        let dims = BoxDimensions {
            content: Rect {
                x: 20.0,
                y: 30.0,
                width: 100.0,
                height: 50.0,
            },
            padding: uniform(1.0),
            border: uniform(2.0),
            margin: uniform(4.0),
        };

        assert_eq!(
            dims.padding_box(),
            Rect {
                x: 19.0,
                y: 29.0,
                width: 102.0,
                height: 52.0
            }
        );
        assert_eq!(
            dims.border_box(),
            Rect {
                x: 17.0,
                y: 27.0,
                width: 106.0,
                height: 56.0
            }
        );
        assert_eq!(
            dims.margin_box(),
            Rect {
                x: 13.0,
                y: 23.0,
                width: 114.0,
                height: 64.0
            }
        );
    }
}
