//! Block layout.
//!
//! [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
//! [§ 9.4.1 Block formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)

use larch_common::warning::warn_once;

use crate::style::{StyledNode, Value};

use super::box_model::{BoxDimensions, Rect};
use super::layout_box::LayoutBox;
use super::values::AutoOr;

const MARGIN_LEFT: &[&str] = &["margin-left", "margin"];
const MARGIN_RIGHT: &[&str] = &["margin-right", "margin"];
const MARGIN_TOP: &[&str] = &["margin-top", "margin"];
const MARGIN_BOTTOM: &[&str] = &["margin-bottom", "margin"];
const BORDER_LEFT: &[&str] = &["border-left-width", "border-left", "border"];
const BORDER_RIGHT: &[&str] = &["border-right-width", "border-right", "border"];
const BORDER_TOP: &[&str] = &["border-top-width", "border-top", "border"];
const BORDER_BOTTOM: &[&str] = &["border-bottom-width", "border-bottom", "border"];
const PADDING_LEFT: &[&str] = &["padding-left", "padding"];
const PADDING_RIGHT: &[&str] = &["padding-right", "padding"];
const PADDING_TOP: &[&str] = &["padding-top", "padding"];
const PADDING_BOTTOM: &[&str] = &["padding-bottom", "padding"];

/// Pixel value of the first property in `names` that is set, else 0.
/// `auto` also counts as 0.
fn px(style: &StyledNode<'_>, names: &[&str]) -> f32 {
    style.lookup(names, &Value::Length(0.0)).to_px()
}

/// [`px`] for a property that cannot be negative (padding, border width).
fn non_negative_px(style: &StyledNode<'_>, names: &[&str]) -> f32 {
    let property = names.first().copied().unwrap_or_default();
    clamp_negative(px(style, names), property)
}

/// A negative length is invalid for `property`; report it and use 0.
fn clamp_negative(length: f32, property: &str) -> f32 {
    if length < 0.0 {
        let _ = warn_once(
            "layout",
            &format!("negative {property} {length}px is invalid; using 0"),
        );
        0.0
    } else {
        length
    }
}

impl LayoutBox<'_> {
    /// Lay out a block-level box and its children.
    pub(super) fn layout_block(&mut self, style: &StyledNode<'_>, containing_block: BoxDimensions) {
        // Child width can depend on parent width, so this box's width must
        // be known before its children are laid out.
        self.calculate_block_width(style, containing_block.content);

        // Determine where the box is located within its container.
        self.calculate_block_position(style, containing_block.content);

        // Recursively lay out the children of this box.
        self.layout_block_children();

        // Parent height can depend on child height, so this must run after
        // the children are laid out.
        self.calculate_block_height(style);

        log::trace!(
            target: "layout",
            "<{}> content={:?}",
            style.node.name(),
            self.dimensions.content
        );
    }

    /// [§ 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// Resolve `width` and the horizontal margins, borders, and padding.
    ///
    /// "The following constraints must hold among the used values of the
    /// other properties:
    ///
    ///   'margin-left' + 'border-left-width' + 'padding-left' + 'width' +
    ///   'padding-right' + 'border-right-width' + 'margin-right'
    ///   = width of containing block"
    fn calculate_block_width(&mut self, style: &StyledNode<'_>, containing_block: Rect) {
        // `width` has initial value `auto`; margins, borders, and padding
        // have initial value 0.
        let width = match AutoOr::from_value(
            &style.lookup(&["width"], &Value::auto()),
            "width",
            AutoOr::Auto,
        ) {
            AutoOr::Length(w) => AutoOr::Length(clamp_negative(w, "width")),
            AutoOr::Auto => AutoOr::Auto,
        };
        let mut margin_left = AutoOr::from_value(
            &style.lookup(MARGIN_LEFT, &Value::Length(0.0)),
            "margin-left",
            AutoOr::Length(0.0),
        );
        let mut margin_right = AutoOr::from_value(
            &style.lookup(MARGIN_RIGHT, &Value::Length(0.0)),
            "margin-right",
            AutoOr::Length(0.0),
        );

        let border_left = non_negative_px(style, BORDER_LEFT);
        let border_right = non_negative_px(style, BORDER_RIGHT);
        let padding_left = non_negative_px(style, PADDING_LEFT);
        let padding_right = non_negative_px(style, PADDING_RIGHT);

        let total = margin_left.to_px_or(0.0)
            + border_left
            + padding_left
            + width.to_px_or(0.0)
            + padding_right
            + border_right
            + margin_right.to_px_or(0.0);

        // "If 'width' is not 'auto' and 'border-left-width' + 'padding-left'
        // + 'width' + 'padding-right' + 'border-right-width' (plus any of
        // 'margin-left' or 'margin-right' that are not 'auto') is larger
        // than the width of the containing block, then any 'auto' values
        // for 'margin-left' or 'margin-right' are, for the following rules,
        // treated as zero."
        if !width.is_auto() && total > containing_block.width {
            if margin_left.is_auto() {
                margin_left = AutoOr::Length(0.0);
            }
            if margin_right.is_auto() {
                margin_right = AutoOr::Length(0.0);
            }
        }

        // How much space is left over in the containing block.
        let underflow = containing_block.width - total;

        let (used_width, used_margin_left, used_margin_right) =
            match (width, margin_left, margin_right) {
                // "If all of the above have a computed value other than
                // 'auto', the values are said to be 'over-constrained'...
                // the specified value of 'margin-right' is ignored and the
                // value is calculated so as to make the equality true."
                (AutoOr::Length(w), AutoOr::Length(ml), AutoOr::Length(mr)) => {
                    (w, ml, mr + underflow)
                }

                // "If there is exactly one value specified as 'auto', its
                // used value follows from the equality."
                (AutoOr::Length(w), AutoOr::Length(ml), AutoOr::Auto) => (w, ml, underflow),
                (AutoOr::Length(w), AutoOr::Auto, AutoOr::Length(mr)) => (w, underflow, mr),

                // "If 'width' is set to 'auto', any other 'auto' values
                // become '0' and 'width' follows from the resulting
                // equality."
                (AutoOr::Auto, ml, mr) => {
                    let ml = ml.to_px_or(0.0);
                    let mr = mr.to_px_or(0.0);
                    if underflow >= 0.0 {
                        (underflow, ml, mr)
                    } else {
                        // Width can't be negative. Adjust the right margin
                        // instead.
                        (0.0, ml, mr + underflow)
                    }
                }

                // "If both 'margin-left' and 'margin-right' are 'auto',
                // their used values are equal. This horizontally centers
                // the element with respect to the edges of the containing
                // block."
                (AutoOr::Length(w), AutoOr::Auto, AutoOr::Auto) => {
                    (w, underflow / 2.0, underflow / 2.0)
                }
            };

        let d = &mut self.dimensions;
        d.content.width = used_width;
        d.margin.left = used_margin_left;
        d.margin.right = used_margin_right;
        d.border.left = border_left;
        d.border.right = border_right;
        d.padding.left = padding_left;
        d.padding.right = padding_right;
    }

    /// [§ 9.4.1](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// Place the box in its containing block.
    ///
    /// "In a block formatting context, boxes are laid out one after the
    /// other, vertically, beginning at the top of a containing block."
    ///
    /// The containing block's content height is the height of the siblings
    /// laid out so far, so the box goes directly below them.
    fn calculate_block_position(&mut self, style: &StyledNode<'_>, containing_block: Rect) {
        let d = &mut self.dimensions;

        // An `auto` top or bottom margin is used as 0.
        d.margin.top = px(style, MARGIN_TOP);
        d.margin.bottom = px(style, MARGIN_BOTTOM);
        d.border.top = non_negative_px(style, BORDER_TOP);
        d.border.bottom = non_negative_px(style, BORDER_BOTTOM);
        d.padding.top = non_negative_px(style, PADDING_TOP);
        d.padding.bottom = non_negative_px(style, PADDING_BOTTOM);

        d.content.x = containing_block.x + d.margin.left + d.border.left + d.padding.left;
        d.content.y = containing_block.y
            + containing_block.height
            + d.margin.top
            + d.border.top
            + d.padding.top;
    }

    /// [§ 9.4.1](https://www.w3.org/TR/CSS2/visuren.html#block-formatting)
    ///
    /// Lay out the children one below the other, growing this box's
    /// content height by each child's margin box.
    fn layout_block_children(&mut self) {
        self.dimensions.content.height = 0.0;
        for child in &mut self.children {
            let _ = child.layout(self.dimensions);
            self.dimensions.content.height += child.dimensions.margin_box().height;
        }
    }

    /// [§ 10.6.3 Block-level non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#normal-block)
    ///
    /// An explicit `height` length replaces the height accumulated from the
    /// children; otherwise (`auto`) the accumulated height stands.
    fn calculate_block_height(&mut self, style: &StyledNode<'_>) {
        if let Some(Value::Length(height)) = style.value("height") {
            self.dimensions.content.height = clamp_negative(height, "height");
        }
    }
}
