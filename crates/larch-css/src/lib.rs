//! Style resolution and block layout for the Larch rendering pipeline.
//!
//! # Scope
//!
//! This crate implements:
//! - **Rules** - pre-parsed simple-selector rules (`tag`, `id`, `class`)
//! - **Cascade** ([CSS 2.1 § 6.4](https://www.w3.org/TR/CSS2/cascade.html#cascade))
//!   - Simple selector matching
//!   - Rule-order cascade: later matching rules override earlier ones
//! - **Styled Tree** - the document tree annotated with specified values
//! - **Layout Tree** ([CSS 2.1 § 9.2](https://www.w3.org/TR/CSS2/visuren.html#box-gen))
//!   - Block, inline, and anonymous box generation
//! - **Block Layout** ([CSS 2.1 § 10.3.3](https://www.w3.org/TR/CSS2/visudet.html#blockwidth))
//!   - Width and horizontal margin resolution
//!   - Normal-flow vertical stacking and auto height
//!
//! # Not Yet Implemented
//!
//! - Stylesheet text parsing (rules arrive already parsed and ordered)
//! - Specificity and inheritance
//! - Inline, float, and positioned layout
//! - Units other than `px`

/// Selector matching and the rule-order cascade.
pub mod cascade;
/// Layout tree construction and block layout.
pub mod layout;
/// Pre-parsed style rules.
pub mod rule;
/// Styled tree and specified values.
pub mod style;

// Re-exports for convenience
pub use cascade::{build_style_tree, matches_simple_selector, specified_values};
pub use layout::{
    BoxDimensions, BoxKind, BoxType, EdgeSizes, LayoutBox, LayoutError, LayoutState, Rect,
    build_layout_tree, layout_tree,
};
pub use rule::{Rule, SelectorKind};
pub use style::{Display, PropertyMap, StyledNode, Value, dump_styled_tree};
