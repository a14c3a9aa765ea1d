//! CSS Flexible Box Layout Module Level 1: tree-free pieces of the flex layout algorithm.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! Everything here works on plain per-item numbers; the tree walk that feeds
//! these helpers lives in the `layouter` crate.

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §8, Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9, Flex Layout Algorithm (line collection and flexible lengths)
#[path = "9_flex_layout_algorithm/mod.rs"]
mod chapter9;

mod number;

pub use chapter8::{
    AlignContentOffsets, BaselineAccumulator, CrossItem, JustifyOffsets, LineCross,
    align_content_params, at_most_free_space, auto_margin_share, cross_auto_margin_offset,
    cross_offset, justify_params, line_cross_position,
};
pub use chapter9::{
    FlexItem, LineRange, LineTotals, ResolvedLine, break_into_lines, resolve_flexible_lengths,
};
pub use number::{floats_equal, floats_equal_with_precision, round_value_to_pixel_grid};
