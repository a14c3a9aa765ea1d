//! Alignment: auto margins, `justify-content`, cross-axis alignment,
//! `align-content` and baselines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>

mod align_content;
mod auto_margins;
mod baseline;
mod cross_axis;
mod justify;

pub use align_content::{AlignContentOffsets, align_content_params};
pub use auto_margins::{auto_margin_share, cross_auto_margin_offset};
pub use baseline::BaselineAccumulator;
pub use cross_axis::{CrossItem, LineCross, cross_offset, line_cross_position};
pub use justify::{JustifyOffsets, at_most_free_space, justify_params};

#[cfg(test)]
mod tests;
