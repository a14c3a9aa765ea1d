//! Flexbox layout over an arena of style nodes.
//!
//! Build a tree of nodes carrying a [`Style`], attach a [`Measure`] to leaves
//! with intrinsic content, call [`LayoutTree::compute_layout`] on a root and
//! read each node's frame back with [`LayoutTree::layout`]. Results are
//! cached per node and only dirty subtrees are laid out again.
#![allow(
    clippy::too_many_lines,
    reason = "The flex steps read best as one sequence"
)]
#![allow(
    clippy::cognitive_complexity,
    reason = "Alignment passes branch on every keyword"
)]
#![allow(
    clippy::suboptimal_flops,
    reason = "Layout arithmetic must match plain float evaluation order"
)]
#![allow(
    clippy::redundant_pub_crate,
    reason = "Engine internals are shared across private modules"
)]
#![allow(
    clippy::option_if_let_else,
    reason = "Branches with side effects stay as if/else"
)]
#![allow(
    clippy::missing_errors_doc,
    reason = "Every fallible call fails only with StructuralError"
)]

mod config;
mod error;
mod geometry;
mod layout;
mod measure;
mod printing;
mod snapshot;
mod tree;

pub use config::LayoutConfig;
pub use error::StructuralError;
pub use flexbox_style::{
    Align, Dimension, Direction, Display, Edge, Edges, FlexDirection, Justify, NodeType, Overflow,
    PositionType, Style, Value, Wrap,
};
pub use geometry::{BoxEdges, LayoutRect, LayoutResult};
pub use indextree::NodeId;
pub use layout::LayoutStats;
pub use measure::{BaselineFunc, DirtiedFunc, Measure, MeasureMode, MeasureRequest, Size};
pub use printing::PrintOptions;
pub use snapshot::LayoutSnapshot;
pub use tree::{DirtyKind, LayoutTree};
