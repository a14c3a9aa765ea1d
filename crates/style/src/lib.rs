//! Style model for the flex layout engine: keyword enums, length values,
//! per-edge tables and the per-node [`Style`] record.
//!
//! Coordinates are top-left origin, y down, in caller-defined layout units.

mod axis;
mod edges;
mod enums;
mod style;
mod value;

pub use edges::Edges;
pub use enums::{
    Align, Dimension, Direction, Display, Edge, FlexDirection, Justify, NodeType, Overflow,
    PositionType, Wrap,
};
pub use style::Style;
pub use value::Value;
