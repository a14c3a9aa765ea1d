//! Main/cross axis mapping onto physical edges.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>

use crate::enums::{Dimension, Direction, Edge, FlexDirection};

impl FlexDirection {
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[inline]
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }

    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }

    /// Apply the inline base direction: RTL mirrors the row axes.
    #[inline]
    pub const fn resolve(self, direction: Direction) -> Self {
        match (direction, self) {
            (Direction::Rtl, Self::Row) => Self::RowReverse,
            (Direction::Rtl, Self::RowReverse) => Self::Row,
            _ => self,
        }
    }

    /// Cross axis for a resolved main axis.
    #[inline]
    pub const fn cross(self, direction: Direction) -> Self {
        if self.is_column() {
            Self::Row.resolve(direction)
        } else {
            Self::Column
        }
    }

    /// Physical edge where the axis starts.
    #[inline]
    pub const fn leading_edge(self) -> Edge {
        match self {
            Self::Column => Edge::Top,
            Self::ColumnReverse => Edge::Bottom,
            Self::Row => Edge::Left,
            Self::RowReverse => Edge::Right,
        }
    }

    /// Physical edge where the axis ends.
    #[inline]
    pub const fn trailing_edge(self) -> Edge {
        match self {
            Self::Column => Edge::Bottom,
            Self::ColumnReverse => Edge::Top,
            Self::Row => Edge::Right,
            Self::RowReverse => Edge::Left,
        }
    }

    #[inline]
    pub const fn dimension(self) -> Dimension {
        if self.is_row() {
            Dimension::Width
        } else {
            Dimension::Height
        }
    }
}
