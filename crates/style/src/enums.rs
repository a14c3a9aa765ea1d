//! Keyword properties of the flex style model.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#property-index>

use core::fmt;

use serde::{Deserialize, Serialize};

/// Writes the kebab-case CSS keyword for each variant.
macro_rules! keyword_display {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(match self {
                    $(Self::$variant => $name,)+
                })
            }
        }
    };
}

/// Inline base direction.
///
/// Spec: <https://www.w3.org/TR/css-writing-modes-4/#direction>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

impl Direction {
    /// Resolve `inherit` against the parent's resolved direction; the root falls back to LTR.
    #[inline]
    pub const fn resolve(self, parent: Self) -> Self {
        match self {
            Self::Inherit => match parent {
                Self::Inherit => Self::Ltr,
                Self::Ltr | Self::Rtl => parent,
            },
            Self::Ltr | Self::Rtl => self,
        }
    }
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    #[default]
    Column,
    ColumnReverse,
    Row,
    RowReverse,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Shared keyword set for `align-items`, `align-self` and `align-content`.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
    Baseline,
    SpaceBetween,
    SpaceAround,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionType {
    #[default]
    Relative,
    Absolute,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Wrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    #[default]
    Flex,
    None,
}

/// Box edges, including the logical and shorthand slots.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
    Start,
    End,
    Horizontal,
    Vertical,
    All,
}

impl Edge {
    /// Number of edge slots in an [`crate::Edges`] table.
    pub const COUNT: usize = 9;

    /// The four physical edges, in layout-array order.
    pub const PHYSICAL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Leaf classification; text nodes round their size outwards on the pixel grid.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    #[default]
    Default,
    Text,
}

keyword_display!(Direction { Inherit => "inherit", Ltr => "ltr", Rtl => "rtl" });
keyword_display!(FlexDirection {
    Column => "column",
    ColumnReverse => "column-reverse",
    Row => "row",
    RowReverse => "row-reverse",
});
keyword_display!(Justify {
    FlexStart => "flex-start",
    Center => "center",
    FlexEnd => "flex-end",
    SpaceBetween => "space-between",
    SpaceAround => "space-around",
    SpaceEvenly => "space-evenly",
});
keyword_display!(Align {
    Auto => "auto",
    FlexStart => "flex-start",
    Center => "center",
    FlexEnd => "flex-end",
    Stretch => "stretch",
    Baseline => "baseline",
    SpaceBetween => "space-between",
    SpaceAround => "space-around",
});
keyword_display!(PositionType { Relative => "relative", Absolute => "absolute" });
keyword_display!(Wrap { NoWrap => "nowrap", Wrap => "wrap", WrapReverse => "wrap-reverse" });
keyword_display!(Overflow { Visible => "visible", Hidden => "hidden", Scroll => "scroll" });
keyword_display!(Display { Flex => "flex", None => "none" });
keyword_display!(Edge {
    Left => "left",
    Top => "top",
    Right => "right",
    Bottom => "bottom",
    Start => "start",
    End => "end",
    Horizontal => "horizontal",
    Vertical => "vertical",
    All => "all",
});
keyword_display!(Dimension { Width => "width", Height => "height" });
keyword_display!(NodeType { Default => "default", Text => "text" });
