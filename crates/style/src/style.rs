//! The per-node flex style record.

use serde::{Deserialize, Serialize};

use crate::edges::Edges;
use crate::enums::{
    Align, Dimension, Direction, Display, FlexDirection, Justify, Overflow, PositionType, Wrap,
};
use crate::value::Value;

const DEFAULT_FLEX_GROW: f32 = 0.0;
const DEFAULT_FLEX_SHRINK: f32 = 0.0;
const WEB_DEFAULT_FLEX_SHRINK: f32 = 1.0;

/// Flex properties of one node. Plain data; the engine clamps out-of-range
/// values when it consumes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub justify_content: Justify,
    pub align_content: Align,
    pub align_items: Align,
    pub align_self: Align,
    pub position_type: PositionType,
    pub flex_wrap: Wrap,
    pub overflow: Overflow,
    pub display: Display,
    /// `flex` shorthand; expands into grow/shrink/basis when those are unset.
    pub flex: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Value,
    pub margin: Edges,
    /// Offsets for relative shifting or absolute placement.
    pub position: Edges,
    pub padding: Edges,
    pub border: Edges,
    pub width: Value,
    pub height: Value,
    pub min_width: Value,
    pub min_height: Value,
    pub max_width: Value,
    pub max_height: Value,
    /// Width divided by height.
    pub aspect_ratio: Option<f32>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Column,
            justify_content: Justify::FlexStart,
            align_content: Align::FlexStart,
            align_items: Align::Stretch,
            align_self: Align::Auto,
            position_type: PositionType::Relative,
            flex_wrap: Wrap::NoWrap,
            overflow: Overflow::Visible,
            display: Display::Flex,
            flex: None,
            flex_grow: None,
            flex_shrink: None,
            flex_basis: Value::Auto,
            margin: Edges::new(),
            position: Edges::new(),
            padding: Edges::new(),
            border: Edges::new(),
            width: Value::Auto,
            height: Value::Auto,
            min_width: Value::Undefined,
            min_height: Value::Undefined,
            max_width: Value::Undefined,
            max_height: Value::Undefined,
            aspect_ratio: None,
        }
    }
}

impl Style {
    #[inline]
    pub const fn dimension(&self, dimension: Dimension) -> Value {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }

    #[inline]
    pub const fn min_dimension(&self, dimension: Dimension) -> Value {
        match dimension {
            Dimension::Width => self.min_width,
            Dimension::Height => self.min_height,
        }
    }

    #[inline]
    pub const fn max_dimension(&self, dimension: Dimension) -> Value {
        match dimension {
            Dimension::Width => self.max_width,
            Dimension::Height => self.max_height,
        }
    }

    /// Preferred size for layout: a defined max equal to the min pins the size.
    pub fn resolved_dimension(&self, dimension: Dimension) -> Value {
        let max = self.max_dimension(dimension);
        if !max.is_undefined() && max.approx_eq(self.min_dimension(dimension)) {
            max
        } else {
            self.dimension(dimension)
        }
    }

    /// Usable aspect ratio: positive and finite.
    #[inline]
    pub fn aspect_ratio(&self) -> Option<f32> {
        self.aspect_ratio
            .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
    }

    /// Resolved `flex-grow`; roots never grow and negative factors count as zero.
    pub fn flex_grow_factor(&self, is_root: bool) -> f32 {
        if is_root {
            return 0.0;
        }
        if let Some(grow) = self.flex_grow {
            return grow.max(0.0);
        }
        match self.flex {
            Some(flex) if flex > 0.0 => flex,
            _ => DEFAULT_FLEX_GROW,
        }
    }

    /// Resolved `flex-shrink`; roots never shrink and negative factors count as zero.
    pub fn flex_shrink_factor(&self, is_root: bool, use_web_defaults: bool) -> f32 {
        if is_root {
            return 0.0;
        }
        if let Some(shrink) = self.flex_shrink {
            return shrink.max(0.0);
        }
        if !use_web_defaults
            && let Some(flex) = self.flex
            && flex < 0.0
        {
            return -flex;
        }
        if use_web_defaults {
            WEB_DEFAULT_FLEX_SHRINK
        } else {
            DEFAULT_FLEX_SHRINK
        }
    }

    /// Resolved `flex-basis`, expanding a positive `flex` shorthand.
    pub fn flex_basis_value(&self, use_web_defaults: bool) -> Value {
        if self.flex_basis.is_length() {
            return self.flex_basis;
        }
        match self.flex {
            Some(flex) if flex > 0.0 => {
                if use_web_defaults {
                    Value::Auto
                } else {
                    Value::ZERO
                }
            }
            _ => Value::Auto,
        }
    }

    /// Displayed, relatively positioned items: the ones that take part in
    /// line breaking and flexing.
    #[inline]
    pub const fn is_in_flow(&self) -> bool {
        matches!(self.display, Display::Flex)
            && matches!(self.position_type, PositionType::Relative)
    }

    /// In-flow items with a non-zero grow or shrink factor.
    pub fn is_flexible(&self, is_root: bool, use_web_defaults: bool) -> bool {
        self.position_type == PositionType::Relative
            && (self.flex_grow_factor(is_root) != 0.0
                || self.flex_shrink_factor(is_root, use_web_defaults) != 0.0)
    }
}
