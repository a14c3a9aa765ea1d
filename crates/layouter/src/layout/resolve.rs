//! Box-model lookups on a style along a flex axis: margins, padding, border,
//! offsets and min/max bounds.
//!
//! Row axes consult the logical `start`/`end` slots first, so an RTL row
//! (resolved to `row-reverse`) maps `start` onto the right edge.

use flexbox_style::{Align, Edge, Edges, FlexDirection, Style, Value};

use super::{UNDEFINED, or_undefined};
use crate::measure::MeasureMode;

pub(crate) trait BoxModel {
    /// Margin value on the leading edge of `axis`, unresolved. Used to spot `auto`.
    fn margin_leading_value(&self, axis: FlexDirection) -> Value;
    fn margin_trailing_value(&self, axis: FlexDirection) -> Value;
    fn leading_margin(&self, axis: FlexDirection, width_size: f32) -> f32;
    fn trailing_margin(&self, axis: FlexDirection, width_size: f32) -> f32;
    fn margin_for_axis(&self, axis: FlexDirection, width_size: f32) -> f32;

    fn leading_border(&self, axis: FlexDirection) -> f32;
    fn trailing_border(&self, axis: FlexDirection) -> f32;
    fn leading_padding(&self, axis: FlexDirection, width_size: f32) -> f32;
    fn trailing_padding(&self, axis: FlexDirection, width_size: f32) -> f32;
    fn leading_padding_and_border(&self, axis: FlexDirection, width_size: f32) -> f32;
    fn trailing_padding_and_border(&self, axis: FlexDirection, width_size: f32) -> f32;
    fn padding_and_border_for_axis(&self, axis: FlexDirection, width_size: f32) -> f32;

    fn is_leading_position_defined(&self, axis: FlexDirection) -> bool;
    fn is_trailing_position_defined(&self, axis: FlexDirection) -> bool;
    fn leading_position(&self, axis: FlexDirection, axis_size: f32) -> f32;
    fn trailing_position(&self, axis: FlexDirection, axis_size: f32) -> f32;
    /// Offset applied to a relatively positioned node: leading wins over trailing.
    fn relative_position(&self, axis: FlexDirection, axis_size: f32) -> f32;

    /// Whether the preferred size along `axis` resolves to a usable length.
    fn is_style_dim_defined(&self, axis: FlexDirection, parent_size: f32) -> bool;
    fn bound_axis_within_min_max(&self, axis: FlexDirection, value: f32, axis_size: f32) -> f32;
    /// [`BoxModel::bound_axis_within_min_max`], floored at padding plus border.
    fn bound_axis(&self, axis: FlexDirection, value: f32, axis_size: f32, width_size: f32) -> f32;
    /// Tighten a constraint with the node's max size (plus margins).
    fn constrain_max_size_for_mode(
        &self,
        axis: FlexDirection,
        parent_axis_size: f32,
        parent_width: f32,
        mode: MeasureMode,
        size: f32,
    ) -> (MeasureMode, f32);
    /// Content-box space left inside `available`, clamped by min/max.
    fn available_inner_dim(&self, axis: FlexDirection, available: f32, parent_dim: f32) -> f32;
}

/// The physical axis (`row` or `column`) carrying `axis`.
#[inline]
const fn physical(axis: FlexDirection) -> FlexDirection {
    if axis.is_row() {
        FlexDirection::Row
    } else {
        FlexDirection::Column
    }
}

fn logical_or_computed(edges: &Edges, axis: FlexDirection, logical: Edge, physical_edge: Edge) -> Value {
    let own = edges.get(logical);
    if axis.is_row() && !own.is_undefined() {
        own
    } else {
        edges.computed(physical_edge, Value::ZERO)
    }
}

fn position_value(style: &Style, axis: FlexDirection, logical: Edge, physical_edge: Edge) -> Value {
    if axis.is_row() {
        let own = style.position.computed(logical, Value::Undefined);
        if own.is_length() {
            return own;
        }
    }
    style.position.computed(physical_edge, Value::Undefined)
}

fn border_width(edges: &Edges, axis: FlexDirection, logical: Edge, physical_edge: Edge) -> f32 {
    if axis.is_row()
        && let Some(width) = edges.get(logical).resolve(UNDEFINED)
        && width >= 0.0
    {
        return width;
    }
    edges
        .computed(physical_edge, Value::ZERO)
        .resolve(UNDEFINED)
        .unwrap_or(0.0)
        .max(0.0)
}

fn padding_width(
    edges: &Edges,
    axis: FlexDirection,
    logical: Edge,
    physical_edge: Edge,
    width_size: f32,
) -> f32 {
    if axis.is_row()
        && let Some(width) = edges.get(logical).resolve(width_size)
        && width >= 0.0
    {
        return width;
    }
    edges
        .computed(physical_edge, Value::ZERO)
        .resolve(width_size)
        .unwrap_or(0.0)
        .max(0.0)
}

impl BoxModel for Style {
    #[inline]
    fn margin_leading_value(&self, axis: FlexDirection) -> Value {
        logical_or_computed(&self.margin, axis, Edge::Start, axis.leading_edge())
    }

    #[inline]
    fn margin_trailing_value(&self, axis: FlexDirection) -> Value {
        logical_or_computed(&self.margin, axis, Edge::End, axis.trailing_edge())
    }

    #[inline]
    fn leading_margin(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.margin_leading_value(axis).resolve_margin(width_size)
    }

    #[inline]
    fn trailing_margin(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.margin_trailing_value(axis).resolve_margin(width_size)
    }

    #[inline]
    fn margin_for_axis(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.leading_margin(axis, width_size) + self.trailing_margin(axis, width_size)
    }

    #[inline]
    fn leading_border(&self, axis: FlexDirection) -> f32 {
        border_width(&self.border, axis, Edge::Start, axis.leading_edge())
    }

    #[inline]
    fn trailing_border(&self, axis: FlexDirection) -> f32 {
        border_width(&self.border, axis, Edge::End, axis.trailing_edge())
    }

    #[inline]
    fn leading_padding(&self, axis: FlexDirection, width_size: f32) -> f32 {
        padding_width(&self.padding, axis, Edge::Start, axis.leading_edge(), width_size)
    }

    #[inline]
    fn trailing_padding(&self, axis: FlexDirection, width_size: f32) -> f32 {
        padding_width(&self.padding, axis, Edge::End, axis.trailing_edge(), width_size)
    }

    #[inline]
    fn leading_padding_and_border(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.leading_padding(axis, width_size) + self.leading_border(axis)
    }

    #[inline]
    fn trailing_padding_and_border(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.trailing_padding(axis, width_size) + self.trailing_border(axis)
    }

    #[inline]
    fn padding_and_border_for_axis(&self, axis: FlexDirection, width_size: f32) -> f32 {
        self.leading_padding_and_border(axis, width_size)
            + self.trailing_padding_and_border(axis, width_size)
    }

    #[inline]
    fn is_leading_position_defined(&self, axis: FlexDirection) -> bool {
        position_value(self, axis, Edge::Start, axis.leading_edge()).is_length()
    }

    #[inline]
    fn is_trailing_position_defined(&self, axis: FlexDirection) -> bool {
        position_value(self, axis, Edge::End, axis.trailing_edge()).is_length()
    }

    /// Unresolvable offsets (percentages of an undefined size) count as zero.
    #[inline]
    fn leading_position(&self, axis: FlexDirection, axis_size: f32) -> f32 {
        position_value(self, axis, Edge::Start, axis.leading_edge())
            .resolve(axis_size)
            .unwrap_or(0.0)
    }

    #[inline]
    fn trailing_position(&self, axis: FlexDirection, axis_size: f32) -> f32 {
        position_value(self, axis, Edge::End, axis.trailing_edge())
            .resolve(axis_size)
            .unwrap_or(0.0)
    }

    fn relative_position(&self, axis: FlexDirection, axis_size: f32) -> f32 {
        if self.is_leading_position_defined(axis) {
            self.leading_position(axis, axis_size)
        } else {
            -self.trailing_position(axis, axis_size)
        }
    }

    fn is_style_dim_defined(&self, axis: FlexDirection, parent_size: f32) -> bool {
        match self.resolved_dimension(axis.dimension()) {
            Value::Point(points) => points >= 0.0,
            Value::Percent(pct) => pct >= 0.0 && !parent_size.is_nan(),
            Value::Auto | Value::Undefined => false,
        }
    }

    fn bound_axis_within_min_max(&self, axis: FlexDirection, value: f32, axis_size: f32) -> f32 {
        let dimension = axis.dimension();
        let mut bounded = value;
        if let Some(max) = self.max_dimension(dimension).resolve(axis_size)
            && max >= 0.0
            && bounded > max
        {
            bounded = max;
        }
        if let Some(min) = self.min_dimension(dimension).resolve(axis_size)
            && min >= 0.0
            && bounded < min
        {
            bounded = min;
        }
        bounded
    }

    #[inline]
    fn bound_axis(&self, axis: FlexDirection, value: f32, axis_size: f32, width_size: f32) -> f32 {
        self.bound_axis_within_min_max(axis, value, axis_size)
            .max(self.padding_and_border_for_axis(axis, width_size))
    }

    fn constrain_max_size_for_mode(
        &self,
        axis: FlexDirection,
        parent_axis_size: f32,
        parent_width: f32,
        mode: MeasureMode,
        size: f32,
    ) -> (MeasureMode, f32) {
        let max_size = self
            .max_dimension(axis.dimension())
            .resolve(parent_axis_size)
            .map(|max| max + self.margin_for_axis(axis, parent_width));
        match (mode, max_size) {
            (MeasureMode::Exactly | MeasureMode::AtMost, Some(max)) => {
                (mode, if size < max { size } else { max })
            }
            (MeasureMode::Undefined, Some(max)) => (MeasureMode::AtMost, max),
            (_, None) => (mode, size),
        }
    }

    fn available_inner_dim(&self, axis: FlexDirection, available: f32, parent_dim: f32) -> f32 {
        let axis = physical(axis);
        let padding_and_border = self.padding_and_border_for_axis(axis, parent_dim);
        let inner = available - self.margin_for_axis(axis, parent_dim) - padding_and_border;
        if inner.is_nan() {
            return inner;
        }
        let dimension = axis.dimension();
        let min = or_undefined(self.min_dimension(dimension).resolve(parent_dim)) - padding_and_border;
        let max = or_undefined(self.max_dimension(dimension).resolve(parent_dim)) - padding_and_border;
        inner.min(max).max(min)
    }
}

/// Effective cross alignment of `child` inside `parent`.
///
/// Baseline alignment only exists along a row; column containers treat it as
/// `flex-start`.
pub(crate) fn align_item(parent: &Style, child: &Style) -> Align {
    let align = if child.align_self == Align::Auto {
        parent.align_items
    } else {
        child.align_self
    };
    if align == Align::Baseline && parent.flex_direction.is_column() {
        Align::FlexStart
    } else {
        align
    }
}

#[cfg(test)]
mod tests {
    use flexbox_style::Direction;

    use super::*;

    #[test]
    /// # Panics
    /// Panics if `start` does not land on the right edge of an RTL row.
    fn logical_margins_follow_direction() {
        let style = Style {
            margin: Edges::new()
                .with(Edge::Start, Value::points(10.0))
                .with(Edge::Left, Value::points(3.0)),
            ..Style::default()
        };
        let rtl_row = FlexDirection::Row.resolve(Direction::Rtl);
        assert!((style.leading_margin(rtl_row, 100.0) - 10.0).abs() < 0.01);
        assert!((style.trailing_margin(rtl_row, 100.0) - 3.0).abs() < 0.01);
        assert!((style.leading_margin(FlexDirection::Column, 100.0)).abs() < 0.01);
    }

    #[test]
    /// # Panics
    /// Panics if padding and border are not floored at zero or percent padding ignores the width.
    fn padding_and_border_resolution() {
        let style = Style {
            padding: Edges::all(Value::percent(10.0)),
            border: Edges::new().with(Edge::Top, Value::points(-4.0)),
            ..Style::default()
        };
        assert!((style.padding_and_border_for_axis(FlexDirection::Column, 200.0) - 40.0).abs() < 0.01);
        assert!(style.leading_border(FlexDirection::Column).abs() < 0.01);
        assert!(style.leading_padding(FlexDirection::Row, UNDEFINED).abs() < 0.01);
    }

    #[test]
    /// # Panics
    /// Panics if a max size does not turn an unbounded constraint into "at most".
    fn max_size_constrains_mode() {
        let style = Style {
            max_width: Value::points(50.0),
            ..Style::default()
        };
        let (mode, size) =
            style.constrain_max_size_for_mode(FlexDirection::Row, 100.0, 100.0, MeasureMode::Undefined, UNDEFINED);
        assert_eq!(mode, MeasureMode::AtMost);
        assert!((size - 50.0).abs() < 0.01);
        let (mode, size) =
            style.constrain_max_size_for_mode(FlexDirection::Row, 100.0, 100.0, MeasureMode::Exactly, 80.0);
        assert_eq!(mode, MeasureMode::Exactly);
        assert!((size - 50.0).abs() < 0.01);
    }

    #[test]
    /// # Panics
    /// Panics if baseline alignment survives in a column container.
    fn baseline_needs_a_row() {
        let parent = Style {
            align_items: Align::Baseline,
            ..Style::default()
        };
        assert_eq!(align_item(&parent, &Style::default()), Align::FlexStart);
        let row = Style {
            flex_direction: FlexDirection::Row,
            ..parent
        };
        assert_eq!(align_item(&row, &Style::default()), Align::Baseline);
    }
}
