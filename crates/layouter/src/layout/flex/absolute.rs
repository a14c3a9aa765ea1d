//! Absolutely positioned children, laid out once the container's size is known.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#abspos-items>

use flexbox_style::{Align, Display, FlexDirection, Justify, PositionType, Style, Wrap};
use indextree::NodeId;
use log::trace;

use super::FlexPass;
use crate::layout::resolve::{BoxModel as _, align_item};
use crate::layout::{LayoutRequest, UNDEFINED, or_undefined};
use crate::measure::MeasureMode;
use crate::tree::LayoutTree;

/// Outer size of an absolute child along a physical axis: its preferred
/// size, or the space between its two offsets inside the container's border.
fn size_from_style_or_offsets(
    container: &Style,
    child: &Style,
    axis: FlexDirection,
    container_size: f32,
    axis_size: f32,
    width: f32,
) -> f32 {
    if child.is_style_dim_defined(axis, axis_size) {
        return or_undefined(child.resolved_dimension(axis.dimension()).resolve(axis_size))
            + child.margin_for_axis(axis, width);
    }
    if child.is_leading_position_defined(axis) && child.is_trailing_position_defined(axis) {
        let size = container_size
            - (container.leading_border(axis) + container.trailing_border(axis))
            - (child.leading_position(axis, axis_size) + child.trailing_position(axis, axis_size));
        return child.bound_axis(axis, size, axis_size, width);
    }
    UNDEFINED
}

impl LayoutTree {
    pub(super) fn layout_absolute_children(&mut self, pass: &FlexPass, children: &[NodeId]) {
        for &child in children {
            let style = &self.node(child).style;
            if style.display == Display::None || style.position_type != PositionType::Absolute {
                continue;
            }
            self.layout_absolute_child(pass, child);
        }
    }

    fn layout_absolute_child(&mut self, pass: &FlexPass, child: NodeId) {
        let [width, height] = pass.inner_sizes();
        let [width_mode, _] = pass.by_dimension(pass.main_mode, pass.cross_mode);
        let container = self.node(pass.node).layout.measured;
        let style = &self.node(child).style;
        let margin_row = style.margin_for_axis(FlexDirection::Row, width);
        let margin_column = style.margin_for_axis(FlexDirection::Column, width);
        let mut child_width =
            size_from_style_or_offsets(&pass.style, style, FlexDirection::Row, container[0], width, width);
        let mut child_height =
            size_from_style_or_offsets(&pass.style, style, FlexDirection::Column, container[1], height, width);

        // One definite side anchors the other through the aspect ratio.
        if child_width.is_nan() != child_height.is_nan()
            && let Some(ratio) = style.aspect_ratio()
        {
            if child_width.is_nan() {
                child_width = margin_row + (child_height - margin_column) * ratio;
            } else {
                child_height = margin_column + (child_width - margin_row) / ratio;
            }
        }

        if child_width.is_nan() || child_height.is_nan() {
            let mode_for = |size: f32| {
                if size.is_nan() {
                    MeasureMode::Undefined
                } else {
                    MeasureMode::Exactly
                }
            };
            let mut modes = [mode_for(child_width), mode_for(child_height)];
            // Let content wrap at the container's width.
            if !pass.is_main_row() && child_width.is_nan() && width_mode != MeasureMode::Undefined && width > 0.0 {
                child_width = width;
                modes[0] = MeasureMode::AtMost;
            }
            self.layout_node(
                child,
                LayoutRequest {
                    available: [child_width, child_height],
                    modes,
                    parent_size: [child_width, child_height],
                    parent_direction: pass.direction,
                    perform_layout: false,
                    reason: "abs-measure",
                },
            );
            let measured = self.node(child).layout.measured;
            child_width = measured[0] + margin_row;
            child_height = measured[1] + margin_column;
        }

        self.layout_node(
            child,
            LayoutRequest {
                available: [child_width, child_height],
                modes: [MeasureMode::Exactly; 2],
                parent_size: [child_width, child_height],
                parent_direction: pass.direction,
                perform_layout: true,
                reason: "abs-layout",
            },
        );
        self.position_absolute_child(pass, child);
    }

    /// Offsets from the trailing edge, or `justify-content`/`align-items`
    /// when no leading offset is given. Leading offsets were applied while
    /// justifying and aligning the lines.
    fn position_absolute_child(&mut self, pass: &FlexPass, child: NodeId) {
        let [width, height] = pass.inner_sizes();
        let container = self.node(pass.node).layout.measured;
        let data = self.node(child);
        let style = &data.style;
        let measured = data.layout.measured;
        let main = pass.main_axis;
        let cross = pass.cross_axis;
        let (main_reference, cross_reference) = if pass.is_main_row() {
            (width, height)
        } else {
            (height, width)
        };
        let free = |axis: FlexDirection| {
            let slot = axis.dimension().index();
            container[slot] - measured[slot]
        };
        let from_trailing = |axis: FlexDirection, reference: f32| {
            free(axis)
                - pass.style.trailing_border(axis)
                - style.trailing_margin(axis, width)
                - style.trailing_position(axis, reference)
        };

        let main_position = if style.is_leading_position_defined(main) {
            None
        } else if style.is_trailing_position_defined(main) {
            Some(from_trailing(main, main_reference))
        } else {
            match pass.style.justify_content {
                Justify::Center => Some(free(main) / 2.0),
                Justify::FlexEnd => Some(free(main)),
                Justify::FlexStart | Justify::SpaceBetween | Justify::SpaceAround | Justify::SpaceEvenly => None,
            }
        };

        let align = align_item(&pass.style, style);
        let cross_position = if style.is_leading_position_defined(cross) {
            None
        } else if style.is_trailing_position_defined(cross) {
            Some(from_trailing(cross, cross_reference))
        } else if align == Align::Center {
            Some(free(cross) / 2.0)
        } else if (align == Align::FlexEnd) != (pass.style.flex_wrap == Wrap::WrapReverse) {
            Some(free(cross))
        } else {
            None
        };

        let layout = &mut self.node_mut(child).layout;
        if let Some(position) = main_position {
            layout.position[main.leading_edge().index()] = position;
        }
        if let Some(position) = cross_position {
            layout.position[cross.leading_edge().index()] = position;
        }
        trace!(
            target: "layouter::flex",
            "[FLEX-ABS] {child:?} size=({:.3}, {:.3}) main={main_position:?} cross={cross_position:?}",
            measured[0], measured[1]
        );
    }
}
