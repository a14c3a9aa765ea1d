//! Steps 7 and 8: cross-axis alignment of items within their line, packing
//! of lines, and baselines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-alignment>

use flexbox::{
    BaselineAccumulator, CrossItem, LineCross, LineRange, align_content_params, cross_auto_margin_offset,
    cross_offset, floats_equal, line_cross_position,
};
use flexbox_style::{Align, Display, Edge, FlexDirection, PositionType};
use indextree::NodeId;
use log::{trace, warn};

use super::FlexPass;
use crate::layout::LayoutRequest;
use crate::layout::resolve::{BoxModel as _, align_item};
use crate::measure::MeasureMode;
use crate::tree::LayoutTree;

impl LayoutTree {
    /// Align every item of a line inside it and offset it by the lines above.
    pub(super) fn align_items_in_line(
        &mut self,
        pass: &FlexPass,
        line: &[NodeId],
        container_cross: f32,
        line_cross: f32,
        total_line_cross: f32,
    ) {
        let cross_axis = pass.cross_axis;
        let edge = cross_axis.leading_edge().index();
        let inner_width = pass.available_inner_width;
        let leading_border = pass.style.leading_border(cross_axis);
        for &child in line {
            let data = self.node(child);
            let style = &data.style;
            if style.display == Display::None {
                continue;
            }
            if style.position_type == PositionType::Absolute {
                let margin = style.leading_margin(cross_axis, inner_width);
                let position = style
                    .is_leading_position_defined(cross_axis)
                    .then(|| {
                        style.leading_position(cross_axis, pass.available_inner_cross) + leading_border + margin
                    })
                    .filter(|position| !position.is_nan())
                    .unwrap_or(leading_border + margin);
                self.node_mut(child).layout.position[edge] = position;
                continue;
            }

            let align = align_item(&pass.style, style);
            let leading_auto = style.margin_leading_value(cross_axis).is_auto();
            let trailing_auto = style.margin_trailing_value(cross_axis).is_auto();
            let mut leading_cross = pass.leading_padding_border_cross;
            if align == Align::Stretch && !leading_auto && !trailing_auto {
                if !style.is_style_dim_defined(cross_axis, pass.available_inner_cross) {
                    self.stretch_child(pass, child, line_cross);
                }
            } else {
                let remaining = container_cross - data.layout.measured_with_margin(style, cross_axis, inner_width);
                leading_cross += cross_auto_margin_offset(remaining, leading_auto, trailing_auto)
                    .unwrap_or_else(|| cross_offset(align, remaining));
            }
            self.node_mut(child).layout.position[edge] += total_line_cross + leading_cross;
        }
    }

    /// Lay a stretched child out again at the line's cross size.
    fn stretch_child(&mut self, pass: &FlexPass, child: NodeId, line_cross: f32) {
        let inner_width = pass.available_inner_width;
        let data = self.node(child);
        let style = &data.style;
        let measured_main = data.layout.measured(pass.main_axis.dimension());
        let cross = style.aspect_ratio().map_or(line_cross, |ratio| {
            let content = if pass.is_main_row() {
                measured_main / ratio
            } else {
                measured_main * ratio
            };
            style.margin_for_axis(pass.cross_axis, inner_width) + content
        });
        let main = measured_main + style.margin_for_axis(pass.main_axis, inner_width);
        let (_, main_size) = style.constrain_max_size_for_mode(
            pass.main_axis,
            pass.available_inner_main,
            inner_width,
            MeasureMode::Exactly,
            main,
        );
        let (_, cross_size) = style.constrain_max_size_for_mode(
            pass.cross_axis,
            pass.available_inner_cross,
            inner_width,
            MeasureMode::Exactly,
            cross,
        );
        let available = pass.by_dimension(main_size, cross_size);
        let exact_unless_undefined = |size: f32| {
            if size.is_nan() {
                MeasureMode::Undefined
            } else {
                MeasureMode::Exactly
            }
        };
        self.layout_node(
            child,
            LayoutRequest {
                available,
                modes: available.map(exact_unless_undefined),
                parent_size: pass.inner_sizes(),
                parent_direction: pass.direction,
                perform_layout: true,
                reason: "stretch",
            },
        );
    }

    /// Step 8: distribute the container's spare cross space between lines
    /// (`align-content`) and place items inside their final line.
    pub(super) fn align_lines(
        &mut self,
        pass: &FlexPass,
        children: &[NodeId],
        lines: &[LineRange],
        total_line_cross: f32,
    ) {
        let offsets = align_content_params(
            pass.style.align_content,
            pass.available_inner_cross - total_line_cross,
            lines.len(),
        );
        let mut current_lead = pass.leading_padding_border_cross + offsets.leading;
        for range in lines {
            let line = &children[range.start..range.end];
            let (height, baselines) = self.line_extent(pass, line);
            let line_cross = LineCross {
                lead: current_lead,
                height: height + offsets.per_line,
                max_ascent: baselines.max_ascent,
            };
            trace!(
                target: "layouter::flex",
                "[FLEX-ALIGN-CONTENT] {:?} line {}..{} lead={:.3} height={:.3}",
                pass.node, range.start, range.end, line_cross.lead, line_cross.height
            );
            for &child in line {
                self.place_in_line(pass, child, line_cross);
            }
            current_lead += line_cross.height;
        }
    }

    /// Cross size of a line from its items, and the baseline extremes of its
    /// baseline-aligned items.
    fn line_extent(&self, pass: &FlexPass, line: &[NodeId]) -> (f32, BaselineAccumulator) {
        let inner_width = pass.available_inner_width;
        let mut height = 0.0f32;
        let mut baselines = BaselineAccumulator::default();
        for &child in line {
            let data = self.node(child);
            let style = &data.style;
            if !style.is_in_flow() {
                continue;
            }
            if data.layout.is_measured_defined(pass.cross_axis) {
                height = height.max(data.layout.measured_with_margin(style, pass.cross_axis, inner_width));
            }
            if align_item(&pass.style, style) == Align::Baseline {
                let ascent = self.baseline(child) + style.leading_margin(FlexDirection::Column, inner_width);
                let descent = data.layout.measured[1] + style.margin_for_axis(FlexDirection::Column, inner_width)
                    - ascent;
                baselines.push(ascent, descent);
                height = height.max(baselines.extent());
            }
        }
        (height, baselines)
    }

    /// Position an in-flow child inside its packed line. Stretched children
    /// without a definite cross size are laid out again at the line's size.
    fn place_in_line(&mut self, pass: &FlexPass, child: NodeId, line: LineCross) {
        let inner_width = pass.available_inner_width;
        let cross_axis = pass.cross_axis;
        let data = self.node(child);
        let style = &data.style;
        if !style.is_in_flow() {
            return;
        }
        let align = align_item(&pass.style, style);
        let item = CrossItem {
            size: data.layout.measured(cross_axis.dimension()),
            leading_margin: style.leading_margin(cross_axis, inner_width),
            trailing_margin: style.trailing_margin(cross_axis, inner_width),
            baseline: if align == Align::Baseline {
                self.baseline(child)
            } else {
                0.0
            },
            leading_position: style.leading_position(FlexDirection::Column, pass.available_inner_cross),
        };
        let Some(position) = line_cross_position(align, item, line) else {
            return;
        };
        let edge = if align == Align::Baseline {
            Edge::Top
        } else {
            cross_axis.leading_edge()
        };

        let [measured_width, measured_height] = data.layout.measured;
        let main_margin = style.margin_for_axis(pass.main_axis, inner_width);
        let remeasure = (align == Align::Stretch
            && !style.is_style_dim_defined(cross_axis, pass.available_inner_cross))
        .then(|| {
            if pass.is_main_row() {
                [measured_width + main_margin, line.height]
            } else {
                [line.height, measured_height + main_margin]
            }
        });

        self.node_mut(child).layout.position[edge.index()] = position;
        if let Some(available) = remeasure {
            let unchanged =
                floats_equal(available[0], measured_width) && floats_equal(available[1], measured_height);
            if !unchanged {
                self.layout_node(
                    child,
                    LayoutRequest {
                        available,
                        modes: [MeasureMode::Exactly; 2],
                        parent_size: pass.inner_sizes(),
                        parent_direction: pass.direction,
                        perform_layout: true,
                        reason: "multiline-stretch",
                    },
                );
            }
        }
    }

    /// Whether the container aligns its items on their baselines. Only rows
    /// have baselines to align.
    pub(super) fn is_baseline_layout(&self, node: NodeId) -> bool {
        let style = &self.node(node).style;
        if style.flex_direction.is_column() {
            return false;
        }
        if style.align_items == Align::Baseline {
            return true;
        }
        node.children(&self.arena).any(|child| {
            let child_style = &self.node(child).style;
            child_style.position_type == PositionType::Relative && child_style.align_self == Align::Baseline
        })
    }

    /// Distance from the node's top edge to its first baseline.
    ///
    /// A baseline callback wins, then the measure implementation, then the
    /// first in-flow child on the first line (preferring one aligned on its
    /// baseline). A node without any of these uses its bottom edge.
    pub(super) fn baseline(&self, node: NodeId) -> f32 {
        let data = self.node(node);
        let [width, height] = data.layout.measured;
        if let Some(callback) = data.baseline.as_ref() {
            let value = callback(node, width, height);
            if value.is_nan() {
                warn!(target: "layouter::flex", "[BASELINE] {node:?} callback returned NaN; using the height");
                return height;
            }
            return value;
        }
        if let Some(value) = data
            .measure
            .as_ref()
            .and_then(|measure| measure.baseline(node, width, height))
            .filter(|value| !value.is_nan())
        {
            return value;
        }

        let mut chosen = None;
        for child in node.children(&self.arena) {
            let child_data = self.node(child);
            if !child_data.style.is_in_flow() {
                continue;
            }
            if child_data.line_index > 0 {
                break;
            }
            if align_item(&data.style, &child_data.style) == Align::Baseline {
                chosen = Some(child);
                break;
            }
            if chosen.is_none() {
                chosen = Some(child);
            }
        }
        chosen.map_or(height, |child| {
            self.baseline(child) + self.node(child).layout.position[Edge::Top.index()]
        })
    }
}
