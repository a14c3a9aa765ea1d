//! Steps 4 to 6: collecting items into lines, resolving flexible lengths and
//! distributing the remaining space along the main axis.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#main-sizing>

use flexbox::{
    BaselineAccumulator, FlexItem, JustifyOffsets, LineRange, LineTotals, at_most_free_space,
    auto_margin_share, break_into_lines, justify_params, resolve_flexible_lengths,
};
use flexbox_style::{Align, Display, FlexDirection, PositionType, Value};
use indextree::NodeId;
use log::debug;

use super::FlexPass;
use crate::layout::resolve::{BoxModel as _, align_item};
use crate::layout::{LayoutRequest, or_undefined};
use crate::measure::MeasureMode;
use crate::tree::LayoutTree;

/// Main and cross extent of one laid-out line.
#[derive(Copy, Clone, Debug, Default)]
pub(super) struct LineExtent {
    pub(super) main: f32,
    pub(super) cross: f32,
}

impl FlexPass {
    /// Cross size available to the items of a line whose tallest item is
    /// `items_cross`: first what the container offers them, then the line's
    /// own cross size.
    fn line_cross_size(&self, items_cross: f32) -> (f32, f32) {
        let padding_border = self.padding_border_cross;
        let bound = |size: f32| {
            self.style.bound_axis(
                self.cross_axis,
                size + padding_border,
                self.cross_parent_size,
                self.parent_width,
            ) - padding_border
        };
        let container_cross = match self.cross_mode {
            MeasureMode::Undefined | MeasureMode::AtMost => bound(items_cross),
            MeasureMode::Exactly => self.available_inner_cross,
        };
        let line_cross = if !self.wraps() && self.cross_mode == MeasureMode::Exactly {
            bound(self.available_inner_cross)
        } else {
            bound(items_cross)
        };
        (container_cross, line_cross)
    }
}

impl LayoutTree {
    /// Break the children into flex lines and record each in-flow child's line.
    pub(super) fn collect_lines(&mut self, pass: &FlexPass, children: &[NodeId]) -> Vec<LineRange> {
        let outer_sizes: Vec<Option<f32>> = children
            .iter()
            .map(|&child| {
                self.node(child)
                    .style
                    .is_in_flow()
                    .then(|| self.flex_item(pass, child).outer_hypothetical_main())
            })
            .collect();
        let available = (!pass.available_inner_main.is_nan()).then_some(pass.available_inner_main);
        let lines = break_into_lines(available, pass.wraps(), &outer_sizes);
        for (index, line) in lines.iter().enumerate() {
            for &child in &children[line.start..line.end] {
                let data = self.node_mut(child);
                if data.style.is_in_flow() {
                    data.line_index = index;
                }
            }
        }
        debug!(
            target: "layouter::flex",
            "[FLEX-LINES] {:?} children={} lines={} wrap={}",
            pass.node,
            children.len(),
            lines.len(),
            pass.style.flex_wrap
        );
        lines
    }

    /// Main-axis inputs of an in-flow child; min/max percentages resolve
    /// against the container's current inner main size.
    fn flex_item(&self, pass: &FlexPass, child: NodeId) -> FlexItem {
        let data = self.node(child);
        let style = &data.style;
        let web = self.config.use_web_defaults;
        let dimension = pass.main_axis.dimension();
        FlexItem {
            flex_basis: data.layout.computed_flex_basis,
            flex_grow: style.flex_grow_factor(false),
            flex_shrink: style.flex_shrink_factor(false, web),
            min_main: style.min_dimension(dimension).resolve(pass.available_inner_main),
            max_main: style.max_dimension(dimension).resolve(pass.available_inner_main),
            padding_border_main: style
                .padding_and_border_for_axis(pass.main_axis, pass.available_inner_width),
            margin_main: style.margin_for_axis(pass.main_axis, pass.available_inner_width),
            flexible: style.is_flexible(false, web),
        }
    }

    /// Lay out one line: flex its items, justify them and, with
    /// `perform_layout`, align them on the cross axis.
    pub(super) fn layout_line(
        &mut self,
        pass: &mut FlexPass,
        line: &[NodeId],
        total_line_cross: f32,
    ) -> LineExtent {
        let in_flow: Vec<NodeId> = line
            .iter()
            .copied()
            .filter(|&child| self.node(child).style.is_in_flow())
            .collect();
        let items: Vec<FlexItem> = in_flow.iter().map(|&child| self.flex_item(pass, child)).collect();
        let totals = LineTotals::from_items(&items);
        let size_based_on_content = self.fit_main_to_content(pass, &totals);

        let consumed = totals.consumed;
        let free_space = if !size_based_on_content && !pass.available_inner_main.is_nan() {
            pass.available_inner_main - consumed
        } else if consumed < 0.0 {
            -consumed
        } else {
            0.0
        };

        // A sizing pass with an exact cross size only needs the flex bases.
        let can_skip_flex = !pass.perform_layout && pass.cross_mode == MeasureMode::Exactly;
        let mut remaining_free_space = free_space;
        if !can_skip_flex {
            let resolved = resolve_flexible_lengths(&items, free_space);
            remaining_free_space = resolved.remaining_free_space;
            for (&child, main_size) in in_flow.iter().zip(resolved.main_sizes) {
                self.layout_flexed_child(pass, child, main_size);
                let child_overflow = self.node(child).layout.had_overflow;
                self.node_mut(pass.node).layout.had_overflow |= child_overflow;
            }
        }
        if remaining_free_space < 0.0 {
            self.node_mut(pass.node).layout.had_overflow = true;
        }

        let extent = self.justify_line(pass, line, remaining_free_space, can_skip_flex);
        let (container_cross, line_cross) = pass.line_cross_size(extent.cross);
        if pass.perform_layout {
            self.align_items_in_line(pass, line, container_cross, line_cross, total_line_cross);
        }
        LineExtent {
            main: extent.main,
            cross: line_cross,
        }
    }

    /// Without an exact main size the container follows its content: it is
    /// clamped into its own min/max, or shrinks to the line when nothing can
    /// grow. Returns whether the size is now based on content alone.
    fn fit_main_to_content(&self, pass: &mut FlexPass, totals: &LineTotals) -> bool {
        if pass.main_mode == MeasureMode::Exactly {
            return false;
        }
        let consumed = totals.consumed;
        if consumed < pass.min_inner_main {
            pass.available_inner_main = pass.min_inner_main;
            return false;
        }
        if consumed > pass.max_inner_main {
            pass.available_inner_main = pass.max_inner_main;
            return false;
        }
        let is_root = self.parent_of(pass.node).is_none();
        if totals.total_grow == 0.0 || self.node(pass.node).style.flex_grow_factor(is_root) == 0.0 {
            pass.available_inner_main = consumed;
        }
        true
    }

    /// Lay a child out at its flexed main size.
    fn layout_flexed_child(&mut self, pass: &FlexPass, child: NodeId, flexed_main: f32) {
        let inner_width = pass.available_inner_width;
        let inner_cross = pass.available_inner_cross;
        let main_axis = pass.main_axis;
        let cross_axis = pass.cross_axis;
        let style = &self.node(child).style;
        let margin_main = style.margin_for_axis(main_axis, inner_width);
        let margin_cross = style.margin_for_axis(cross_axis, inner_width);
        let cross_defined = style.is_style_dim_defined(cross_axis, inner_cross);
        let stretches = align_item(&pass.style, style) == Align::Stretch
            && !style.margin_leading_value(cross_axis).is_auto()
            && !style.margin_trailing_value(cross_axis).is_auto();

        let (cross_mode, cross_size) = if let Some(ratio) = style.aspect_ratio() {
            let content = if pass.is_main_row() {
                flexed_main / ratio
            } else {
                flexed_main * ratio
            };
            (MeasureMode::Exactly, content + margin_cross)
        } else if !inner_cross.is_nan()
            && !cross_defined
            && pass.cross_mode == MeasureMode::Exactly
            && !(pass.wraps() && pass.flex_basis_overflows)
            && stretches
        {
            (MeasureMode::Exactly, inner_cross)
        } else if !cross_defined {
            let mode = if inner_cross.is_nan() {
                MeasureMode::Undefined
            } else {
                MeasureMode::AtMost
            };
            (mode, inner_cross)
        } else {
            let preferred = style.resolved_dimension(cross_axis.dimension());
            let size = or_undefined(preferred.resolve(inner_cross)) + margin_cross;
            let loose_percent =
                matches!(preferred, Value::Percent(_)) && pass.cross_mode != MeasureMode::Exactly;
            let mode = if size.is_nan() || loose_percent {
                MeasureMode::Undefined
            } else {
                MeasureMode::Exactly
            };
            (mode, size)
        };

        let (main_mode, main_size) = style.constrain_max_size_for_mode(
            main_axis,
            pass.available_inner_main,
            inner_width,
            MeasureMode::Exactly,
            flexed_main + margin_main,
        );
        let (cross_mode, cross_size) =
            style.constrain_max_size_for_mode(cross_axis, inner_cross, inner_width, cross_mode, cross_size);
        let requires_stretch = !cross_defined && stretches;

        self.layout_node(
            child,
            LayoutRequest {
                available: pass.by_dimension(main_size, cross_size),
                modes: pass.by_dimension(main_mode, cross_mode),
                parent_size: pass.inner_sizes(),
                parent_direction: pass.direction,
                perform_layout: pass.perform_layout && !requires_stretch,
                reason: "flex",
            },
        );
    }

    /// Step 6: place the line's items along the main axis and measure the
    /// line. The returned cross extent is the items' largest outer cross
    /// size, or ascent plus descent when the container aligns baselines.
    fn justify_line(
        &mut self,
        pass: &FlexPass,
        line: &[NodeId],
        remaining_free_space: f32,
        can_skip_flex: bool,
    ) -> LineExtent {
        let main_axis = pass.main_axis;
        let cross_axis = pass.cross_axis;
        let inner_width = pass.available_inner_width;
        let leading_edge = main_axis.leading_edge().index();
        let free_space = if pass.main_mode == MeasureMode::AtMost {
            let min_main = pass
                .style
                .min_dimension(main_axis.dimension())
                .resolve(pass.main_parent_size);
            at_most_free_space(remaining_free_space, min_main, pass.available_inner_main)
        } else {
            remaining_free_space
        };

        let mut items_on_line = 0usize;
        let mut auto_margins = 0usize;
        for &child in line {
            let style = &self.node(child).style;
            if !style.is_in_flow() {
                continue;
            }
            items_on_line += 1;
            auto_margins += usize::from(style.margin_leading_value(main_axis).is_auto());
            auto_margins += usize::from(style.margin_trailing_value(main_axis).is_auto());
        }
        let offsets = if auto_margins == 0 {
            justify_params(pass.style.justify_content, free_space, items_on_line)
        } else {
            JustifyOffsets::default()
        };
        let auto_margin = auto_margin_share(free_space, auto_margins);

        let leading_border = pass.style.leading_border(main_axis);
        let baseline_layout = self.is_baseline_layout(pass.node);
        let mut baselines = BaselineAccumulator::default();
        let mut main_dim = pass.style.leading_padding_and_border(main_axis, pass.parent_width) + offsets.leading;
        let mut cross_dim = 0.0f32;
        for &child in line {
            let data = self.node(child);
            let style = &data.style;
            if style.display == Display::None {
                continue;
            }
            if style.position_type == PositionType::Absolute {
                if pass.perform_layout {
                    let position = if style.is_leading_position_defined(main_axis) {
                        style.leading_position(main_axis, pass.available_inner_main)
                            + leading_border
                            + style.leading_margin(main_axis, inner_width)
                    } else {
                        data.layout.position[leading_edge] + leading_border + offsets.leading
                    };
                    self.node_mut(child).layout.position[leading_edge] = position;
                }
                continue;
            }

            let leading_auto = style.margin_leading_value(main_axis).is_auto();
            let trailing_auto = style.margin_trailing_value(main_axis).is_auto();
            let outer_main = if can_skip_flex {
                style.margin_for_axis(main_axis, inner_width) + data.layout.computed_flex_basis
            } else {
                data.layout.measured_with_margin(style, main_axis, inner_width)
            };
            let outer_cross = data.layout.measured_with_margin(style, cross_axis, inner_width);
            let ascent_margin = style.leading_margin(FlexDirection::Column, inner_width);
            let column_margin = style.margin_for_axis(FlexDirection::Column, inner_width);
            let height = data.layout.measured[1];

            if leading_auto {
                main_dim += auto_margin;
            }
            if pass.perform_layout {
                self.node_mut(child).layout.position[leading_edge] += main_dim;
            }
            if trailing_auto {
                main_dim += auto_margin;
            }
            main_dim += offsets.between + outer_main;
            if can_skip_flex {
                cross_dim = pass.available_inner_cross;
            } else if baseline_layout {
                let ascent = self.baseline(child) + ascent_margin;
                baselines.push(ascent, height + column_margin - ascent);
            } else {
                cross_dim = cross_dim.max(outer_cross);
            }
        }
        main_dim += pass.style.trailing_padding_and_border(main_axis, pass.parent_width);
        if baseline_layout && !can_skip_flex {
            cross_dim = baselines.extent();
        }
        LineExtent {
            main: main_dim,
            cross: cross_dim,
        }
    }
}
