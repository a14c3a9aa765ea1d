//! The flex algorithm proper: one container, its direct children, one request.
//!
//! The pass follows the layout algorithm of CSS Flexbox §9: resolve the box
//! edges and the available inner space, determine every item's flex basis,
//! break items into lines, resolve flexible lengths and justify each line,
//! align items on the cross axis, pack the lines, then size the container,
//! place absolutely positioned children and mirror reversed axes.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

mod absolute;
mod basis;
mod cross;
mod leaf;
mod lines;

use flexbox_style::{Direction, Display, FlexDirection, Overflow, Style, Wrap};
use indextree::NodeId;
use log::trace;

use super::resolve::BoxModel as _;
use super::{LayoutRequest, LayoutState, or_undefined};
use crate::measure::MeasureMode;
use crate::tree::{DirtyKind, LayoutTree};

/// Container-wide values shared by every step of one flex pass.
struct FlexPass {
    node: NodeId,
    style: Style,
    direction: Direction,
    main_axis: FlexDirection,
    cross_axis: FlexDirection,
    perform_layout: bool,
    /// Modes of the incoming request, by dimension.
    modes: [MeasureMode; 2],
    parent_width: f32,
    /// Containing-block size of the container along its main axis.
    main_parent_size: f32,
    cross_parent_size: f32,
    available_inner_width: f32,
    available_inner_height: f32,
    /// Narrowed to the content size line by line when the main size is not exact.
    available_inner_main: f32,
    available_inner_cross: f32,
    min_inner_main: f32,
    max_inner_main: f32,
    main_mode: MeasureMode,
    cross_mode: MeasureMode,
    padding_border_main: f32,
    padding_border_cross: f32,
    leading_padding_border_cross: f32,
    /// The items' outer flex bases exceed the available main size.
    flex_basis_overflows: bool,
}

impl FlexPass {
    #[inline]
    fn is_main_row(&self) -> bool {
        self.main_axis.is_row()
    }

    #[inline]
    fn wraps(&self) -> bool {
        self.style.flex_wrap != Wrap::NoWrap
    }

    /// Available inner `[width, height]`; also the children's containing block.
    #[inline]
    const fn inner_sizes(&self) -> [f32; 2] {
        [self.available_inner_width, self.available_inner_height]
    }

    /// Order a main/cross pair as `[width, height]`.
    #[inline]
    fn by_dimension<T>(&self, main: T, cross: T) -> [T; 2] {
        if self.is_main_row() {
            [main, cross]
        } else {
            [cross, main]
        }
    }

    /// Border-box size along `axis` when it follows the content; `None` when
    /// the request fixes it.
    fn content_based_size(
        &self,
        axis: FlexDirection,
        mode: MeasureMode,
        content: f32,
        available_inner: f32,
        axis_parent_size: f32,
    ) -> Option<f32> {
        let padding_border = self.style.padding_and_border_for_axis(axis, self.parent_width);
        match mode {
            MeasureMode::Exactly => None,
            MeasureMode::AtMost if self.style.overflow == Overflow::Scroll => Some(
                (available_inner + padding_border)
                    .min(self.style.bound_axis_within_min_max(axis, content, axis_parent_size))
                    .max(padding_border),
            ),
            MeasureMode::Undefined | MeasureMode::AtMost => {
                Some(self.style.bound_axis(axis, content, axis_parent_size, self.parent_width))
            }
        }
    }
}

impl LayoutTree {
    /// Run the flex algorithm on `node` for `request`, writing its measured
    /// size and, with `perform_layout`, its children's positions.
    pub(super) fn layout_impl(&mut self, node: NodeId, request: LayoutRequest) {
        let direction = self.node(node).style.direction.resolve(request.parent_direction);
        self.resolve_box_edges(node, direction, request.parent_size[0]);

        if self.node(node).measure.is_some() {
            self.measure_leaf(node, &request);
            return;
        }
        if self.arena[node].first_child().is_none() {
            self.size_empty_container(node, &request);
            return;
        }
        if !request.perform_layout && self.size_fixed_container(node, &request) {
            return;
        }

        self.node_mut(node).layout.had_overflow = false;
        let mut pass = self.begin_flex_pass(node, direction, &request);
        trace!(
            target: "layouter::flex",
            "[FLEX] {node:?} main={} cross={} modes=({:?}, {:?}) inner=({:.3}, {:.3})",
            pass.main_axis, pass.cross_axis, pass.main_mode, pass.cross_mode,
            pass.available_inner_width, pass.available_inner_height
        );
        let children = self.child_ids(node);
        self.run_flex_pass(&mut pass, &request, &children);
    }

    /// Record the resolved direction and the physical margin, border and padding.
    fn resolve_box_edges(&mut self, node: NodeId, direction: Direction, parent_width: f32) {
        let data = self.node_mut(node);
        let style = &data.style;
        let layout = &mut data.layout;
        layout.direction = direction;
        for axis in [FlexDirection::Row.resolve(direction), FlexDirection::Column] {
            let leading = axis.leading_edge().index();
            let trailing = axis.trailing_edge().index();
            layout.margin[leading] = style.leading_margin(axis, parent_width);
            layout.margin[trailing] = style.trailing_margin(axis, parent_width);
            layout.border[leading] = style.leading_border(axis);
            layout.border[trailing] = style.trailing_border(axis);
            layout.padding[leading] = style.leading_padding(axis, parent_width);
            layout.padding[trailing] = style.trailing_padding(axis, parent_width);
        }
    }

    fn begin_flex_pass(&self, node: NodeId, direction: Direction, request: &LayoutRequest) -> FlexPass {
        let style = self.node(node).style.clone();
        let main_axis = style.flex_direction.resolve(direction);
        let cross_axis = main_axis.cross(direction);
        let is_main_row = main_axis.is_row();
        let [parent_width, parent_height] = request.parent_size;
        let (main_parent_size, cross_parent_size) = if is_main_row {
            (parent_width, parent_height)
        } else {
            (parent_height, parent_width)
        };
        let padding_border_main = style.padding_and_border_for_axis(main_axis, parent_width);
        let padding_border_cross = style.padding_and_border_for_axis(cross_axis, parent_width);
        let main_dimension = main_axis.dimension();
        let min_inner_main =
            or_undefined(style.min_dimension(main_dimension).resolve(main_parent_size)) - padding_border_main;
        let max_inner_main =
            or_undefined(style.max_dimension(main_dimension).resolve(main_parent_size)) - padding_border_main;
        let available_inner_width =
            style.available_inner_dim(FlexDirection::Row, request.available[0], parent_width);
        let available_inner_height =
            style.available_inner_dim(FlexDirection::Column, request.available[1], parent_height);
        let [width_mode, height_mode] = request.modes;
        let (available_inner_main, available_inner_cross, main_mode, cross_mode) = if is_main_row {
            (available_inner_width, available_inner_height, width_mode, height_mode)
        } else {
            (available_inner_height, available_inner_width, height_mode, width_mode)
        };
        FlexPass {
            node,
            direction,
            main_axis,
            cross_axis,
            perform_layout: request.perform_layout,
            modes: request.modes,
            parent_width,
            main_parent_size,
            cross_parent_size,
            available_inner_width,
            available_inner_height,
            available_inner_main,
            available_inner_cross,
            min_inner_main,
            max_inner_main,
            main_mode,
            cross_mode,
            padding_border_main,
            padding_border_cross,
            leading_padding_border_cross: style.leading_padding_and_border(cross_axis, parent_width),
            flex_basis_overflows: false,
            style,
        }
    }

    fn run_flex_pass(&mut self, pass: &mut FlexPass, request: &LayoutRequest, children: &[NodeId]) {
        let total_outer_basis = self.compute_flex_bases(pass, children);
        pass.flex_basis_overflows =
            pass.main_mode != MeasureMode::Undefined && total_outer_basis > pass.available_inner_main;
        if pass.wraps() && pass.flex_basis_overflows && pass.main_mode == MeasureMode::AtMost {
            pass.main_mode = MeasureMode::Exactly;
        }

        let lines = self.collect_lines(pass, children);
        let mut total_line_cross = 0.0f32;
        let mut max_line_main = 0.0f32;
        for line in &lines {
            let extent = self.layout_line(pass, &children[line.start..line.end], total_line_cross);
            total_line_cross += extent.cross;
            max_line_main = max_line_main.max(extent.main);
        }

        if pass.perform_layout
            && (lines.len() > 1 || self.is_baseline_layout(pass.node))
            && !pass.available_inner_cross.is_nan()
        {
            self.align_lines(pass, children, &lines, total_line_cross);
        }

        self.set_container_size(pass, request, max_line_main, total_line_cross);

        if pass.perform_layout {
            if pass.style.flex_wrap == Wrap::WrapReverse {
                self.reverse_wrapped_lines(pass, children);
            }
            self.layout_absolute_children(pass, children);
            self.set_trailing_positions(pass, children);
        }
    }

    /// Final border-box size: the request's size bounded by min/max, or the
    /// content's where the request leaves it open.
    fn set_container_size(
        &mut self,
        pass: &FlexPass,
        request: &LayoutRequest,
        max_line_main: f32,
        total_line_cross: f32,
    ) {
        let style = &pass.style;
        let parent_width = pass.parent_width;
        let [available_width, available_height] = request.available;
        let mut measured = [
            style.bound_axis(
                FlexDirection::Row,
                available_width - style.margin_for_axis(FlexDirection::Row, parent_width),
                parent_width,
                parent_width,
            ),
            style.bound_axis(
                FlexDirection::Column,
                available_height - style.margin_for_axis(FlexDirection::Column, parent_width),
                request.parent_size[1],
                parent_width,
            ),
        ];
        if let Some(size) = pass.content_based_size(
            pass.main_axis,
            pass.main_mode,
            max_line_main,
            pass.available_inner_main,
            pass.main_parent_size,
        ) {
            measured[pass.main_axis.dimension().index()] = size;
        }
        if let Some(size) = pass.content_based_size(
            pass.cross_axis,
            pass.cross_mode,
            total_line_cross + pass.padding_border_cross,
            pass.available_inner_cross,
            pass.cross_parent_size,
        ) {
            measured[pass.cross_axis.dimension().index()] = size;
        }
        self.node_mut(pass.node).layout.measured = measured;
    }

    /// Lines were stacked from the cross start; `wrap-reverse` mirrors them.
    fn reverse_wrapped_lines(&mut self, pass: &FlexPass, children: &[NodeId]) {
        let cross = pass.cross_axis;
        let slot = cross.dimension().index();
        let edge = cross.leading_edge().index();
        let container_cross = self.node(pass.node).layout.measured[slot];
        for &child in children {
            let data = self.node_mut(child);
            if !data.style.is_in_flow() {
                continue;
            }
            data.layout.position[edge] =
                container_cross - data.layout.position[edge] - data.layout.measured[slot];
        }
    }

    /// Positions along reversed axes were written to the leading (far) edge;
    /// derive the near edge that callers read.
    fn set_trailing_positions(&mut self, pass: &FlexPass, children: &[NodeId]) {
        let reversed: Vec<FlexDirection> = [pass.main_axis, pass.cross_axis]
            .into_iter()
            .filter(|axis| axis.is_reverse())
            .collect();
        if reversed.is_empty() {
            return;
        }
        let container = self.node(pass.node).layout.measured;
        for &child in children {
            let data = self.node_mut(child);
            if data.style.display == Display::None {
                continue;
            }
            for axis in &reversed {
                let slot = axis.dimension().index();
                data.layout.position[axis.trailing_edge().index()] = container[slot]
                    - data.layout.measured[slot]
                    - data.layout.position[axis.leading_edge().index()];
            }
        }
    }

    /// Initial offsets of `node` inside its parent: margins plus the relative
    /// shift, on both edges of both axes. Roots are always placed LTR.
    pub(super) fn set_position(
        &mut self,
        node: NodeId,
        direction: Direction,
        main_size: f32,
        cross_size: f32,
        parent_width: f32,
    ) {
        let effective = if self.parent_of(node).is_some() {
            direction
        } else {
            Direction::Ltr
        };
        let data = self.node_mut(node);
        let main = data.style.flex_direction.resolve(effective);
        let cross = main.cross(effective);
        for (axis, size) in [(main, main_size), (cross, cross_size)] {
            let relative = data.style.relative_position(axis, size);
            data.layout.position[axis.leading_edge().index()] =
                data.style.leading_margin(axis, parent_width) + relative;
            data.layout.position[axis.trailing_edge().index()] =
                data.style.trailing_margin(axis, parent_width) + relative;
        }
    }

    /// `display: none`: the subtree takes no space and counts as laid out.
    fn zero_out_subtree(&mut self, node: NodeId) {
        let subtree: Vec<NodeId> = node.descendants(&self.arena).collect();
        for id in subtree {
            let data = self.node_mut(id);
            data.layout = LayoutState::zeroed();
            data.has_new_layout = true;
        }
        self.node_mut(node).dirty = DirtyKind::NONE;
    }
}
