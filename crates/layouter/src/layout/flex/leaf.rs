//! Nodes sized without running the flex algorithm: measured leaves, empty
//! containers and containers whose size the request already fixes.

use flexbox_style::FlexDirection;
use indextree::NodeId;
use log::{trace, warn};

use crate::layout::resolve::BoxModel as _;
use crate::layout::{LayoutRequest, UNDEFINED};
use crate::measure::{MeasureMode, MeasureRequest, Size};
use crate::tree::LayoutTree;

/// Measured content gets padding and border added unless the size is exact.
#[inline]
fn content_or_available(mode: MeasureMode, content: f32, padding_border: f32, available: f32) -> f32 {
    match mode {
        MeasureMode::Undefined | MeasureMode::AtMost => content + padding_border,
        MeasureMode::Exactly => available,
    }
}

impl LayoutTree {
    /// Size a leaf through its measure function.
    pub(super) fn measure_leaf(&mut self, node: NodeId, request: &LayoutRequest) {
        let [available_width, available_height] = request.available;
        let [width_mode, height_mode] = request.modes;
        let [parent_width, parent_height] = request.parent_size;
        let style = &self.node(node).style;
        let padding_border_row = style.padding_and_border_for_axis(FlexDirection::Row, available_width);
        let padding_border_column =
            style.padding_and_border_for_axis(FlexDirection::Column, available_width);
        let margin_row = style.margin_for_axis(FlexDirection::Row, available_width);
        let margin_column = style.margin_for_axis(FlexDirection::Column, available_width);

        let (width, height) = if width_mode == MeasureMode::Exactly && height_mode == MeasureMode::Exactly {
            (available_width - margin_row, available_height - margin_column)
        } else {
            let inner = |available: f32, mode: MeasureMode, margin: f32, padding_border: f32| {
                if mode == MeasureMode::Undefined || available.is_nan() {
                    UNDEFINED
                } else {
                    (available - margin - padding_border).max(0.0)
                }
            };
            let measure_request = MeasureRequest {
                width: inner(available_width, width_mode, margin_row, padding_border_row),
                width_mode,
                height: inner(available_height, height_mode, margin_column, padding_border_column),
                height_mode,
            };
            let content = self.call_measure(node, measure_request);
            self.stats.measure_calls += 1;
            (
                content_or_available(width_mode, content.width, padding_border_row, available_width - margin_row),
                content_or_available(
                    height_mode,
                    content.height,
                    padding_border_column,
                    available_height - margin_column,
                ),
            )
        };

        let data = self.node_mut(node);
        data.layout.measured = [
            data.style.bound_axis(FlexDirection::Row, width, parent_width, parent_width),
            data.style.bound_axis(FlexDirection::Column, height, parent_height, parent_width),
        ];
    }

    /// Run the node's measure function, replacing unusable answers with zero.
    fn call_measure(&self, node: NodeId, request: MeasureRequest) -> Size {
        let Some(measure) = self.node(node).measure.as_ref() else {
            return Size::default();
        };
        let size = measure.measure(node, request);
        trace!(
            target: "layouter::measure",
            "[MEASURE] {node:?} ({:.3} {:?}, {:.3} {:?}) => ({:.3}, {:.3})",
            request.width, request.width_mode, request.height, request.height_mode, size.width, size.height
        );
        let sanitize = |value: f32| {
            if value.is_nan() || value < 0.0 {
                warn!(target: "layouter::measure", "[MEASURE] {node:?} reported {value}; using 0");
                0.0
            } else {
                value
            }
        };
        Size::new(sanitize(size.width), sanitize(size.height))
    }

    /// A container without children is as large as its padding and border
    /// unless the request fixes its size.
    pub(super) fn size_empty_container(&mut self, node: NodeId, request: &LayoutRequest) {
        let [available_width, available_height] = request.available;
        let [parent_width, parent_height] = request.parent_size;
        let data = self.node_mut(node);
        let style = &data.style;
        let size_for = |axis: FlexDirection, mode: MeasureMode, available: f32| match mode {
            MeasureMode::Undefined | MeasureMode::AtMost => {
                style.padding_and_border_for_axis(axis, parent_width)
            }
            MeasureMode::Exactly => available - style.margin_for_axis(axis, parent_width),
        };
        let width = size_for(FlexDirection::Row, request.modes[0], available_width);
        let height = size_for(FlexDirection::Column, request.modes[1], available_height);
        data.layout.measured = [
            style.bound_axis(FlexDirection::Row, width, parent_width, parent_width),
            style.bound_axis(FlexDirection::Column, height, parent_height, parent_width),
        ];
    }

    /// Answer a sizing-only request without visiting children when the
    /// request already determines the size: both modes exact, or an
    /// "at most" bound of zero or less.
    pub(super) fn size_fixed_container(&mut self, node: NodeId, request: &LayoutRequest) -> bool {
        let [available_width, available_height] = request.available;
        let [width_mode, height_mode] = request.modes;
        let collapsed = |available: f32, mode: MeasureMode| {
            !available.is_nan() && mode == MeasureMode::AtMost && available <= 0.0
        };
        let fixed = collapsed(available_width, width_mode)
            || collapsed(available_height, height_mode)
            || (width_mode == MeasureMode::Exactly && height_mode == MeasureMode::Exactly);
        if !fixed {
            return false;
        }
        let [parent_width, parent_height] = request.parent_size;
        let data = self.node_mut(node);
        let style = &data.style;
        let size_for = |axis: FlexDirection, mode: MeasureMode, available: f32| {
            if available.is_nan() || (mode == MeasureMode::AtMost && available < 0.0) {
                0.0
            } else {
                available - style.margin_for_axis(axis, parent_width)
            }
        };
        let width = size_for(FlexDirection::Row, width_mode, available_width);
        let height = size_for(FlexDirection::Column, height_mode, available_height);
        data.layout.measured = [
            style.bound_axis(FlexDirection::Row, width, parent_width, parent_width),
            style.bound_axis(FlexDirection::Column, height, parent_height, parent_width),
        ];
        trace!(target: "layouter::flex", "[FLEX] {node:?} fixed size {:?}", data.layout.measured);
        true
    }
}
