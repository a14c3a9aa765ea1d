//! Per-node layout cache: skipping subtrees whose inputs did not change.

use flexbox::{floats_equal, round_value_to_pixel_grid};
use flexbox_style::FlexDirection;
use indextree::NodeId;
use log::trace;

use super::resolve::BoxModel as _;
use super::{LayoutRequest, MAX_CACHED_MEASUREMENTS};
use crate::measure::MeasureMode;
use crate::tree::{DirtyKind, LayoutTree};

/// Inputs and outputs of one earlier sizing of a node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct CachedMeasurement {
    pub available_width: f32,
    pub available_height: f32,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
    pub computed_width: f32,
    pub computed_height: f32,
    /// Containing block the node's percentages were resolved against.
    pub parent_size: [f32; 2],
}

impl CachedMeasurement {
    /// Percent margins, padding, borders and offsets resolved against the
    /// same containing block.
    #[inline]
    fn same_containing_block(&self, parent_size: [f32; 2]) -> bool {
        floats_equal(self.parent_size[0], parent_size[0])
            && floats_equal(self.parent_size[1], parent_size[1])
    }

    /// Same request: equal sizes (undefined equals undefined) and equal modes.
    #[inline]
    fn matches(&self, available: [f32; 2], modes: [MeasureMode; 2]) -> bool {
        floats_equal(self.available_width, available[0])
            && floats_equal(self.available_height, available[1])
            && self.width_mode == modes[0]
            && self.height_mode == modes[1]
    }
}

/// One axis of a cached measurement, as seen by a new request.
struct AxisProbe {
    mode: MeasureMode,
    size: f32,
    last_mode: MeasureMode,
    last_size: f32,
    last_computed: f32,
    margin: f32,
}

impl AxisProbe {
    fn is_compatible(&self, scale: f32) -> bool {
        let snapped = |value: f32| {
            if scale == 0.0 {
                value
            } else {
                round_value_to_pixel_grid(value, scale, false, false)
            }
        };
        let same_spec =
            self.last_mode == self.mode && floats_equal(snapped(self.last_size), snapped(self.size));
        let content = self.size - self.margin;
        let exact_and_matches =
            self.mode == MeasureMode::Exactly && floats_equal(content, self.last_computed);
        let old_unbounded_still_fits = self.mode == MeasureMode::AtMost
            && self.last_mode == MeasureMode::Undefined
            && (content >= self.last_computed || floats_equal(content, self.last_computed));
        let stricter_still_valid = self.last_mode == MeasureMode::AtMost
            && self.mode == MeasureMode::AtMost
            && self.last_size > self.size
            && (self.last_computed <= content || floats_equal(content, self.last_computed));
        same_spec || exact_and_matches || old_unbounded_still_fits || stricter_still_valid
    }
}

/// Whether a measured leaf can answer `available`/`modes` from `entry`.
///
/// Beyond an identical request, a result is reused when an exact request
/// matches the size computed last time, when an unbounded result fits under
/// a new bound, or when a tighter bound still contains the old result.
/// With rounding enabled sizes are compared on the pixel grid.
pub(crate) fn can_use_cached_measurement(
    available: [f32; 2],
    modes: [MeasureMode; 2],
    entry: &CachedMeasurement,
    margins: [f32; 2],
    scale: f32,
) -> bool {
    if entry.computed_width < 0.0 || entry.computed_height < 0.0 {
        return false;
    }
    let width = AxisProbe {
        mode: modes[0],
        size: available[0],
        last_mode: entry.width_mode,
        last_size: entry.available_width,
        last_computed: entry.computed_width,
        margin: margins[0],
    };
    let height = AxisProbe {
        mode: modes[1],
        size: available[1],
        last_mode: entry.height_mode,
        last_size: entry.available_height,
        last_computed: entry.computed_height,
        margin: margins[1],
    };
    width.is_compatible(scale) && height.is_compatible(scale)
}

impl LayoutTree {
    /// Size (and with `perform_layout`, position the subtree of) `node`,
    /// reusing cached results when its inputs match an earlier request.
    ///
    /// Returns whether the node was actually laid out, either because it was
    /// dirty or because no cached entry matched.
    pub(crate) fn layout_node(&mut self, node: NodeId, request: LayoutRequest) -> bool {
        let LayoutRequest {
            available,
            modes,
            parent_size,
            parent_direction,
            perform_layout,
            reason,
        } = request;
        self.stats.nodes_visited += 1;
        let generation = self.generation;
        let scale = self.config.scale();
        let data = self.node_mut(node);
        let layout = &mut data.layout;
        let need_to_visit = (data.dirty.is_dirty() && layout.generation != generation)
            || layout.last_parent_direction != Some(parent_direction);
        if need_to_visit {
            layout.cached_measurements.clear();
            layout.cached_layout = None;
        }

        let cached = if data.measure.is_some() {
            let margins = [
                data.style.margin_for_axis(FlexDirection::Row, parent_size[0]),
                data.style.margin_for_axis(FlexDirection::Column, parent_size[0]),
            ];
            layout
                .cached_layout
                .iter()
                .chain(layout.cached_measurements.iter())
                .find(|entry| {
                    entry.same_containing_block(parent_size)
                        && can_use_cached_measurement(available, modes, entry, margins, scale)
                })
                .copied()
        } else if perform_layout {
            layout
                .cached_layout
                .filter(|entry| entry.same_containing_block(parent_size) && entry.matches(available, modes))
        } else {
            layout
                .cached_measurements
                .iter()
                .find(|entry| entry.same_containing_block(parent_size) && entry.matches(available, modes))
                .copied()
        };

        if let Some(entry) = cached {
            layout.measured = [entry.computed_width, entry.computed_height];
            if perform_layout {
                self.stats.layout_cache_hits += 1;
            } else {
                self.stats.measure_cache_hits += 1;
            }
            trace!(
                target: "layouter::cache",
                "[CACHE] hit {node:?} {reason} avail=({:.3}, {:.3}) => ({:.3}, {:.3})",
                available[0], available[1], entry.computed_width, entry.computed_height
            );
        } else {
            trace!(
                target: "layouter::cache",
                "[CACHE] {} {node:?} {reason} modes=({:?}, {:?}) avail=({:.3}, {:.3})",
                if need_to_visit { "visit" } else { "miss" },
                modes[0], modes[1], available[0], available[1]
            );
            self.stats.layouts += 1;
            self.layout_impl(node, request);

            let layout = &mut self.node_mut(node).layout;
            layout.last_parent_direction = Some(parent_direction);
            let entry = CachedMeasurement {
                available_width: available[0],
                available_height: available[1],
                width_mode: modes[0],
                height_mode: modes[1],
                computed_width: layout.measured[0],
                computed_height: layout.measured[1],
                parent_size,
            };
            if perform_layout {
                layout.cached_layout = Some(entry);
            } else {
                if layout.cached_measurements.len() == MAX_CACHED_MEASUREMENTS {
                    trace!(target: "layouter::cache", "[CACHE] {node:?} out of measurement slots");
                    layout.cached_measurements.clear();
                }
                layout.cached_measurements.push(entry);
            }
        }

        let data = self.node_mut(node);
        if perform_layout {
            data.layout.dimensions = data.layout.measured;
            data.has_new_layout = true;
            data.dirty = DirtyKind::NONE;
        }
        data.layout.generation = generation;
        need_to_visit || cached.is_none()
    }
}
