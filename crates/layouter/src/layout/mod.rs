//! The layout engine: entry points, per-node layout state and instrumentation.
//!
//! Undefined lengths travel through the engine as NaN, matching the
//! `flexbox` helpers; the public API speaks `Option<f32>`.

mod cache;
mod flex;
mod resolve;
mod rounding;

use flexbox_style::{Dimension, Direction, FlexDirection, Style};
use indextree::NodeId;
use log::debug;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::info_span;

pub(crate) use cache::CachedMeasurement;
use resolve::BoxModel as _;

use crate::error::StructuralError;
use crate::geometry::LayoutRect;
use crate::measure::MeasureMode;
use crate::tree::LayoutTree;

/// An undefined length.
pub(crate) const UNDEFINED: f32 = f32::NAN;

/// Measurement entries kept per node before the ring wraps.
pub(crate) const MAX_CACHED_MEASUREMENTS: usize = 16;

/// One request to size (and optionally position) a node.
///
/// Arrays are indexed by [`Dimension::index`]. An available size paired with
/// [`MeasureMode::Undefined`] is NaN.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LayoutRequest {
    pub available: [f32; 2],
    pub modes: [MeasureMode; 2],
    /// Size of the containing block, for percentage resolution.
    pub parent_size: [f32; 2],
    pub parent_direction: Direction,
    /// Position the subtree too, not just size the node.
    pub perform_layout: bool,
    /// Why the node is visited; only used for logging.
    pub reason: &'static str,
}

/// Counters describing the most recent [`LayoutTree::compute_layout`] call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    /// Runs of the flex algorithm on a node, sizing-only passes included.
    pub layouts: u64,
    /// Invocations of measure functions.
    pub measure_calls: u64,
    /// Final layouts answered from a node's cache.
    pub layout_cache_hits: u64,
    /// Sizing-only requests answered from a node's cache.
    pub measure_cache_hits: u64,
    /// Nodes the engine was asked to lay out or measure, hits included.
    pub nodes_visited: u64,
}

/// Mutable per-node layout state, unrounded.
#[derive(Clone, Debug)]
pub(crate) struct LayoutState {
    /// Offsets from the parent's border-box origin, indexed by physical edge.
    pub position: [f32; 4],
    pub dimensions: [f32; 2],
    pub measured: [f32; 2],
    pub margin: [f32; 4],
    pub border: [f32; 4],
    pub padding: [f32; 4],
    pub direction: Direction,
    pub had_overflow: bool,
    pub computed_flex_basis: f32,
    pub flex_basis_generation: u32,
    /// Main-axis and width reference sizes the flex basis was resolved against.
    pub flex_basis_reference: [f32; 2],
    pub generation: u32,
    pub last_parent_direction: Option<Direction>,
    pub cached_layout: Option<CachedMeasurement>,
    pub cached_measurements: SmallVec<CachedMeasurement, MAX_CACHED_MEASUREMENTS>,
    /// Frame snapped to the pixel grid; what callers read back.
    pub rounded: LayoutRect,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            position: [0.0; 4],
            dimensions: [UNDEFINED; 2],
            measured: [UNDEFINED; 2],
            margin: [0.0; 4],
            border: [0.0; 4],
            padding: [0.0; 4],
            direction: Direction::Inherit,
            had_overflow: false,
            computed_flex_basis: UNDEFINED,
            flex_basis_generation: 0,
            flex_basis_reference: [UNDEFINED; 2],
            generation: 0,
            last_parent_direction: None,
            cached_layout: None,
            cached_measurements: SmallVec::new(),
            rounded: LayoutRect::default(),
        }
    }
}

impl LayoutState {
    /// State of a node that takes no space (`display: none`).
    pub fn zeroed() -> Self {
        Self {
            dimensions: [0.0; 2],
            measured: [0.0; 2],
            ..Self::default()
        }
    }

    #[inline]
    pub fn invalidate_flex_basis(&mut self) {
        self.computed_flex_basis = UNDEFINED;
    }

    #[inline]
    pub const fn measured(&self, dimension: Dimension) -> f32 {
        self.measured[dimension.index()]
    }

    #[inline]
    pub fn set_measured(&mut self, dimension: Dimension, value: f32) {
        self.measured[dimension.index()] = value;
    }

    /// Measured size along `axis` plus the node's margins on that axis.
    #[inline]
    pub fn measured_with_margin(&self, style: &Style, axis: FlexDirection, width_size: f32) -> f32 {
        self.measured(axis.dimension()) + style.margin_for_axis(axis, width_size)
    }

    /// Whether the measured size along `axis` is usable.
    #[inline]
    pub fn is_measured_defined(&self, axis: FlexDirection) -> bool {
        let value = self.measured(axis.dimension());
        !value.is_nan() && value >= 0.0
    }
}

#[inline]
pub(crate) fn or_undefined(value: Option<f32>) -> f32 {
    value.unwrap_or(UNDEFINED)
}

/// Size and mode used for a root that is not constrained from outside.
fn root_constraint(
    style: &Style,
    axis: FlexDirection,
    available: Option<f32>,
    parent_width: f32,
) -> (Option<f32>, MeasureMode) {
    let parent_size = or_undefined(available);
    if style.is_style_dim_defined(axis, parent_size) {
        let size = or_undefined(style.resolved_dimension(axis.dimension()).resolve(parent_size))
            + style.margin_for_axis(axis, parent_width);
        return (Some(size), MeasureMode::Exactly);
    }
    if let Some(max) = style.max_dimension(axis.dimension()).resolve(parent_size)
        && max >= 0.0
    {
        return (Some(max), MeasureMode::AtMost);
    }
    match available {
        Some(size) if !size.is_nan() => (Some(size), MeasureMode::Exactly),
        _ => (None, MeasureMode::Undefined),
    }
}

impl LayoutTree {
    /// Lay out the tree rooted at `root` inside the given available space.
    ///
    /// Modes are derived from the root's style: a definite size is used
    /// exactly, a max size bounds the root from above, otherwise the available
    /// space is exact, or unbounded when absent. Fails only for an unknown root.
    pub fn compute_layout(
        &mut self,
        root: NodeId,
        available_width: Option<f32>,
        available_height: Option<f32>,
        direction: Direction,
    ) -> Result<(), StructuralError> {
        let style = &self.data(root)?.style;
        let parent_width = or_undefined(available_width);
        let (width, width_mode) =
            root_constraint(style, FlexDirection::Row, available_width, parent_width);
        let (height, height_mode) =
            root_constraint(style, FlexDirection::Column, available_height, parent_width);
        self.run_layout(
            root,
            [or_undefined(width), or_undefined(height)],
            [width_mode, height_mode],
            [parent_width, or_undefined(available_height)],
            direction,
        );
        Ok(())
    }

    /// Lay out the tree rooted at `root` under explicit constraint modes.
    ///
    /// A size paired with [`MeasureMode::Undefined`] is ignored; a missing size
    /// turns its mode into [`MeasureMode::Undefined`].
    pub fn compute_layout_with_modes(
        &mut self,
        root: NodeId,
        width: Option<f32>,
        height: Option<f32>,
        width_mode: MeasureMode,
        height_mode: MeasureMode,
        direction: Direction,
    ) -> Result<(), StructuralError> {
        self.ensure_node(root)?;
        let normalize = |size: Option<f32>, mode: MeasureMode| match (size, mode) {
            (_, MeasureMode::Undefined) | (None, _) => (UNDEFINED, MeasureMode::Undefined),
            (Some(value), _) if value.is_nan() => (UNDEFINED, MeasureMode::Undefined),
            (Some(value), _) => (value, mode),
        };
        let (width_value, width_mode_used) = normalize(width, width_mode);
        let (height_value, height_mode_used) = normalize(height, height_mode);
        self.run_layout(
            root,
            [width_value, height_value],
            [width_mode_used, height_mode_used],
            [or_undefined(width), or_undefined(height)],
            direction,
        );
        Ok(())
    }

    fn run_layout(
        &mut self,
        root: NodeId,
        available: [f32; 2],
        modes: [MeasureMode; 2],
        parent_size: [f32; 2],
        direction: Direction,
    ) {
        let _span = info_span!("layouter.compute_layout").entered();
        self.generation = self.generation.wrapping_add(1);
        self.stats = LayoutStats::default();
        debug!(
            target: "layouter::layout",
            "[LAYOUT] root={root:?} gen={} avail=({:.3}, {:.3}) modes=({:?}, {:?}) dir={direction}",
            self.generation, available[0], available[1], modes[0], modes[1]
        );
        let laid_out = self.layout_node(
            root,
            LayoutRequest {
                available,
                modes,
                parent_size,
                parent_direction: direction,
                perform_layout: true,
                reason: "initial",
            },
        );
        if laid_out {
            let resolved = self.node(root).layout.direction;
            self.set_position(root, resolved, parent_size[0], parent_size[1], parent_size[0]);
            self.round_to_pixel_grid(root, [0.0, 0.0], [0.0, 0.0]);
        }
        debug!(target: "layouter::layout", "[LAYOUT] done {:?}", self.stats);
    }
}
