//! Measurement adapter: how leaves with intrinsic content report their size.

use indextree::NodeId;
use serde::{Deserialize, Serialize};

/// How a size constraint should be read.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasureMode {
    /// No constraint; the value is undefined (NaN).
    #[default]
    Undefined,
    /// The node must be exactly this size.
    Exactly,
    /// The node may be at most this size.
    AtMost,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Content-box constraints handed to a [`Measure`] implementation.
///
/// A dimension whose mode is [`MeasureMode::Undefined`] carries NaN.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeasureRequest {
    pub width: f32,
    pub width_mode: MeasureMode,
    pub height: f32,
    pub height_mode: MeasureMode,
}

impl MeasureRequest {
    /// Width bound, if the mode carries one.
    #[inline]
    pub fn max_width(&self) -> Option<f32> {
        (self.width_mode != MeasureMode::Undefined && !self.width.is_nan()).then_some(self.width)
    }

    /// Height bound, if the mode carries one.
    #[inline]
    pub fn max_height(&self) -> Option<f32> {
        (self.height_mode != MeasureMode::Undefined && !self.height.is_nan()).then_some(self.height)
    }
}

/// Intrinsic sizing for a leaf node.
///
/// The engine may call `measure` several times per layout pass with different
/// constraints; implementations must return the same size for the same request.
pub trait Measure: Send {
    fn measure(&self, node: NodeId, request: MeasureRequest) -> Size;

    /// Distance from the top edge to the first baseline for the given size.
    fn baseline(&self, _node: NodeId, _width: f32, _height: f32) -> Option<f32> {
        None
    }
}

impl<F> Measure for F
where
    F: Fn(NodeId, MeasureRequest) -> Size + Send,
{
    #[inline]
    fn measure(&self, node: NodeId, request: MeasureRequest) -> Size {
        self(node, request)
    }
}

/// Baseline callback for any node: `(node, width, height) -> baseline`.
pub type BaselineFunc = Box<dyn Fn(NodeId, f32, f32) -> f32 + Send>;

/// Called when a node turns dirty.
pub type DirtiedFunc = Box<dyn Fn(NodeId) + Send>;
