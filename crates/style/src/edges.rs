//! Per-edge value tables with shorthand fallback.

use serde::{Deserialize, Serialize};

use crate::enums::Edge;
use crate::value::Value;

/// Nine-slot edge table: four physical edges, two logical edges and three shorthands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Edges([Value; Edge::COUNT]);

impl Edges {
    #[inline]
    pub const fn new() -> Self {
        Self([Value::Undefined; Edge::COUNT])
    }

    /// Table with only the `all` shorthand set.
    #[inline]
    pub fn all(value: Value) -> Self {
        let mut edges = Self::new();
        edges.set(Edge::All, value);
        edges
    }

    /// Raw slot value, without shorthand fallback.
    #[inline]
    pub const fn get(&self, edge: Edge) -> Value {
        self.0[edge.index()]
    }

    #[inline]
    pub fn set(&mut self, edge: Edge, value: Value) {
        self.0[edge.index()] = value;
    }

    /// Builder form of [`Edges::set`].
    #[inline]
    #[must_use]
    pub fn with(mut self, edge: Edge, value: Value) -> Self {
        self.set(edge, value);
        self
    }

    /// Resolve an edge through its shorthands.
    ///
    /// The edge's own slot wins, then `vertical` (top/bottom) or `horizontal`
    /// (left/right/start/end), then `all`. `start` and `end` never fall back to
    /// `default`, so callers can tell them apart from the physical edge.
    pub fn computed(&self, edge: Edge, default: Value) -> Value {
        let own = self.get(edge);
        if !own.is_undefined() {
            return own;
        }
        let vertical = self.get(Edge::Vertical);
        if matches!(edge, Edge::Top | Edge::Bottom) && !vertical.is_undefined() {
            return vertical;
        }
        let horizontal = self.get(Edge::Horizontal);
        if matches!(edge, Edge::Left | Edge::Right | Edge::Start | Edge::End)
            && !horizontal.is_undefined()
        {
            return horizontal;
        }
        let all = self.get(Edge::All);
        if !all.is_undefined() {
            return all;
        }
        if matches!(edge, Edge::Start | Edge::End) {
            return Value::Undefined;
        }
        default
    }

    /// Whether the four physical slots hold the same value.
    pub fn physical_uniform(&self) -> bool {
        let first = self.get(Edge::Left);
        [Edge::Top, Edge::Right, Edge::Bottom]
            .into_iter()
            .all(|edge| first.approx_eq(self.get(edge)))
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(left, right)| left.approx_eq(*right))
    }
}
