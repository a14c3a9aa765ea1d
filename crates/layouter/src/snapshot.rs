//! Serializable copies of computed layout, for golden tests and debugging tools.

use anyhow::Context as _;
use flexbox_style::NodeType;
use indextree::NodeId;
use serde::{Deserialize, Serialize};

use crate::error::StructuralError;
use crate::geometry::LayoutRect;
use crate::tree::LayoutTree;

/// Rounded frame of a node and, recursively, of its children.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "is_default_type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutSnapshot>,
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "serde passes a reference")]
fn is_default_type(node_type: &NodeType) -> bool {
    *node_type == NodeType::Default
}

impl LayoutSnapshot {
    /// The snapshot's own frame.
    #[inline]
    pub const fn frame(&self) -> LayoutRect {
        LayoutRect {
            x: self.left,
            y: self.top,
            width: self.width,
            height: self.height,
        }
    }

    /// Number of nodes in the snapshot, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

impl LayoutTree {
    /// Capture the computed layout of the subtree at `node`.
    pub fn snapshot(&self, node: NodeId) -> Result<LayoutSnapshot, StructuralError> {
        self.ensure_node(node)?;
        Ok(self.snapshot_node(node))
    }

    fn snapshot_node(&self, node: NodeId) -> LayoutSnapshot {
        let data = self.node(node);
        let frame = data.layout.rounded;
        LayoutSnapshot {
            left: frame.x,
            top: frame.y,
            width: frame.width,
            height: frame.height,
            node_type: data.node_type,
            children: node
                .children(&self.arena)
                .map(|child| self.snapshot_node(child))
                .collect(),
        }
    }

    /// [`Self::snapshot`] rendered as pretty-printed JSON.
    pub fn snapshot_json(&self, node: NodeId) -> anyhow::Result<String> {
        let snapshot = self
            .snapshot(node)
            .with_context(|| format!("capturing layout snapshot of {node:?}"))?;
        serde_json::to_string_pretty(&snapshot).context("serializing layout snapshot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if a snapshot does not survive a JSON round trip or counts nodes wrongly.
    fn json_round_trip() {
        let snapshot = LayoutSnapshot {
            width: 100.0,
            height: 50.0,
            children: vec![LayoutSnapshot {
                left: 10.0,
                width: 20.0,
                height: 20.0,
                node_type: NodeType::Text,
                ..LayoutSnapshot::default()
            }],
            ..LayoutSnapshot::default()
        };
        assert_eq!(snapshot.node_count(), 2);
        let json = serde_json::to_string(&snapshot).unwrap_or_default();
        assert!(!json.contains("node_type\":\"default"));
        let parsed: Result<LayoutSnapshot, _> = serde_json::from_str(&json);
        assert_eq!(parsed.ok(), Some(snapshot));
    }
}
