//! Arena-backed node tree: creation, styles, capabilities and read-back.

mod dirty;
mod node;
mod structure;

use flexbox_style::{NodeType, Style};
use indextree::{Arena, NodeId};
use log::debug;
use smallvec::SmallVec;

pub use dirty::DirtyKind;
pub(crate) use node::NodeData;

use crate::config::LayoutConfig;
use crate::error::StructuralError;
use crate::geometry::{BoxEdges, LayoutResult};
use crate::layout::LayoutStats;
use crate::measure::Measure;

/// Child id lists gathered during layout; most containers are small.
pub(crate) type ChildIds = SmallVec<NodeId, 8>;

/// A forest of layout nodes sharing one configuration.
///
/// Nodes are addressed by [`NodeId`]. A node without a parent is a root that
/// can be laid out on its own; detaching a child turns it into such a root.
/// Independent trees share no state, so separate `LayoutTree`s can be laid out
/// on separate threads.
pub struct LayoutTree {
    pub(crate) arena: Arena<NodeData>,
    pub(crate) config: LayoutConfig,
    /// Incremented on every layout pass; stamps caches and flex bases.
    pub(crate) generation: u32,
    pub(crate) stats: LayoutStats,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            arena: Arena::new(),
            config,
            generation: 0,
            stats: LayoutStats::default(),
        }
    }

    #[inline]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration; every live node is dirtied when it changes.
    pub fn set_config(&mut self, config: LayoutConfig) {
        if self.config == config {
            return;
        }
        self.config = config;
        for entry in self.arena.iter_mut() {
            if entry.is_removed() {
                continue;
            }
            let data = entry.get_mut();
            data.dirty = data.dirty.or(DirtyKind::FORCED);
            data.layout.invalidate_flex_basis();
        }
        debug!(target: "layouter::tree", "[CONFIG] {config:?}");
    }

    /// Counters of the most recent layout pass.
    #[inline]
    pub const fn stats(&self) -> LayoutStats {
        self.stats
    }

    /// Whether `node` is a live node of this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        self.arena.get(node).is_some_and(|entry| !entry.is_removed())
    }

    pub fn new_node(&mut self) -> NodeId {
        self.new_node_with_style(Style::default())
    }

    pub fn new_node_with_style(&mut self, style: Style) -> NodeId {
        let node = self.arena.new_node(NodeData::new(style));
        debug!(target: "layouter::tree", "[NEW] {node:?}");
        node
    }

    /// Create a measured text leaf.
    pub fn new_text_node<M>(&mut self, style: Style, measure: M) -> NodeId
    where
        M: Measure + 'static,
    {
        let node = self.new_node_with_style(style);
        let data = self.arena[node].get_mut();
        data.measure = Some(Box::new(measure));
        data.node_type = NodeType::Text;
        node
    }

    /// Checked access to a live node.
    pub(crate) fn data(&self, node: NodeId) -> Result<&NodeData, StructuralError> {
        match self.arena.get(node) {
            Some(entry) if !entry.is_removed() => Ok(entry.get()),
            _ => Err(StructuralError::UnknownNode(node)),
        }
    }

    pub(crate) fn data_mut(&mut self, node: NodeId) -> Result<&mut NodeData, StructuralError> {
        match self.arena.get_mut(node) {
            Some(entry) if !entry.is_removed() => Ok(entry.get_mut()),
            _ => Err(StructuralError::UnknownNode(node)),
        }
    }

    #[inline]
    pub(crate) fn ensure_node(&self, node: NodeId) -> Result<(), StructuralError> {
        self.data(node).map(|_| ())
    }

    /// Unchecked access for ids reached by walking the tree.
    #[inline]
    pub(crate) fn node(&self, node: NodeId) -> &NodeData {
        self.arena[node].get()
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, node: NodeId) -> &mut NodeData {
        self.arena[node].get_mut()
    }

    #[inline]
    pub(crate) fn child_ids(&self, node: NodeId) -> ChildIds {
        node.children(&self.arena).collect()
    }

    #[inline]
    pub(crate) fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.arena[node].parent()
    }

    pub fn style(&self, node: NodeId) -> Result<&Style, StructuralError> {
        Ok(&self.data(node)?.style)
    }

    /// Replace the style; the node and its ancestors are dirtied only if it changed.
    pub fn set_style(&mut self, node: NodeId, style: Style) -> Result<(), StructuralError> {
        let data = self.data_mut(node)?;
        if data.style == style {
            return Ok(());
        }
        data.style = style;
        self.mark_dirty_and_propagate(node, DirtyKind::STYLE);
        Ok(())
    }

    /// Edit the style in place.
    pub fn update_style<F>(&mut self, node: NodeId, edit: F) -> Result<(), StructuralError>
    where
        F: FnOnce(&mut Style),
    {
        let mut style = self.data(node)?.style.clone();
        edit(&mut style);
        self.set_style(node, style)
    }

    /// Copy `source`'s style onto `target`.
    pub fn copy_style(&mut self, target: NodeId, source: NodeId) -> Result<(), StructuralError> {
        let style = self.data(source)?.style.clone();
        self.set_style(target, style)
    }

    /// Attach a measure function; the node becomes a text leaf.
    pub fn set_measure<M>(&mut self, node: NodeId, measure: M) -> Result<(), StructuralError>
    where
        M: Measure + 'static,
    {
        self.ensure_node(node)?;
        if self.arena[node].first_child().is_some() {
            return Err(StructuralError::HasChildren(node));
        }
        let data = self.node_mut(node);
        data.measure = Some(Box::new(measure));
        data.node_type = NodeType::Text;
        self.mark_dirty_and_propagate(node, DirtyKind::MEASURE);
        Ok(())
    }

    /// Drop the measure function; the node goes back to a default node.
    pub fn clear_measure(&mut self, node: NodeId) -> Result<(), StructuralError> {
        let data = self.data_mut(node)?;
        if data.measure.take().is_none() {
            return Ok(());
        }
        data.node_type = NodeType::Default;
        self.mark_dirty_and_propagate(node, DirtyKind::MEASURE);
        Ok(())
    }

    pub fn has_measure(&self, node: NodeId) -> Result<bool, StructuralError> {
        Ok(self.data(node)?.measure.is_some())
    }

    /// Override how the node reports its baseline: `(node, width, height) -> offset`.
    pub fn set_baseline_func<F>(&mut self, node: NodeId, baseline: F) -> Result<(), StructuralError>
    where
        F: Fn(NodeId, f32, f32) -> f32 + Send + 'static,
    {
        self.data_mut(node)?.baseline = Some(Box::new(baseline));
        self.mark_dirty_and_propagate(node, DirtyKind::STYLE);
        Ok(())
    }

    pub fn clear_baseline_func(&mut self, node: NodeId) -> Result<(), StructuralError> {
        if self.data_mut(node)?.baseline.take().is_some() {
            self.mark_dirty_and_propagate(node, DirtyKind::STYLE);
        }
        Ok(())
    }

    /// Observe clean-to-dirty transitions of `node`.
    pub fn set_dirtied_func<F>(&mut self, node: NodeId, dirtied: F) -> Result<(), StructuralError>
    where
        F: Fn(NodeId) + Send + 'static,
    {
        self.data_mut(node)?.dirtied = Some(Box::new(dirtied));
        Ok(())
    }

    pub fn clear_dirtied_func(&mut self, node: NodeId) -> Result<(), StructuralError> {
        self.data_mut(node)?.dirtied = None;
        Ok(())
    }

    pub fn node_type(&self, node: NodeId) -> Result<NodeType, StructuralError> {
        Ok(self.data(node)?.node_type)
    }

    /// Text nodes round their size outwards on the pixel grid.
    pub fn set_node_type(&mut self, node: NodeId, node_type: NodeType) -> Result<(), StructuralError> {
        let data = self.data_mut(node)?;
        if data.node_type != node_type {
            data.node_type = node_type;
            self.mark_dirty_and_propagate(node, DirtyKind::STYLE);
        }
        Ok(())
    }

    /// Whether a layout pass produced a new result for `node` since the flag was cleared.
    pub fn has_new_layout(&self, node: NodeId) -> Result<bool, StructuralError> {
        Ok(self.data(node)?.has_new_layout)
    }

    pub fn set_has_new_layout(&mut self, node: NodeId, value: bool) -> Result<(), StructuralError> {
        self.data_mut(node)?.has_new_layout = value;
        Ok(())
    }

    /// Return a detached, childless node to its freshly created state.
    pub fn reset(&mut self, node: NodeId) -> Result<(), StructuralError> {
        self.ensure_node(node)?;
        if self.arena[node].first_child().is_some() {
            return Err(StructuralError::HasChildren(node));
        }
        if self.parent_of(node).is_some() {
            return Err(StructuralError::AlreadyHasParent(node));
        }
        *self.node_mut(node) = NodeData::new(Style::default());
        debug!(target: "layouter::tree", "[RESET] {node:?}");
        Ok(())
    }

    /// Computed layout of `node`, snapped to the pixel grid when rounding is on.
    pub fn layout(&self, node: NodeId) -> Result<LayoutResult, StructuralError> {
        let state = &self.data(node)?.layout;
        Ok(LayoutResult {
            left: state.rounded.x,
            top: state.rounded.y,
            width: state.rounded.width,
            height: state.rounded.height,
            margin: BoxEdges::from_array(state.margin),
            border: BoxEdges::from_array(state.border),
            padding: BoxEdges::from_array(state.padding),
            had_overflow: state.had_overflow,
        })
    }
}
