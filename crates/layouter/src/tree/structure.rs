//! Structural edits: inserting, removing and walking children.

use indextree::NodeId;
use log::debug;

use super::LayoutTree;
use super::dirty::DirtyKind;
use crate::error::StructuralError;
use crate::layout::LayoutState;

impl LayoutTree {
    /// Insert `child` under `parent` at `index`.
    ///
    /// The child must be detached: re-parenting fails with
    /// [`StructuralError::AlreadyHasParent`] instead of silently moving the
    /// node. Any failure leaves the tree untouched.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        index: usize,
    ) -> Result<(), StructuralError> {
        let parent_data = self.data(parent)?;
        if parent_data.measure.is_some() {
            return Err(StructuralError::HasMeasureFunc(parent));
        }
        self.ensure_node(child)?;
        if self.parent_of(child).is_some() {
            return Err(StructuralError::AlreadyHasParent(child));
        }
        if parent.ancestors(&self.arena).any(|ancestor| ancestor == child) {
            return Err(StructuralError::WouldCreateCycle { parent, child });
        }
        let len = parent.children(&self.arena).count();
        if index > len {
            return Err(StructuralError::IndexOutOfBounds { index, len });
        }
        let attached = match parent.children(&self.arena).nth(index) {
            Some(sibling) => sibling.checked_insert_before(child, &mut self.arena),
            None => parent.checked_append(child, &mut self.arena),
        };
        attached.map_err(|error| StructuralError::from_arena(error, parent, child))?;
        debug!(target: "layouter::tree", "[INSERT] {child:?} into {parent:?} at {index}");
        self.mark_dirty_and_propagate(parent, DirtyKind::STRUCTURE);
        Ok(())
    }

    /// Insert `child` after the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), StructuralError> {
        let len = self.child_count(parent)?;
        self.insert_child(parent, child, len)
    }

    /// Detach `child` from `parent`. The child keeps its subtree and becomes a
    /// root owned by the caller; its layout is reset.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), StructuralError> {
        self.ensure_node(parent)?;
        self.ensure_node(child)?;
        if self.parent_of(child) != Some(parent) {
            return Err(StructuralError::NotAChild { parent, child });
        }
        self.detach_child(child);
        self.mark_dirty_and_propagate(parent, DirtyKind::STRUCTURE);
        Ok(())
    }

    /// Detach and return the child at `index`.
    pub fn remove_child_at(
        &mut self,
        parent: NodeId,
        index: usize,
    ) -> Result<NodeId, StructuralError> {
        let child = self.child_at(parent, index)?;
        self.remove_child(parent, child)?;
        Ok(child)
    }

    /// Detach every child of `parent`, returning them in order.
    pub fn remove_all_children(&mut self, parent: NodeId) -> Result<Vec<NodeId>, StructuralError> {
        let children = self.children(parent)?;
        if children.is_empty() {
            return Ok(children);
        }
        for child in &children {
            self.detach_child(*child);
        }
        self.mark_dirty_and_propagate(parent, DirtyKind::STRUCTURE);
        Ok(children)
    }

    /// Detach `node` if attached, then destroy it and all of its descendants.
    pub fn remove_subtree(&mut self, node: NodeId) -> Result<(), StructuralError> {
        self.ensure_node(node)?;
        if let Some(parent) = self.parent_of(node) {
            self.remove_child(parent, node)?;
        }
        node.remove_subtree(&mut self.arena);
        debug!(target: "layouter::tree", "[REMOVE-SUBTREE] {node:?}");
        Ok(())
    }

    pub fn child_at(&self, parent: NodeId, index: usize) -> Result<NodeId, StructuralError> {
        self.ensure_node(parent)?;
        parent.children(&self.arena).nth(index).ok_or_else(|| {
            StructuralError::IndexOutOfBounds {
                index,
                len: parent.children(&self.arena).count(),
            }
        })
    }

    pub fn child_count(&self, parent: NodeId) -> Result<usize, StructuralError> {
        self.ensure_node(parent)?;
        Ok(parent.children(&self.arena).count())
    }

    pub fn children(&self, parent: NodeId) -> Result<Vec<NodeId>, StructuralError> {
        self.ensure_node(parent)?;
        Ok(parent.children(&self.arena).collect())
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, StructuralError> {
        self.ensure_node(node)?;
        Ok(self.parent_of(node))
    }

    fn detach_child(&mut self, child: NodeId) {
        child.detach(&mut self.arena);
        self.node_mut(child).layout = LayoutState::default();
        debug!(target: "layouter::tree", "[DETACH] {child:?}");
    }
}
