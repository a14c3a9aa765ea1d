//! Dirty tracking: why a node needs layout, and propagation to ancestors.

use indextree::NodeId;
use log::trace;
use serde::Serialize;

use super::LayoutTree;
use crate::error::StructuralError;

/// Kinds of dirtiness; multiple flags can be combined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DirtyKind(u32);

impl DirtyKind {
    /// Clean.
    pub const NONE: Self = Self(0);
    /// Children were inserted or removed.
    pub const STRUCTURE: Self = Self(1 << 0);
    /// The node's own style changed.
    pub const STYLE: Self = Self(1 << 1);
    /// Some descendant became dirty.
    pub const DESCENDANT: Self = Self(1 << 2);
    /// The measured content changed.
    pub const MEASURE: Self = Self(1 << 3);
    /// Forced relayout of a whole subtree or after a configuration change.
    pub const FORCED: Self = Self(1 << 4);

    /// Combine two dirty kinds.
    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if all flags in `other` are present.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn is_dirty(self) -> bool {
        self.0 != 0
    }
}

impl LayoutTree {
    /// Mark `node` dirty with `kind` and walk up until an already dirty ancestor.
    ///
    /// Every clean-to-dirty transition drops the memoized flex basis and fires
    /// the node's dirtied callback.
    pub(crate) fn mark_dirty_and_propagate(&mut self, node: NodeId, kind: DirtyKind) {
        let mut current = Some(node);
        let mut flags = kind;
        while let Some(id) = current {
            let Some(entry) = self.arena.get_mut(id) else {
                return;
            };
            let data = entry.get_mut();
            if data.is_dirty() {
                data.dirty = data.dirty.or(flags);
                return;
            }
            data.dirty = flags;
            data.layout.invalidate_flex_basis();
            if let Some(dirtied) = data.dirtied.as_ref() {
                dirtied(id);
            }
            trace!(target: "layouter::tree", "[DIRTY] {id:?} flags={flags:?}");
            current = entry.parent();
            flags = DirtyKind::DESCENDANT;
        }
    }

    /// Mark a measured leaf dirty so its measure function runs again.
    pub fn mark_dirty(&mut self, node: NodeId) -> Result<(), StructuralError> {
        if self.data(node)?.measure.is_none() {
            return Err(StructuralError::NotMeasured(node));
        }
        self.mark_dirty_and_propagate(node, DirtyKind::MEASURE);
        Ok(())
    }

    /// Force `node`, its ancestors and its whole subtree to lay out again.
    pub fn mark_dirty_and_propagate_to_descendants(
        &mut self,
        node: NodeId,
    ) -> Result<(), StructuralError> {
        self.ensure_node(node)?;
        self.mark_dirty_and_propagate(node, DirtyKind::FORCED);
        let subtree: Vec<NodeId> = node.descendants(&self.arena).collect();
        for id in subtree {
            let data = self.arena[id].get_mut();
            data.dirty = data.dirty.or(DirtyKind::FORCED);
            data.layout.invalidate_flex_basis();
        }
        Ok(())
    }

    pub fn is_dirty(&self, node: NodeId) -> Result<bool, StructuralError> {
        Ok(self.data(node)?.is_dirty())
    }

    /// Why `node` is dirty; [`DirtyKind::NONE`] when clean.
    pub fn dirty_kind_of(&self, node: NodeId) -> Result<DirtyKind, StructuralError> {
        Ok(self.data(node)?.dirty)
    }
}
