//! Per-node payload stored in the arena.

use core::fmt;

use flexbox_style::{NodeType, Style};

use super::dirty::DirtyKind;
use crate::layout::LayoutState;
use crate::measure::{BaselineFunc, DirtiedFunc, Measure};

/// Everything the tree knows about one node.
pub(crate) struct NodeData {
    pub style: Style,
    pub layout: LayoutState,
    pub measure: Option<Box<dyn Measure>>,
    pub baseline: Option<BaselineFunc>,
    pub dirtied: Option<DirtiedFunc>,
    pub node_type: NodeType,
    pub dirty: DirtyKind,
    pub has_new_layout: bool,
    /// Flex line the node was placed on by its parent's last layout.
    pub line_index: usize,
}

impl NodeData {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            layout: LayoutState::default(),
            measure: None,
            baseline: None,
            dirtied: None,
            node_type: NodeType::Default,
            dirty: DirtyKind::NONE,
            has_new_layout: true,
            line_index: 0,
        }
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }
}

impl fmt::Debug for NodeData {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NodeData")
            .field("node_type", &self.node_type)
            .field("dirty", &self.dirty)
            .field("measured", &self.measure.is_some())
            .field("line_index", &self.line_index)
            .finish_non_exhaustive()
    }
}
