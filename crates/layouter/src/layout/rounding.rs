//! Snapping computed frames to the device pixel grid.

use flexbox::{floats_equal, round_value_to_pixel_grid};
use flexbox_style::{Edge, NodeType};
use indextree::NodeId;

use crate::geometry::LayoutRect;
use crate::tree::LayoutTree;

/// Whether `size`, in device pixels, falls between two grid lines.
#[inline]
fn is_fractional(size: f32, scale: f32) -> bool {
    let remainder = (size * scale) % 1.0;
    !floats_equal(remainder, 0.0) && !floats_equal(remainder, 1.0)
}

impl LayoutTree {
    /// Write every node's rounded frame, walking down from `node` whose
    /// parent's border-box origin sits at `parent_origin` before rounding
    /// and at `parent_snapped` after.
    ///
    /// Edges are snapped in absolute coordinates so that adjacent siblings
    /// never open or overlap by a pixel; offsets and sizes are differences
    /// of snapped edges. Text nodes round their far edge outwards so content
    /// is never clipped.
    pub(super) fn round_to_pixel_grid(&mut self, node: NodeId, parent_origin: [f32; 2], parent_snapped: [f32; 2]) {
        let scale = self.config.scale();
        let data = self.node_mut(node);
        let layout = &mut data.layout;
        let left = layout.position[Edge::Left.index()];
        let top = layout.position[Edge::Top.index()];
        let [width, height] = layout.dimensions;
        let node_left = parent_origin[0] + left;
        let node_top = parent_origin[1] + top;

        let snapped_origin = if scale == 0.0 {
            layout.rounded = LayoutRect {
                x: left,
                y: top,
                width,
                height,
            };
            [node_left, node_top]
        } else {
            let text = data.node_type == NodeType::Text;
            let snap = |value: f32, ceil: bool, floor: bool| round_value_to_pixel_grid(value, scale, ceil, floor);
            let fractional_width = is_fractional(width, scale);
            let fractional_height = is_fractional(height, scale);
            let snapped_left = snap(node_left, false, text);
            let snapped_top = snap(node_top, false, text);
            layout.rounded = LayoutRect {
                x: snapped_left - parent_snapped[0],
                y: snapped_top - parent_snapped[1],
                width: snap(node_left + width, text && fractional_width, text && !fractional_width)
                    - snapped_left,
                height: snap(node_top + height, text && fractional_height, text && !fractional_height)
                    - snapped_top,
            };
            [snapped_left, snapped_top]
        };

        for child in self.child_ids(node) {
            self.round_to_pixel_grid(child, [node_left, node_top], snapped_origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if whole device-pixel sizes are reported as fractional.
    fn fractional_sizes() {
        assert!(!is_fractional(10.0, 1.0));
        assert!(is_fractional(10.5, 1.0));
        assert!(!is_fractional(10.5, 2.0));
        assert!(is_fractional(0.25, 2.0));
    }
}
