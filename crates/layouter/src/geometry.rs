//! Geometry types read back from a laid-out tree.

use serde::Serialize;

/// A rectangle in layout units, origin top-left, y down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Resolved widths of the four physical box edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BoxEdges {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoxEdges {
    /// Build from a `[left, top, right, bottom]` array.
    #[inline]
    pub const fn from_array(values: [f32; 4]) -> Self {
        Self {
            left: values[0],
            top: values[1],
            right: values[2],
            bottom: values[3],
        }
    }

    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Computed layout of one node.
///
/// `x`/`y` of [`Self::frame`] are relative to the parent's border-box origin;
/// `width`/`height` are the border-box size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LayoutResult {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub margin: BoxEdges,
    pub border: BoxEdges,
    pub padding: BoxEdges,
    /// The node's content overflowed its main axis during the last layout.
    pub had_overflow: bool,
}

impl LayoutResult {
    /// Border box in the parent's coordinate space.
    #[inline]
    pub const fn frame(&self) -> LayoutRect {
        LayoutRect {
            x: self.left,
            y: self.top,
            width: self.width,
            height: self.height,
        }
    }

    /// Alias of [`Self::frame`].
    #[inline]
    pub const fn border_box(&self) -> LayoutRect {
        self.frame()
    }

    /// Padding box in the parent's coordinate space.
    pub fn padding_box(&self) -> LayoutRect {
        LayoutRect {
            x: self.left + self.border.left,
            y: self.top + self.border.top,
            width: (self.width - self.border.horizontal()).max(0.0),
            height: (self.height - self.border.vertical()).max(0.0),
        }
    }

    /// Content box in the parent's coordinate space.
    pub fn content_box(&self) -> LayoutRect {
        let padding = self.padding_box();
        LayoutRect {
            x: padding.x + self.padding.left,
            y: padding.y + self.padding.top,
            width: (padding.width - self.padding.horizontal()).max(0.0),
            height: (padding.height - self.padding.vertical()).max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if padding and content boxes are not inset by border then padding.
    fn boxes_nest() {
        let result = LayoutResult {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
            border: BoxEdges::from_array([1.0, 2.0, 3.0, 4.0]),
            padding: BoxEdges::from_array([5.0, 5.0, 5.0, 5.0]),
            ..LayoutResult::default()
        };
        let padding = result.padding_box();
        assert!((padding.x - 11.0).abs() < 0.01);
        assert!((padding.width - 96.0).abs() < 0.01);
        let content = result.content_box();
        assert!((content.y - 27.0).abs() < 0.01);
        assert!((content.height - 34.0).abs() < 0.01);
    }
}
