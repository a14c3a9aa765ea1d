//! Cross-axis alignment: `align-items` and `align-self`.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>

use flexbox_style::Align;

/// Offset of an item within its line given the cross space it leaves unused.
///
/// `stretch` items that were not stretched stay at the start. Every keyword
/// other than `flex-start`, `stretch` and `center` packs to the end; baseline
/// items are placed later, once the line's baseline is known.
#[inline]
pub fn cross_offset(align: Align, remaining_cross: f32) -> f32 {
    match align {
        Align::FlexStart | Align::Stretch => 0.0,
        Align::Center => remaining_cross / 2.0,
        Align::Auto
        | Align::FlexEnd
        | Align::Baseline
        | Align::SpaceBetween
        | Align::SpaceAround => remaining_cross,
    }
}

/// Cross-axis metrics of one item, as placed inside a multi-line container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CrossItem {
    /// Measured cross size, without margins.
    pub size: f32,
    pub leading_margin: f32,
    pub trailing_margin: f32,
    /// Distance from the item's top edge to its baseline.
    pub baseline: f32,
    /// Relative `top` offset of the item.
    pub leading_position: f32,
}

/// One flex line after `align-content` sized it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineCross {
    /// Cross offset of the line's start edge.
    pub lead: f32,
    pub height: f32,
    pub max_ascent: f32,
}

/// Cross position of an item inside its line, or `None` when the keyword
/// leaves the item where the single-line pass put it.
pub fn line_cross_position(align: Align, item: CrossItem, line: LineCross) -> Option<f32> {
    match align {
        Align::FlexStart | Align::Stretch => Some(line.lead + item.leading_margin),
        Align::FlexEnd => Some(line.lead + line.height - item.trailing_margin - item.size),
        Align::Center => Some(line.lead + (line.height - item.size) / 2.0),
        Align::Baseline => {
            Some(line.lead + line.max_ascent - item.baseline + item.leading_position)
        }
        Align::Auto | Align::SpaceBetween | Align::SpaceAround => None,
    }
}
