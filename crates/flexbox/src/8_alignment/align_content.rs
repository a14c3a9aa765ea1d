//! Packing flex lines: the `align-content` property.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use flexbox_style::Align;
use log::debug;

/// Offset of the first line and extra cross size handed to every line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AlignContentOffsets {
    pub leading: f32,
    pub per_line: f32,
}

/// Compute `align-content` offsets for `line_count` lines leaving
/// `free_space` unused along the cross axis.
///
/// `stretch` and the `space-*` keywords hand out space only when there is
/// some; `flex-end` and `center` shift the lines even when they overflow.
pub fn align_content_params(align: Align, free_space: f32, line_count: usize) -> AlignContentOffsets {
    let mut offsets = AlignContentOffsets::default();
    if line_count == 0 {
        return offsets;
    }
    let lines = line_count as f32;
    match align {
        Align::FlexEnd => offsets.leading = free_space,
        Align::Center => offsets.leading = free_space / 2.0,
        Align::Stretch => {
            if free_space > 0.0 {
                offsets.per_line = free_space / lines;
            }
        }
        Align::SpaceAround => {
            if free_space > 0.0 {
                offsets.leading = free_space / (2.0 * lines);
                if line_count > 1 {
                    offsets.per_line = free_space / lines;
                }
            } else {
                offsets.leading = free_space / 2.0;
            }
        }
        Align::SpaceBetween => {
            if free_space > 0.0 && line_count > 1 {
                offsets.per_line = free_space / (lines - 1.0);
            }
        }
        Align::Auto | Align::FlexStart | Align::Baseline => {}
    }
    debug!(
        target: "flexbox::align_content",
        "[ALIGN-CONTENT] mode={align} free={free_space:.3} lines={line_count} leading={:.3} per_line={:.3}",
        offsets.leading, offsets.per_line
    );
    offsets
}
