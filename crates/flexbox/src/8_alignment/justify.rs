//! Main-axis alignment: the `justify-content` property.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#justify-content-property>

use flexbox_style::Justify;
use log::debug;

/// Space before the first item and between adjacent items of a line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct JustifyOffsets {
    pub leading: f32,
    pub between: f32,
}

/// Compute `justify-content` offsets for a line of `item_count` in-flow items.
///
/// Negative free space is honored by `center`, `flex-end` and the
/// `space-around`/`space-evenly` leading offset, so overflowing lines spill
/// on both sides; `space-between` never inserts negative gaps.
pub fn justify_params(justify: Justify, free_space: f32, item_count: usize) -> JustifyOffsets {
    let count = item_count as f32;
    let offsets = match justify {
        Justify::FlexStart => JustifyOffsets::default(),
        Justify::Center => JustifyOffsets {
            leading: free_space / 2.0,
            between: 0.0,
        },
        Justify::FlexEnd => JustifyOffsets {
            leading: free_space,
            between: 0.0,
        },
        Justify::SpaceBetween => JustifyOffsets {
            leading: 0.0,
            between: if item_count > 1 {
                free_space.max(0.0) / (count - 1.0)
            } else {
                0.0
            },
        },
        Justify::SpaceEvenly => {
            let gap = free_space / (count + 1.0);
            JustifyOffsets {
                leading: gap,
                between: gap,
            }
        }
        Justify::SpaceAround => {
            if item_count == 0 {
                JustifyOffsets::default()
            } else {
                let gap = free_space / count;
                JustifyOffsets {
                    leading: gap / 2.0,
                    between: gap,
                }
            }
        }
    };
    debug!(
        target: "flexbox::justify",
        "[FLEX-JUSTIFY] mode={justify} free={free_space:.3} items={item_count} leading={:.3} between={:.3}",
        offsets.leading, offsets.between
    );
    offsets
}

/// Free space of a line in a container sized "at most" along the main axis.
///
/// Such a container shrinks to its content, so only the space needed to reach
/// its own min main size (`min_main`, already resolved) is left to justify.
pub fn at_most_free_space(free_space: f32, min_main: Option<f32>, available_main: f32) -> f32 {
    if free_space <= 0.0 {
        return free_space;
    }
    match min_main.filter(|min| *min >= 0.0) {
        Some(min) => (min - (available_main - free_space)).max(0.0),
        None => 0.0,
    }
}
