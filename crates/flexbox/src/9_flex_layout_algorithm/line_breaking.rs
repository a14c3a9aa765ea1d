//! Collecting flex items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::trace;

/// Child indices `[start, end)` forming one flex line.
///
/// Ranges cover every child index of the container, so out-of-flow children
/// sitting between in-flow ones belong to the line that was open when they
/// were reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.end == self.start
    }
}

/// Break children into flex lines.
///
/// `outer_sizes[i]` is the min/max-clamped flex base size plus main-axis
/// margins of child `i`, or `None` for children that do not take part in line
/// breaking (display none, absolutely positioned). A line closes when the next
/// item would overflow `available_main`, the container wraps, and the line
/// already holds an item. An undefined available size never breaks.
pub fn break_into_lines(
    available_main: Option<f32>,
    wrap: bool,
    outer_sizes: &[Option<f32>],
) -> Vec<LineRange> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut consumed = 0.0f32;
    let mut items_on_line = 0usize;
    for (index, outer) in outer_sizes.iter().enumerate() {
        let Some(outer) = *outer else {
            continue;
        };
        let overflows = available_main.is_some_and(|available| consumed + outer > available);
        if overflows && wrap && items_on_line > 0 {
            trace!(
                target: "flexbox::lines",
                "[FLEX-LINE] break at {index}: consumed={consumed:.3} next={outer:.3}"
            );
            lines.push(LineRange { start, end: index });
            start = index;
            consumed = 0.0;
            items_on_line = 0;
        }
        consumed += outer;
        items_on_line += 1;
    }
    if start < outer_sizes.len() {
        lines.push(LineRange {
            start,
            end: outer_sizes.len(),
        });
    }
    lines
}
