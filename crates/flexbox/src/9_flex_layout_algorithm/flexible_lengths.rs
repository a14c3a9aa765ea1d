//! Resolving flexible lengths within one flex line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use log::debug;

use crate::number::floats_equal;

/// Main-axis inputs of one in-flow flex item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexItem {
    /// Flex base size, before min/max clamping.
    pub flex_basis: f32,
    /// Resolved `flex-grow`.
    pub flex_grow: f32,
    /// Resolved `flex-shrink`.
    pub flex_shrink: f32,
    pub min_main: Option<f32>,
    pub max_main: Option<f32>,
    /// Padding plus border along the main axis; floors every used size.
    pub padding_border_main: f32,
    pub margin_main: f32,
    /// Whether the item's factors count towards the line totals.
    pub flexible: bool,
}

impl FlexItem {
    /// Rigid item with the given base size and no constraints.
    pub const fn new(flex_basis: f32) -> Self {
        Self {
            flex_basis,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            min_main: None,
            max_main: None,
            padding_border_main: 0.0,
            margin_main: 0.0,
            flexible: false,
        }
    }

    /// Clamp into `[min, max]`, max first so that min wins a conflict.
    /// Negative constraints are ignored.
    pub fn clamp_min_max(&self, size: f32) -> f32 {
        let mut bounded = size;
        if let Some(max) = self.max_main.filter(|max| *max >= 0.0)
            && bounded > max
        {
            bounded = max;
        }
        if let Some(min) = self.min_main.filter(|min| *min >= 0.0)
            && bounded < min
        {
            bounded = min;
        }
        bounded
    }

    /// [`Self::clamp_min_max`] floored at the item's padding and border.
    #[inline]
    pub fn bound(&self, size: f32) -> f32 {
        self.clamp_min_max(size).max(self.padding_border_main)
    }

    /// Hypothetical main size: the base size clamped by min/max.
    #[inline]
    pub fn hypothetical_main(&self) -> f32 {
        self.clamp_min_max(self.flex_basis)
    }

    #[inline]
    pub fn outer_hypothetical_main(&self) -> f32 {
        self.hypothetical_main() + self.margin_main
    }

    #[inline]
    fn grow_factor(&self) -> f32 {
        if self.flexible { self.flex_grow.max(0.0) } else { 0.0 }
    }

    #[inline]
    fn scaled_shrink(&self) -> f32 {
        if self.flexible {
            (self.flex_shrink * self.hypothetical_main()).max(0.0)
        } else {
            0.0
        }
    }
}

/// Per-line sums feeding free-space distribution.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineTotals {
    /// Sum of outer hypothetical main sizes.
    pub consumed: f32,
    /// Sum of grow factors of flexible items; a sum in `(0, 1)` counts as 1.
    pub total_grow: f32,
    /// Sum of shrink factors scaled by base size; a sum in `(0, 1)` counts as 1.
    pub total_scaled_shrink: f32,
}

impl LineTotals {
    pub fn from_items(items: &[FlexItem]) -> Self {
        let mut totals = Self::default();
        for item in items {
            totals.consumed += item.outer_hypothetical_main();
            if item.flexible {
                totals.total_grow += item.grow_factor();
                totals.total_scaled_shrink += item.flex_shrink.max(0.0) * item.flex_basis;
            }
        }
        if totals.total_grow > 0.0 && totals.total_grow < 1.0 {
            totals.total_grow = 1.0;
        }
        if totals.total_scaled_shrink > 0.0 && totals.total_scaled_shrink < 1.0 {
            totals.total_scaled_shrink = 1.0;
        }
        totals
    }
}

/// Used main sizes of a line's items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedLine {
    /// Border-box main size per item, in input order.
    pub main_sizes: Vec<f32>,
    /// Free space left after distribution; negative when the line overflows.
    pub remaining_free_space: f32,
}

/// Distribute `free_space` among `items`.
///
/// Positive free space grows items by their grow factor, negative free space
/// shrinks them by shrink factor times base size. Items whose share would cross
/// a min/max constraint are frozen at that constraint in a first pass and the
/// space they absorbed is re-offered to the rest in a second pass.
pub fn resolve_flexible_lengths(items: &[FlexItem], free_space: f32) -> ResolvedLine {
    let totals = LineTotals::from_items(items);
    let mut total_grow = totals.total_grow;
    let mut total_shrink = totals.total_scaled_shrink;
    let growing = free_space > 0.0;
    let shrinking = free_space < 0.0;

    // First pass: freeze items whose flexible size violates a constraint.
    let mut frozen: Vec<Option<f32>> = vec![None; items.len()];
    let mut delta_free_space = 0.0f32;
    for (slot, item) in frozen.iter_mut().zip(items) {
        let basis = item.hypothetical_main();
        if shrinking && total_shrink != 0.0 {
            let factor = item.scaled_shrink();
            if factor != 0.0 {
                let base = basis + free_space / total_shrink * factor;
                let bounded = item.bound(base);
                if !floats_equal(base, bounded) {
                    delta_free_space += bounded - basis;
                    total_shrink -= factor;
                    *slot = Some(bounded);
                }
            }
        } else if growing && total_grow != 0.0 {
            let factor = item.grow_factor();
            if factor != 0.0 {
                let base = basis + free_space / total_grow * factor;
                let bounded = item.bound(base);
                if !floats_equal(base, bounded) {
                    delta_free_space += bounded - basis;
                    total_grow -= factor;
                    *slot = Some(bounded);
                }
            }
        }
    }
    let remaining_after_freeze = free_space - delta_free_space;

    // Second pass: share what is left among unfrozen items.
    let mut distributed = 0.0f32;
    let main_sizes: Vec<f32> = items
        .iter()
        .zip(&frozen)
        .map(|(item, frozen_size)| {
            let basis = item.hypothetical_main();
            let size = if let Some(size) = *frozen_size {
                size
            } else if remaining_after_freeze < 0.0 {
                let factor = item.scaled_shrink();
                if factor == 0.0 {
                    basis
                } else if total_shrink == 0.0 {
                    item.bound(basis - factor)
                } else {
                    item.bound(basis + remaining_after_freeze / total_shrink * factor)
                }
            } else if remaining_after_freeze > 0.0 && total_grow > 0.0 {
                let factor = item.grow_factor();
                if factor == 0.0 {
                    basis
                } else {
                    item.bound(basis + remaining_after_freeze / total_grow * factor)
                }
            } else {
                basis
            };
            distributed += size - basis;
            size
        })
        .collect();

    let remaining_free_space = free_space - distributed;
    debug!(
        target: "flexbox::flexible_lengths",
        "[FLEX-RESOLVE] items={} free={free_space:.3} frozen_delta={delta_free_space:.3} remaining={remaining_free_space:.3}",
        items.len()
    );
    ResolvedLine {
        main_sizes,
        remaining_free_space,
    }
}
