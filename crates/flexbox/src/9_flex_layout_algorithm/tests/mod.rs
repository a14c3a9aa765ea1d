//! Tests for line collection and flexible length resolution.

use super::*;

mod line_breaking_tests;

/// Helper to create a flexible item with the given basis and factors.
#[inline]
pub fn flexible(basis: f32, grow: f32, shrink: f32) -> FlexItem {
    FlexItem {
        flex_grow: grow,
        flex_shrink: shrink,
        flexible: true,
        ..FlexItem::new(basis)
    }
}
