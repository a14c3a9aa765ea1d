//! Tests for alignment helpers.

use super::*;
use flexbox_style::{Align, Justify};

mod align_content_tests;

/// Assert two offsets agree within layout tolerance.
#[inline]
pub fn assert_close(got: f32, expected: f32) {
    assert!(
        (got - expected).abs() < 0.01,
        "got {got} expected {expected}"
    );
}
