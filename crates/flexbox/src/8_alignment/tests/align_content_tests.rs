//! Tests for `align-content` line packing.

use super::*;

#[test]
/// # Panics
/// Panics if stretch does not split positive free space across lines.
fn stretch_grows_lines() {
    let offsets = align_content_params(Align::Stretch, 90.0, 3);
    assert_close(offsets.leading, 0.0);
    assert_close(offsets.per_line, 30.0);
    assert_close(align_content_params(Align::Stretch, -90.0, 3).per_line, 0.0);
}

#[test]
/// # Panics
/// Panics if the space-* keywords distribute free space incorrectly.
fn space_keywords() {
    let between = align_content_params(Align::SpaceBetween, 90.0, 4);
    assert_close(between.leading, 0.0);
    assert_close(between.per_line, 30.0);

    let around = align_content_params(Align::SpaceAround, 80.0, 2);
    assert_close(around.leading, 20.0);
    assert_close(around.per_line, 40.0);

    let single = align_content_params(Align::SpaceAround, 80.0, 1);
    assert_close(single.leading, 40.0);
    assert_close(single.per_line, 0.0);
}

#[test]
/// # Panics
/// Panics if end/center packing ignores overflow.
fn end_and_center_shift_lines() {
    assert_close(align_content_params(Align::FlexEnd, -20.0, 2).leading, -20.0);
    assert_close(align_content_params(Align::Center, 40.0, 2).leading, 20.0);
    assert_eq!(
        align_content_params(Align::FlexStart, 40.0, 0),
        AlignContentOffsets::default()
    );
}
