//! Aligning with `auto` margins.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#auto-margins>

/// Main-axis space each `auto` margin on a line absorbs. Negative free space
/// gives auto margins nothing.
#[inline]
pub fn auto_margin_share(free_space: f32, auto_margins: usize) -> f32 {
    if auto_margins == 0 {
        return 0.0;
    }
    free_space.max(0.0) / auto_margins as f32
}

/// Cross-axis offset produced by `auto` margins, or `None` when neither cross
/// margin is `auto` and regular alignment applies.
///
/// Both auto centers the item, a lone trailing auto pins it to the start and a
/// lone leading auto pushes it to the end. Overflow never produces a negative
/// offset.
#[inline]
pub fn cross_auto_margin_offset(
    remaining_cross: f32,
    leading_auto: bool,
    trailing_auto: bool,
) -> Option<f32> {
    match (leading_auto, trailing_auto) {
        (true, true) => Some((remaining_cross / 2.0).max(0.0)),
        (false, true) => Some(0.0),
        (true, false) => Some(remaining_cross.max(0.0)),
        (false, false) => None,
    }
}
