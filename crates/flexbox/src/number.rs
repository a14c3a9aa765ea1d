//! Float helpers shared by the layout passes. Undefined lengths travel as NaN.

/// Tolerance used for every layout-size comparison.
const EPSILON: f32 = 0.0001;

/// Compare two layout values; two undefined (NaN) values compare equal.
#[inline]
pub fn floats_equal(left: f32, right: f32) -> bool {
    floats_equal_with_precision(left, right, EPSILON)
}

#[inline]
pub fn floats_equal_with_precision(left: f32, right: f32, precision: f32) -> bool {
    if left.is_nan() || right.is_nan() {
        return left.is_nan() && right.is_nan();
    }
    (left - right).abs() < precision
}

/// Snap `value` to the grid of `1 / scale` units.
///
/// Values already within a hundredth of a device pixel of the grid snap to it;
/// otherwise `force_ceil` / `force_floor` pick the direction and plain values
/// round half up. The fractional part is taken against `floor`, so negative
/// coordinates snap the same way as positive ones.
pub fn round_value_to_pixel_grid(value: f32, scale: f32, force_ceil: bool, force_floor: bool) -> f32 {
    if scale == 0.0 || value.is_nan() {
        return value;
    }
    let tolerance = (0.01 * scale).max(EPSILON);
    let scaled = value * scale;
    let fraction = scaled - scaled.floor();
    let whole = scaled - fraction;
    let snapped = if floats_equal_with_precision(fraction, 0.0, tolerance) {
        whole
    } else if floats_equal_with_precision(fraction, 1.0, tolerance) || force_ceil {
        whole + 1.0
    } else if force_floor {
        whole
    } else if fraction > 0.5 || floats_equal_with_precision(fraction, 0.5, tolerance) {
        whole + 1.0
    } else {
        whole
    };
    snapped / scale
}
