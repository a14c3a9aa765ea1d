//! Tests for breaking items into flex lines.

use super::*;

#[test]
/// # Panics
/// Panics if three 150-wide items in a 300-wide wrapping container do not form two lines.
fn wraps_when_next_item_overflows() {
    let sizes = [Some(150.0), Some(150.0), Some(150.0)];
    let lines = break_into_lines(Some(300.0), true, &sizes);
    assert_eq!(
        lines,
        vec![LineRange { start: 0, end: 2 }, LineRange { start: 2, end: 3 }]
    );
}

#[test]
/// # Panics
/// Panics if a non-wrapping container produces more than one line.
fn nowrap_keeps_one_line() {
    let sizes = [Some(150.0), Some(150.0), Some(150.0)];
    let lines = break_into_lines(Some(300.0), false, &sizes);
    assert_eq!(lines, vec![LineRange { start: 0, end: 3 }]);
}

#[test]
/// # Panics
/// Panics if an oversized first item is pushed onto its own empty line.
fn oversized_item_still_occupies_a_line() {
    let sizes = [Some(500.0), Some(10.0)];
    let lines = break_into_lines(Some(300.0), true, &sizes);
    assert_eq!(
        lines,
        vec![LineRange { start: 0, end: 1 }, LineRange { start: 1, end: 2 }]
    );
}

#[test]
/// # Panics
/// Panics if out-of-flow children trigger a break or are left outside every line.
fn out_of_flow_children_ride_along() {
    let sizes = [Some(200.0), None, Some(200.0), None];
    let lines = break_into_lines(Some(300.0), true, &sizes);
    assert_eq!(
        lines,
        vec![LineRange { start: 0, end: 2 }, LineRange { start: 2, end: 4 }]
    );
}

#[test]
/// # Panics
/// Panics if an undefined available size breaks lines.
fn undefined_available_size_never_breaks() {
    let sizes = [Some(1.0e6), Some(1.0e6)];
    let lines = break_into_lines(None, true, &sizes);
    assert_eq!(lines.len(), 1);
}
