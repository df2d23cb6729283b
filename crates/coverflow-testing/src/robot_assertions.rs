//! Assertion utilities for robot tests.

use coverflow_ui_graphics::{Point, Rect};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that two points are approximately equal.
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that a rectangle spans exactly `left..right` horizontally.
pub fn assert_horizontal_span(rect: Rect, left: f32, right: f32, msg: &str) {
    assert_approx_eq(rect.left(), left, 0.001, &format!("{} - left", msg));
    assert_approx_eq(rect.right(), right, 0.001, &format!("{} - right", msg));
}
