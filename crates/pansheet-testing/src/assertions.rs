//! Assertion helpers for robot tests.

/// Assert that a value is within an expected range. Useful for fuzzy
/// matching of interpolated heights.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{msg}: expected {expected} (±{tolerance}), got {actual} (diff: {diff})"
    );
}
