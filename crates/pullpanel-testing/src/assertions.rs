//! Assertion helpers for transition tests.

/// Assert that a value is within `tolerance` of `expected`.
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

/// Assert that `values` never move against the direction from first to last.
pub fn assert_monotonic(values: &[f32], msg: &str) {
    let (Some(first), Some(last)) = (values.first(), values.last()) else {
        return;
    };
    let rising = last >= first;
    for pair in values.windows(2) {
        let ok = if rising {
            pair[1] >= pair[0]
        } else {
            pair[1] <= pair[0]
        };
        assert!(ok, "{}: {:?} is not monotonic at {:?}", msg, values, pair);
    }
}
