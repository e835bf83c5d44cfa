//! Testing helpers.

use assert_float_eq::*;

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that every mass of `actual` lies within `tolerance` of the mass of `expected` at the
/// same support value, across the union of both supports.
pub fn assert_masses_within(
    expected: &crate::dist::Distribution,
    actual: &crate::dist::Distribution,
    tolerance: f64,
) {
    let mut support: Vec<_> = expected
        .support()
        .iter()
        .chain(actual.support().iter())
        .copied()
        .collect();
    support.sort_unstable();
    support.dedup();
    for value in support {
        let (expected_mass, actual_mass) = (expected.mass(value), actual.mass(value));
        assert!(
            (expected_mass - actual_mass).abs() <= tolerance,
            "mass at {value}: expected {expected_mass} ± {tolerance}, got {actual_mass}"
        );
    }
}
