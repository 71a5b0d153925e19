//! Generic doubling across numeric types.

use rstest::rstest;
use twofold::double::instances::{times_two_f64, times_two_i32};
use twofold::times_two;

// =============================================================================
// Integers
// =============================================================================

#[rstest]
#[case(0, 0)]
#[case(10, 20)]
#[case(-21, -42)]
#[case(i32::MAX / 2, i32::MAX - 1)]
fn test_integer_doubling(#[case] input: i32, #[case] expected: i32) {
    assert_eq!(times_two(input), expected);
    assert_eq!(times_two::<i32>(input), expected);
    assert_eq!(times_two_i32(input), expected);
}

#[test]
fn test_other_integer_widths() {
    assert_eq!(times_two(7_u8), 14);
    assert_eq!(times_two(-7_i64), -14);
    assert_eq!(times_two(1_u128 << 100), 1_u128 << 101);
    assert_eq!(times_two(3_usize), 6);
}

// =============================================================================
// Floats
// =============================================================================

#[rstest]
#[case(10.5, 21.0)]
#[case(-0.25, -0.5)]
#[case(1e300, 2e300)]
fn test_float_doubling(#[case] input: f64, #[case] expected: f64) {
    assert_eq!(times_two(input), expected);
    assert_eq!(times_two_f64(input), expected);
}

#[test]
fn test_float_overflow_is_infinite() {
    assert_eq!(times_two(f64::MAX), f64::INFINITY);
    assert!(times_two(f64::NAN).is_nan());
}

#[test]
fn test_annotation_converts_argument() {
    assert_eq!(times_two::<f64>(f64::from(10_i32)), 20.0);
    assert_eq!(times_two::<f32>(f32::from(3_u8)), 6.0);
}

#[test]
fn test_instances_are_plain_fn_pointers() {
    let table: [(fn(i32) -> i32, i32); 2] = [(times_two_i32, 5), (times_two_i32, -5)];
    let doubled: Vec<i32> = table.iter().map(|(f, x)| f(*x)).collect();
    assert_eq!(doubled, [10, -10]);
}
