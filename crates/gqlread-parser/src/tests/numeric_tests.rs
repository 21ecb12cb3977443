//! Tests for the numeric literal engine: digit-by-digit integer
//! accumulation with per-step overflow checking, the defer-to-float
//! failure, and the standalone float parser.

use crate::numeric;
use crate::numeric::IntParser;
use crate::ParseError;
use crate::SourceCursor;

fn parse_int<T: crate::numeric::FixedWidthInt>(source: &str) -> Result<T, ParseError> {
    IntParser::new().parse::<T>(&mut SourceCursor::new(source))
}

// =============================================================================
// Integers
// =============================================================================

#[test]
fn int_basic() {
    assert_eq!(parse_int::<i64>("123").unwrap(), 123);
    assert_eq!(parse_int::<i64>("0").unwrap(), 0);
}

#[test]
fn int_signed() {
    assert_eq!(parse_int::<i64>("-456").unwrap(), -456);
    assert_eq!(parse_int::<i64>("+789").unwrap(), 789);
}

/// The extremes of the target width parse exactly; negative accumulation
/// reaches `MIN`, which has no positive counterpart.
#[test]
fn int_target_width_extremes() {
    assert_eq!(parse_int::<i64>("9223372036854775807").unwrap(), i64::MAX);
    assert_eq!(parse_int::<i64>("-9223372036854775808").unwrap(), i64::MIN);
    assert_eq!(parse_int::<i32>("2147483647").unwrap(), i32::MAX);
    assert_eq!(parse_int::<i32>("-2147483648").unwrap(), i32::MIN);
}

/// One past the extremes overflows; the parse fails rather than wrapping.
#[test]
fn int_overflow_fails() {
    for source in ["9223372036854775808", "-9223372036854775809", "99999999999999999999"] {
        match parse_int::<i64>(source) {
            Err(ParseError::Failed { label, .. }) => {
                assert!(label.contains("overflow"), "unexpected label: {label}");
            }
            other => panic!("Expected overflow for `{source}`, got: {other:?}"),
        }
    }
}

/// Overflow is checked against the target width, not a wider
/// intermediate: a value fine for `i64` still overflows `i32`.
#[test]
fn int_overflow_is_width_specific() {
    assert_eq!(parse_int::<i64>("2147483648").unwrap(), 2_147_483_648);
    assert!(parse_int::<i32>("2147483648").is_err());
}

#[test]
fn int_requires_digits() {
    assert!(parse_int::<i64>("").is_err());
    assert!(parse_int::<i64>("-").is_err());
    assert!(parse_int::<i64>("abc").is_err());
}

/// A non-default radix reads its extended digit set.
#[test]
fn int_radix_16() {
    let mut cursor = SourceCursor::new("ff");
    assert_eq!(IntParser::with_radix(16).parse::<i64>(&mut cursor).unwrap(), 255);
}

/// A decimal point after the digits defers to the float parser with a
/// distinguishable failure instead of returning the integer prefix.
#[test]
fn int_defers_on_decimal_point() {
    match parse_int::<i64>("1.5") {
        Err(ParseError::ExpectedInput { expected, .. }) => {
            assert!(expected.contains("float"), "unexpected message: {expected}");
        }
        other => panic!("Expected defer-to-float, got: {other:?}"),
    }
}

/// An exponent marker without a decimal point also defers, so `1e10`
/// reaches the float parser whole.
#[test]
fn int_defers_on_exponent() {
    assert!(parse_int::<i64>("1e10").is_err());
    assert!(parse_int::<i64>("1E10").is_err());
}

/// A non-numeric boundary character simply ends the literal.
#[test]
fn int_stops_at_boundary() {
    let mut cursor = SourceCursor::new("42)");
    assert_eq!(IntParser::new().parse::<i64>(&mut cursor).unwrap(), 42);
    assert_eq!(cursor.rest(), ")");
}

// =============================================================================
// Floats
// =============================================================================

fn parse_float(source: &str) -> Result<f64, ParseError> {
    numeric::parse_float(&mut SourceCursor::new(source))
}

#[test]
fn float_basic() {
    assert_eq!(parse_float("1.5").unwrap(), 1.5);
    assert_eq!(parse_float("-2.25").unwrap(), -2.25);
}

#[test]
fn float_exponent_forms() {
    assert_eq!(parse_float("1e10").unwrap(), 1e10);
    assert_eq!(parse_float("2.5e-3").unwrap(), 2.5e-3);
    assert_eq!(parse_float("6.02E+23").unwrap(), 6.02e23);
}

/// A bare integer is not a float; the int alternative owns it.
#[test]
fn float_rejects_integer_shape() {
    match parse_float("42") {
        Err(ParseError::ExpectedInput { expected, .. }) => {
            assert!(expected.contains("integer"), "unexpected message: {expected}");
        }
        other => panic!("Expected rejection, got: {other:?}"),
    }
}

#[test]
fn float_requires_exponent_digits() {
    assert!(parse_float("1e").is_err());
    assert!(parse_float("1e+").is_err());
}

/// The lenient variant accepts an integer-shaped literal, for the
/// overflowed-integer fallback in the value grammar.
#[test]
fn overflowing_float_accepts_integer_shape() {
    let mut cursor = SourceCursor::new("99999999999999999999");
    let value = numeric::parse_overflowing_float(&mut cursor).unwrap();
    assert_eq!(value, 1e20);
}
