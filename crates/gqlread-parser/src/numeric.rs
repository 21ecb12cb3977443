//! The numeric literal engine.
//!
//! Parses signed integer literals directly from the cursor, digit by
//! digit, with overflow checked against the target integer type at every
//! accumulation step. A literal that turns out to be a float (a `.` or an
//! exponent marker after the digits) aborts with a distinguishable
//! "defer to float" failure so the float alternative of the value grammar
//! gets the first full attempt at the same input.

use crate::ParseError;
use crate::SourceCursor;

/// A fixed-width signed integer type the engine can accumulate into.
pub(crate) trait FixedWidthInt: Copy + std::fmt::Display {
    const MAX: Self;
    const TYPE_NAME: &'static str;

    fn zero() -> Self;
    fn from_digit(digit: u32) -> Self;
    fn checked_mul_by(self, radix: u32) -> Option<Self>;
    fn checked_add_digit(self, digit: Self) -> Option<Self>;
    fn checked_sub_digit(self, digit: Self) -> Option<Self>;
}

macro_rules! impl_fixed_width_int {
    ($($ty:ty),+) => {
        $(impl FixedWidthInt for $ty {
            const MAX: Self = <$ty>::MAX;
            const TYPE_NAME: &'static str = stringify!($ty);

            fn zero() -> Self {
                0
            }

            fn from_digit(digit: u32) -> Self {
                digit as $ty
            }

            fn checked_mul_by(self, radix: u32) -> Option<Self> {
                self.checked_mul(radix as $ty)
            }

            fn checked_add_digit(self, digit: Self) -> Option<Self> {
                self.checked_add(digit)
            }

            fn checked_sub_digit(self, digit: Self) -> Option<Self> {
                self.checked_sub(digit)
            }
        })+
    };
}

impl_fixed_width_int!(i32, i64);

/// Parses a signed integer literal in a given radix.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IntParser {
    radix: u32,
}

impl IntParser {
    /// A base-10 integer parser.
    pub(crate) fn new() -> Self {
        Self::with_radix(10)
    }

    /// An integer parser for `radix`, which must be in `2..=36`.
    pub(crate) fn with_radix(radix: u32) -> Self {
        assert!((2..=36).contains(&radix), "radix not in range 2..=36");
        Self { radix }
    }

    /// Parses an integer at the cursor.
    ///
    /// Accepts an optional `-`/`+` sign followed by at least one digit.
    /// Accumulation is overflow-checked at every step: the instant a
    /// `value * radix + digit` step would exceed the target type, the
    /// parse fails with [`ParseError::Failed`] rather than wrapping.
    ///
    /// A `.` or exponent marker (`e`/`E`) immediately after the digits
    /// fails with [`ParseError::ExpectedInput`] naming a float, leaving
    /// the float alternative to reparse the same input. The cursor is
    /// left mid-literal on failure; callers restore their own snapshot.
    pub(crate) fn parse<T: FixedWidthInt>(
        &self,
        cursor: &mut SourceCursor<'_>,
    ) -> Result<T, ParseError> {
        let start = cursor.position();

        let is_positive = match cursor.peek() {
            Some('-') => {
                cursor.bump();
                false
            }
            Some('+') => {
                cursor.bump();
                true
            }
            _ => true,
        };

        let mut value = match cursor.peek().and_then(|ch| self.digit(ch)) {
            Some(first) => {
                cursor.bump();
                if is_positive {
                    T::from_digit(first)
                } else {
                    T::zero()
                        .checked_sub_digit(T::from_digit(first))
                        .ok_or_else(|| self.overflow_error::<T>(start, cursor))?
                }
            }
            None => {
                return Err(ParseError::expected("integer", cursor.position()));
            }
        };

        loop {
            match cursor.peek() {
                Some(ch) => {
                    if let Some(digit) = self.digit(ch) {
                        cursor.bump();
                        let digit = T::from_digit(digit);
                        value = value
                            .checked_mul_by(self.radix)
                            .and_then(|v| {
                                if is_positive {
                                    v.checked_add_digit(digit)
                                } else {
                                    v.checked_sub_digit(digit)
                                }
                            })
                            .ok_or_else(|| self.overflow_error::<T>(start, cursor))?;
                    } else if ch == '.' || ch == 'e' || ch == 'E' {
                        // The literal is really a float; let the float
                        // alternative take the whole thing.
                        return Err(ParseError::expected(
                            "integer (literal is a float)",
                            cursor.position(),
                        ));
                    } else {
                        break;
                    }
                }
                None => break,
            }
        }

        Ok(value)
    }

    fn digit(&self, ch: char) -> Option<u32> {
        ch.to_digit(self.radix)
    }

    fn overflow_error<T: FixedWidthInt>(
        &self,
        start: crate::SourcePosition,
        cursor: &SourceCursor<'_>,
    ) -> ParseError {
        ParseError::Failed {
            summary: format!("failed to parse `{}`", T::TYPE_NAME),
            label: format!("overflowed {}", T::MAX),
            from: start,
            snippet: cursor.snippet().to_string(),
        }
    }
}

/// Parses a float literal at the cursor via `str::parse::<f64>` over the
/// consumed slice.
///
/// A float must carry a fractional part or an exponent; a bare integer is
/// rejected so the value grammar's Int alternative keeps ownership of
/// integer-shaped literals.
pub(crate) fn parse_float(cursor: &mut SourceCursor<'_>) -> Result<f64, ParseError> {
    parse_float_literal(cursor, false)
}

/// Parses a numeric literal as `f64`, accepting an integer-shaped one.
///
/// Used when an integer literal overflows its target width: the literal
/// still reads as a number and becomes a (rounded) float rather than an
/// enum name.
pub(crate) fn parse_overflowing_float(cursor: &mut SourceCursor<'_>) -> Result<f64, ParseError> {
    parse_float_literal(cursor, true)
}

fn parse_float_literal(
    cursor: &mut SourceCursor<'_>,
    allow_integer_shape: bool,
) -> Result<f64, ParseError> {
    let start = cursor.snapshot();
    let start_position = cursor.position();

    if matches!(cursor.peek(), Some('-' | '+')) {
        cursor.bump();
    }

    let mut saw_digits = false;
    while matches!(cursor.peek(), Some(ch) if ch.is_ascii_digit()) {
        cursor.bump();
        saw_digits = true;
    }
    if !saw_digits {
        return Err(ParseError::expected("float", cursor.position()));
    }

    let mut is_float = false;
    if cursor.peek() == Some('.') && matches!(cursor.peek2(), Some(ch) if ch.is_ascii_digit()) {
        cursor.bump();
        while matches!(cursor.peek(), Some(ch) if ch.is_ascii_digit()) {
            cursor.bump();
        }
        is_float = true;
    }

    if matches!(cursor.peek(), Some('e' | 'E')) {
        cursor.bump();
        if matches!(cursor.peek(), Some('-' | '+')) {
            cursor.bump();
        }
        let mut saw_exponent_digits = false;
        while matches!(cursor.peek(), Some(ch) if ch.is_ascii_digit()) {
            cursor.bump();
            saw_exponent_digits = true;
        }
        if !saw_exponent_digits {
            return Err(ParseError::expected("exponent digits", cursor.position()));
        }
        is_float = true;
    }

    if !is_float && !allow_integer_shape {
        return Err(ParseError::expected(
            "float (literal is an integer)",
            cursor.position(),
        ));
    }

    let text = cursor.consumed_since(&start);
    text.parse::<f64>().map_err(|err| ParseError::Failed {
        summary: "failed to parse `f64`".to_string(),
        label: err.to_string(),
        from: start_position,
        snippet: text.to_string(),
    })
}
