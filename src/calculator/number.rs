//! Numeric values produced by the evaluator and their text forms.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::CalcError;

/// A value produced while evaluating an expression.
///
/// Integer literals stay integers through `+`, `-` and `*` so that `2+3`
/// chains as `5` rather than `5.0`. Division always yields a decimal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Decimal(f64),
}

impl Number {
    /// The value as a float, rounding integers beyond 2^53.
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Decimal(f) => f,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Decimal(f) => f == 0.0,
        }
    }

    /// True division. A zero divisor is an error even for `0/0`.
    pub fn divide(self, rhs: Self) -> Result<Self, CalcError> {
        if rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Self::Decimal(self.to_f64() / rhs.to_f64()))
    }

    /// Integer arithmetic when both sides are integers and the result fits,
    /// decimal arithmetic otherwise.
    fn integer_op(
        self,
        rhs: Self,
        checked: fn(i64, i64) -> Option<i64>,
        float: fn(f64, f64) -> f64,
    ) -> Self {
        if let (Self::Integer(a), Self::Integer(b)) = (self, rhs)
            && let Some(result) = checked(a, b)
        {
            return Self::Integer(result);
        }
        Self::Decimal(float(self.to_f64(), rhs.to_f64()))
    }

    /// Text for the display: whole values drop their decimal point.
    pub fn format_for_display(self) -> String {
        match self {
            Self::Integer(i) => i.to_string(),
            Self::Decimal(f) => format_number(f),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.integer_op(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.integer_op(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.integer_op(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Integer(i) => i
                .checked_neg()
                .map_or(Self::Decimal(-(i as f64)), Self::Integer),
            Self::Decimal(f) => Self::Decimal(-f),
        }
    }
}

/// The buffer form of a value. Decimals always keep a decimal point or an
/// exponent (`2.0`, `0.5`, `1e+16`) and re-tokenize to the same value.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Decimal(d) => f.write_str(&decimal_repr(*d)),
        }
    }
}

/// Shortest round-trip text of a float, with a signed two-digit exponent
/// (`1e-05`, `1.5e+16`) and lower-case `nan`/`inf`.
fn decimal_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        Err(_) => text,
    }
}

/// Format a value for display, rendering whole numbers without a decimal
/// point (`4.0` becomes `4`).
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        if value == 0.0 {
            // Covers -0.0 as well
            return "0".to_string();
        }
        format!("{value:.0}")
    } else {
        decimal_repr(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_whole_number() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-0.25), "-0.25");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
    }

    #[test]
    fn test_exponent_has_sign_and_two_digits() {
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(1.5e-5), "1.5e-05");
        assert_eq!(format_number(2.5e-123), "2.5e-123");
        assert_eq!(Number::Decimal(1e16).to_string(), "1e+16");
        assert_eq!(Number::Decimal(1e-5).to_string(), "1e-05");
        assert_eq!(Number::Decimal(0.0001).to_string(), "0.0001");
    }

    #[test]
    fn test_buffer_form_keeps_decimal_point() {
        assert_eq!(Number::Decimal(2.0).to_string(), "2.0");
        assert_eq!(Number::Decimal(0.5).to_string(), "0.5");
        assert_eq!(Number::Integer(5).to_string(), "5");
    }

    #[test]
    fn test_integer_arithmetic_stays_integer() {
        let result = Number::Integer(2) + Number::Integer(3);
        assert_eq!(result, Number::Integer(5));
        let result = Number::Integer(4) * Number::Integer(-3);
        assert_eq!(result, Number::Integer(-12));
    }

    #[test]
    fn test_mixed_arithmetic_promotes() {
        let result = Number::Integer(2) * Number::Decimal(3.0);
        assert_eq!(result, Number::Decimal(6.0));
        assert_eq!(result.to_string(), "6.0");
        assert_eq!(result.format_for_display(), "6");
    }

    #[test]
    fn test_integer_overflow_promotes() {
        let result = Number::Integer(i64::MAX) + Number::Integer(1);
        assert!(matches!(result, Number::Decimal(_)));
        assert_eq!(
            -Number::Integer(i64::MIN),
            Number::Decimal(9.223372036854775808e18)
        );
        assert_eq!(Number::Integer(9) - Number::Decimal(0.5), Number::Decimal(8.5));
    }

    #[test]
    fn test_divide() {
        assert_eq!(
            Number::Integer(4).divide(Number::Integer(2)),
            Ok(Number::Decimal(2.0))
        );
        assert_eq!(
            Number::Integer(1).divide(Number::Integer(0)),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Number::Integer(0).divide(Number::Decimal(-0.0)),
            Err(CalcError::DivisionByZero)
        );
    }
}
