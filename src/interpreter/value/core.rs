use std::ops::{Add, Mul, Neg, Sub};

use crate::{
    error::{ErrorKind, EvalError},
    interpreter::parser::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a numeric value produced by the evaluator.
///
/// Every operation returns a fresh value; there is no shared state between
/// values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl Value {
    /// Returns the value as an `f64`, converting integers to the nearest
    /// double.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }

    /// Returns `true` if the value is integer `0` or a real of magnitude zero
    /// (including `-0.0`).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r.abs() == 0.0,
        }
    }

    /// Divides `self` by `rhs`.
    ///
    /// The quotient is always real, even for two evenly dividing integers.
    ///
    /// # Parameters
    /// - `rhs`: The divisor.
    /// - `position`: Position of the `/` token, reported on failure.
    ///
    /// # Errors
    /// Returns `ErrorKind::DivisionByZero` at `position` if `rhs` is zero.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(4).divide(Value::Integer(2), 3).unwrap(), Value::Real(2.0));
    /// assert_eq!(Value::Integer(1).divide(Value::Real(-0.0), 3).unwrap_err().position, 3);
    /// ```
    pub fn divide(self, rhs: Self, position: usize) -> EvalResult<Self> {
        if rhs.is_zero() {
            return Err(EvalError::new(ErrorKind::DivisionByZero, position));
        }
        Ok(Self::Real(self.as_real() / rhs.as_real()))
    }

    /// Raises `self` to the power `exponent` with real exponentiation.
    ///
    /// The result is always real. Infinite and NaN results are returned as
    /// they are.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(2).pow(Value::Integer(10)), Value::Real(1024.0));
    /// assert_eq!(Value::Integer(0).pow(Value::Integer(-1)), Value::Real(f64::INFINITY));
    /// ```
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        Self::Real(self.as_real().powf(exponent.as_real()))
    }

    /// Applies `int_op` when both operands are integers and `real_op` after
    /// promotion otherwise.
    fn combine(self,
               rhs: Self,
               int_op: impl FnOnce(i64, i64) -> i64,
               real_op: impl FnOnce(f64, f64) -> f64)
               -> Self {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Self::Integer(int_op(a, b)),
            (left, right) => Self::Real(real_op(left.as_real(), right.as_real())),
        }
    }
}

/// Adds two values. Integer overflow wraps.
///
/// # Example
/// ```
/// use calc::interpreter::value::core::Value;
///
/// assert_eq!(Value::Integer(2) + Value::Integer(3), Value::Integer(5));
/// assert_eq!(Value::Integer(2) + Value::Real(0.5), Value::Real(2.5));
/// ```
impl Add for Value {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, i64::wrapping_add, |a, b| a + b)
    }
}

/// Subtracts two values. Integer overflow wraps.
impl Sub for Value {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, i64::wrapping_sub, |a, b| a - b)
    }
}

/// Multiplies two values. Integer overflow wraps.
impl Mul for Value {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.combine(rhs, i64::wrapping_mul, |a, b| a * b)
    }
}

/// Negates the value, keeping its kind. `i64::MIN` wraps to itself.
impl Neg for Value {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Integer(n) => Self::Integer(n.wrapping_neg()),
            Self::Real(r) => Self::Real(-r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value::{Integer, Real};

    #[test]
    fn integer_arithmetic_stays_exact() {
        assert_eq!(Integer(7) * Integer(6), Integer(42));
        assert_eq!(Integer(7) - Integer(9), Integer(-2));
        assert_eq!(Integer(9_007_199_254_740_993) + Integer(0), Integer(9_007_199_254_740_993));
    }

    #[test]
    fn mixed_operands_promote_to_real() {
        assert_eq!(Integer(3) * Real(0.5), Real(1.5));
        assert_eq!(Real(1.0) - Integer(3), Real(-2.0));
    }

    #[test]
    fn integer_overflow_wraps() {
        assert_eq!(Integer(i64::MAX) + Integer(1), Integer(i64::MIN));
        assert_eq!(Integer(i64::MIN) - Integer(1), Integer(i64::MAX));
        assert_eq!(-Integer(i64::MIN), Integer(i64::MIN));
    }

    #[test]
    fn division_is_always_real() {
        assert_eq!(Integer(7).divide(Integer(2), 1), Ok(Real(3.5)));
        assert_eq!(Integer(6).divide(Integer(3), 1), Ok(Real(2.0)));
    }

    #[test]
    fn division_by_any_zero_fails_at_operator() {
        for zero in [Integer(0), Real(0.0), Real(-0.0)] {
            let err = Real(1.0).divide(zero, 9).unwrap_err();
            assert_eq!(err.position, 9);
        }
    }

    #[test]
    fn power_is_always_real() {
        assert_eq!(Integer(2).pow(Integer(3)), Real(8.0));
        assert_eq!(Integer(4).pow(Real(0.5)), Real(2.0));
        assert!(Integer(-8).pow(Real(1.0 / 3.0)).as_real().is_nan());
    }

    #[test]
    fn negation_keeps_kind() {
        assert_eq!(-Integer(5), Integer(-5));
        assert_eq!(-Real(2.5), Real(-2.5));
    }
}
