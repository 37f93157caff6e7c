//! The seven arithmetic operations.
//!
//! Operands are assumed to be already validated (see
//! [`crate::validate`]); the fallible operations here only enforce their
//! own preconditions: zero divisors, negative square-root operands, and
//! non-finite exponentiation results.

use crate::error::{CalcError, Result};

/// Add two operands.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two operands.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when `b` is zero (positive or
/// negative zero).
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Remainder of `a` divided by `b`.
///
/// IEEE remainder semantics: the result sign follows the dividend `a`,
/// not mathematical modulo.
///
/// # Errors
///
/// Returns [`CalcError::ModuloByZero`] when `b` is zero.
pub fn modulo(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::ModuloByZero);
    }
    Ok(a % b)
}

/// Raise `base` to `exponent`.
///
/// Fractional and negative exponents are permitted.
///
/// # Errors
///
/// Returns [`CalcError::NonFiniteResult`] when the computed value is
/// infinite or NaN (overflow, or a negative base with a fractional
/// exponent).
pub fn power(base: f64, exponent: f64) -> Result<f64> {
    let result = base.powf(exponent);
    if !result.is_finite() {
        return Err(CalcError::NonFiniteResult);
    }
    Ok(result)
}

/// Square root of `n`.
///
/// # Errors
///
/// Returns [`CalcError::NegativeSquareRoot`] when `n` is negative.
pub fn sqrt(n: f64) -> Result<f64> {
    if n < 0.0 {
        return Err(CalcError::NegativeSquareRoot);
    }
    Ok(n.sqrt())
}
