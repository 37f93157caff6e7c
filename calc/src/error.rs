//! Error types for the calc library.

use thiserror::Error;

/// Errors raised by arithmetic operation preconditions.
///
/// Display strings are client-facing: the HTTP service returns them
/// verbatim in its JSON error bodies.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Division with a zero divisor.
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    /// Modulo with a zero divisor.
    #[error("Division by zero is not allowed in modulo operation.")]
    ModuloByZero,

    /// Square root of a negative operand.
    #[error("Cannot calculate square root of a negative number.")]
    NegativeSquareRoot,

    /// Exponentiation produced an infinite or NaN result.
    #[error("Result is too large or undefined.")]
    NonFiniteResult,
}

/// Result type alias using [`CalcError`].
pub type Result<T> = std::result::Result<T, CalcError>;
