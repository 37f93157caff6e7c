//! # Calc - Arithmetic Operations Library
//!
//! Small library backing the calculator microservice and CLI: operand
//! validation against the safe-integer range, and the seven arithmetic
//! operations with their precondition checks.
//!
//! ## Quick Start
//!
//! ```
//! use calc::{ops, parse_operand};
//!
//! // Parse and validate a raw query-string value
//! let num = parse_operand(Some("16")).unwrap();
//!
//! // Compute
//! let root = ops::sqrt(num).unwrap();
//! assert_eq!(root, 4.0);
//! ```
//!
//! ## Operand Validation
//!
//! Operands are accepted only within the inclusive safe-integer range
//! ±(2^53 − 1), the set of integers exactly representable in an IEEE 754
//! double. This is deliberately narrower than "finite": values such as
//! `1e300` parse cleanly but are rejected.

pub mod error;
pub mod ops;
pub mod validate;

// Re-export main types at crate root for convenience
pub use error::{CalcError, Result};
pub use validate::{is_safe_number, parse_operand, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
