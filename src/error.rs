//! The single error kind this crate raises.

use std::fmt;

/// Arithmetic errors surfaced at the public `BigInt` boundary.
///
/// Every kernel below `BigInt` is infallible by contract (slice bounds
/// are asserted, not checked) — this is the only error type a caller
/// of this crate will ever see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division or modulo with a zero divisor.
    DivideByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivideByZero => write!(f, "divide by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}
