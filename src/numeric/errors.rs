// ============================================================================
// Evaluation Errors
// Error types for decimal calculator arithmetic
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while resolving a binary operation.
///
/// The `Display` text of each variant is what the calculator shows to the
/// user in place of the numeric buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvalError {
    /// Right operand of a division is zero (or zero raised to a negative power)
    DivisionByZero,
    /// Result magnitude exceeds the decimal range
    Overflow,
    /// Result is not a real number (negative base, fractional exponent)
    Undefined,
    /// Operand string is not a decimal literal
    InvalidInput,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::Overflow => write!(f, "Overflow"),
            EvalError::Undefined => write!(f, "Undefined result"),
            EvalError::InvalidInput => write!(f, "Invalid input"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Result type alias for evaluator operations
pub type EvalResult<T> = Result<T, EvalError>;
