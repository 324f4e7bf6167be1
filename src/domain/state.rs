// ============================================================================
// Calculator State
// The single record owned by a calculator session
// ============================================================================

use super::operation::Operation;
use crate::numeric::EvalError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interaction state of a running-total calculator.
///
/// Transitions never mutate a state in place: each action produces a complete
/// replacement (see [`crate::engine::Reducer`]).
///
/// Invariants:
/// - `display` holds at most one `.` and at most one leading `-`
/// - `operation.is_some()` implies `previous_value.is_some()`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorState {
    /// Buffer shown to the user
    pub display: String,
    /// Left operand awaiting resolution
    pub previous_value: Option<String>,
    /// Pending binary operation
    pub operation: Option<Operation>,
    /// The next digit starts a fresh operand instead of extending `display`
    pub waiting_for_operand: bool,
    /// Failure of the last evaluation, until cleared by new input
    pub error: Option<EvalError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
            error: None,
        }
    }
}

impl CalculatorState {
    /// Fresh single-operand state showing `display`
    pub fn with_display(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// User-visible error message, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// Number of decimal digits in the display buffer (sign and point excluded)
    pub fn digit_count(&self) -> usize {
        self.display.chars().filter(char::is_ascii_digit).count()
    }

    pub fn has_decimal_point(&self) -> bool {
        self.display.contains('.')
    }

    pub fn is_negative(&self) -> bool {
        self.display.starts_with('-')
    }

    /// Check the structural invariants of the record
    pub fn check_invariants(&self) -> Result<(), String> {
        let body = self.display.strip_prefix('-').unwrap_or(&self.display);

        if body.is_empty() {
            return Err("Display cannot be empty".to_string());
        }
        if body.contains('-') {
            return Err(format!("Misplaced sign in display {:?}", self.display));
        }
        if body.matches('.').count() > 1 {
            return Err(format!("Multiple decimal points in display {:?}", self.display));
        }
        if !body.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(format!("Non-decimal character in display {:?}", self.display));
        }
        if self.operation.is_some() && self.previous_value.is_none() {
            return Err("Pending operation without a left operand".to_string());
        }

        Ok(())
    }
}
