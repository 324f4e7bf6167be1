// ============================================================================
// Evaluator Interface
// Defines the contract for the arithmetic service behind the state machine
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{self, EvalResult};

/// Strategy pattern interface for resolving a pending binary operation.
/// The state machine only ever talks to arithmetic through this trait.
pub trait Evaluator: Send + Sync {
    /// Resolve `a <operation> b`
    ///
    /// # Arguments
    /// * `a` - Left operand as a display literal
    /// * `b` - Right operand as a display literal
    /// * `operation` - The pending operation
    ///
    /// # Returns
    /// The result as a display literal, or the failure to show the user
    fn calculate(&self, a: &str, b: &str, operation: Operation) -> EvalResult<String>;

    /// Get the evaluator name for logging
    fn name(&self) -> &str;
}

/// Arbitrary-precision decimal evaluator (28 significant digits)
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalEvaluator;

impl Evaluator for DecimalEvaluator {
    fn calculate(&self, a: &str, b: &str, operation: Operation) -> EvalResult<String> {
        numeric::calculate(a, b, operation)
    }

    fn name(&self) -> &str {
        "decimal"
    }
}
