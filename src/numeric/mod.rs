// ============================================================================
// Numeric Module
// Arbitrary-precision decimal evaluation for the calculator
// ============================================================================
//
// This module provides:
// - add/subtract/multiply/divide/power on rust_decimal::Decimal
// - calculate(): the string-level service used by the state machine
// - EvalError: failures surfaced to the user as display messages
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Results rendered in canonical form (no trailing zeros, no exponent)

mod errors;
mod evaluator;

pub use errors::{EvalError, EvalResult};
pub use evaluator::{
    add, apply, calculate, divide, multiply, parse_operand, power, render, subtract,
};
