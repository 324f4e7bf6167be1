// ============================================================================
// Engine Module
// Contains the calculator state machine and the session that drives it
// ============================================================================

mod calculator;
mod reducer;

pub mod builder;

pub use builder::{create_from_config, CalculatorBuilder};
pub use calculator::Calculator;
pub use reducer::Reducer;
