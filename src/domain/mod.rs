// ============================================================================
// Domain Models Module
// Contains the calculator state record and its value objects
// ============================================================================

pub mod action;
pub mod config;
pub mod display;
pub mod operation;
pub mod session;
pub mod state;

pub use action::{Action, Digit};
pub use config::{CalculatorConfig, DEFAULT_MAX_DIGITS, MAX_DECIMAL_DIGITS};
pub use display::{DisplaySize, DisplayView};
pub use operation::Operation;
pub use session::SessionId;
pub use state::CalculatorState;
