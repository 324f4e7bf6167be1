// ============================================================================
// Calculator Engine Library
// Running-total calculator state machine over arbitrary-precision decimals
// ============================================================================

//! # Calculator Engine
//!
//! The core of an on-screen calculator: a pure state machine that turns
//! digit, decimal-point, operator, equals, clear and sign-toggle presses into
//! a display value, delegating arithmetic to a decimal evaluator.
//!
//! ## Features
//!
//! - **Decimal arithmetic** on `rust_decimal` (`0.1 + 0.2 = 0.3`, never `f64`)
//! - **Left-to-right chaining**: each operator press resolves the pending one
//! - **Pure reducer** `(state, action) -> state`; failures become state
//! - **Keyboard bindings** and a **display view model** for host UIs
//! - **Event handlers** for logging and auditing transitions
//!
//! ## Example
//!
//! ```rust
//! use calculator_engine::prelude::*;
//! use std::sync::Arc;
//!
//! let mut calc = Calculator::with_event_handler(Arc::new(NoOpEventHandler));
//!
//! // 2 + 3 + 4 =
//! for key in ["2", "+", "3", "+"] {
//!     calc.handle_key(key);
//! }
//! assert_eq!(calc.display(), "5");
//!
//! calc.handle_key("4");
//! calc.handle_key("Enter");
//! assert_eq!(calc.display(), "9");
//!
//! // 1 ÷ 0 =
//! calc.dispatch_all([
//!     Action::InputDigit(Digit::new(1).unwrap()),
//!     Action::PerformOperation(Operation::Divide),
//!     Action::InputDigit(Digit::ZERO),
//!     Action::PerformEquals,
//! ]);
//! assert_eq!(calc.error().as_deref(), Some("Division by zero"));
//! ```

pub mod domain;
pub mod engine;
pub mod input;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Action, CalculatorConfig, CalculatorState, Digit, DisplaySize, DisplayView, Operation,
        SessionId,
    };
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder, Reducer};
    pub use crate::input::action_for_key;
    pub use crate::interfaces::{
        CalculatorEvent, DecimalEvaluator, EventHandler, Evaluator, LoggingEventHandler,
        NoOpEventHandler, RecordingEventHandler,
    };
    pub use crate::numeric::{calculate, EvalError, EvalResult};
}
