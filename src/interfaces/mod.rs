// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod evaluator;
mod event_handler;

pub use evaluator::{DecimalEvaluator, Evaluator};
pub use event_handler::{
    CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};
