// ============================================================================
// Calculator Session
// Owns one calculator state and replaces it on every user action
// ============================================================================

use crate::domain::{
    Action, CalculatorConfig, CalculatorState, Digit, DisplayView, Operation, SessionId,
};
use crate::engine::Reducer;
use crate::input::action_for_key;
use crate::interfaces::{CalculatorEvent, DecimalEvaluator, EventHandler, Evaluator};
use chrono::Utc;
use std::sync::Arc;

/// Interactive calculator session with a pluggable evaluator
pub struct Calculator {
    /// Session identity for events and logs
    session: SessionId,

    /// Input limits
    config: CalculatorConfig,

    /// Arithmetic service used to resolve pending operations
    evaluator: Box<dyn Evaluator>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Current state; replaced as a whole on every action
    state: CalculatorState,

    /// Sequence counter for action ordering
    sequence_counter: u64,
}

impl Calculator {
    /// Create a new calculator session
    pub fn new(
        config: CalculatorConfig,
        evaluator: Box<dyn Evaluator>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        let session = SessionId::new();
        tracing::debug!(%session, evaluator = evaluator.name(), "calculator session started");

        Self {
            session,
            config,
            evaluator,
            event_handler,
            state: CalculatorState::default(),
            sequence_counter: 0,
        }
    }

    /// Create a session with the default configuration and decimal evaluator
    pub fn with_event_handler(event_handler: Arc<dyn EventHandler>) -> Self {
        Self::new(
            CalculatorConfig::default(),
            Box::new(DecimalEvaluator),
            event_handler,
        )
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Apply an action, replacing the state, and return the new state
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        let next = Reducer::new(&*self.evaluator, &self.config).reduce(&self.state, action);

        let sequence = self.sequence_counter;
        self.sequence_counter += 1;

        tracing::trace!(
            session = %self.session,
            sequence,
            ?action,
            display = %next.display,
            "action applied"
        );

        let mut events = vec![CalculatorEvent::ActionApplied {
            session: self.session,
            sequence,
            action,
            display: next.display.clone(),
            timestamp: Utc::now(),
        }];

        if action.may_evaluate() {
            if let (None, Some(error)) = (self.state.error, next.error) {
                tracing::debug!(session = %self.session, sequence, %error, "evaluation failed");
                events.push(CalculatorEvent::EvaluationFailed {
                    session: self.session,
                    sequence,
                    error,
                    timestamp: Utc::now(),
                });
            }
        }

        self.state = next;
        self.event_handler.on_events(events);

        &self.state
    }

    /// Apply several actions in order
    pub fn dispatch_all<I>(&mut self, actions: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Action>,
    {
        for action in actions {
            self.dispatch(action);
        }
        &self.state
    }

    /// Apply the action bound to a keyboard key.
    /// Returns false if the key has no binding.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match action_for_key(key) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.dispatch(Action::Clear);
    }

    pub fn input_digit(&mut self, digit: Digit) {
        self.dispatch(Action::InputDigit(digit));
    }

    pub fn input_decimal(&mut self) {
        self.dispatch(Action::InputDecimal);
    }

    pub fn perform_operation(&mut self, operation: Operation) {
        self.dispatch(Action::PerformOperation(operation));
    }

    pub fn perform_equals(&mut self) {
        self.dispatch(Action::PerformEquals);
    }

    pub fn toggle_sign(&mut self) {
        self.dispatch(Action::ToggleSign);
    }

    // ========================================================================
    // Observation
    // ========================================================================

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Numeric buffer (not the error message)
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// User-visible error message, if the last evaluation failed
    pub fn error(&self) -> Option<String> {
        self.state.error_message()
    }

    /// What a renderer should show
    pub fn view(&self) -> DisplayView {
        DisplayView::from_state(&self.state)
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Number of actions applied so far
    pub fn actions_applied(&self) -> u64 {
        self.sequence_counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};
    use crate::numeric::{EvalError, EvalResult};

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    #[test]
    fn test_calculator_basic() {
        let mut calc = Calculator::with_event_handler(Arc::new(NoOpEventHandler));

        calc.input_digit(digit(1));
        calc.input_digit(digit(5));
        calc.perform_operation(Operation::Divide);
        calc.input_digit(digit(4));
        calc.perform_equals();

        assert_eq!(calc.display(), "3.75");
        assert_eq!(calc.error(), None);
        assert_eq!(calc.actions_applied(), 5);
    }

    #[test]
    fn test_error_and_recovery() {
        let mut calc = Calculator::with_event_handler(Arc::new(NoOpEventHandler));

        calc.input_digit(digit(1));
        calc.perform_operation(Operation::Divide);
        calc.input_digit(digit(0));
        calc.perform_equals();
        assert_eq!(calc.error().as_deref(), Some("Division by zero"));
        assert_eq!(calc.view().text, "Division by zero");

        calc.toggle_sign();
        calc.perform_equals();
        assert_eq!(calc.error().as_deref(), Some("Division by zero"));

        calc.input_digit(digit(5));
        assert_eq!(calc.display(), "5");
        assert_eq!(calc.error(), None);
    }

    #[test]
    fn test_events_emitted_per_action() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let mut calc = Calculator::with_event_handler(recorder.clone());

        calc.dispatch_all([
            Action::InputDigit(digit(9)),
            Action::PerformOperation(Operation::Divide),
            Action::InputDigit(digit(0)),
            Action::PerformEquals,
            Action::PerformEquals,
        ]);

        let events = recorder.events();
        let applied: Vec<u64> = events
            .iter()
            .filter(|e| matches!(e, CalculatorEvent::ActionApplied { .. }))
            .map(|e| e.sequence())
            .collect();
        assert_eq!(applied, vec![0, 1, 2, 3, 4]);

        // Only the transition into the error state reports a failure
        let failures: Vec<&CalculatorEvent> = events
            .iter()
            .filter(|e| matches!(e, CalculatorEvent::EvaluationFailed { .. }))
            .collect();
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            failures[0],
            CalculatorEvent::EvaluationFailed {
                sequence: 3,
                error: EvalError::DivisionByZero,
                ..
            }
        ));
        assert!(events.iter().all(|e| e.session() == calc.session()));
    }

    #[test]
    fn test_handle_key() {
        let mut calc = Calculator::with_event_handler(Arc::new(NoOpEventHandler));

        for key in ["2", "^", "1", "0", "Enter"] {
            assert!(calc.handle_key(key));
        }
        assert_eq!(calc.display(), "1024");

        assert!(!calc.handle_key("Tab"));
        assert_eq!(calc.actions_applied(), 5);

        assert!(calc.handle_key("Backspace"));
        assert_eq!(calc.state(), &CalculatorState::default());
    }

    struct FixedEvaluator;

    impl Evaluator for FixedEvaluator {
        fn calculate(&self, _a: &str, _b: &str, _operation: Operation) -> EvalResult<String> {
            Ok("42".to_string())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_custom_evaluator() {
        let mut calc = Calculator::new(
            CalculatorConfig::default(),
            Box::new(FixedEvaluator),
            Arc::new(NoOpEventHandler),
        );

        calc.input_digit(digit(1));
        calc.perform_operation(Operation::Add);
        calc.input_digit(digit(1));
        calc.perform_equals();

        assert_eq!(calc.display(), "42");
    }
}
