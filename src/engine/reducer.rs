// ============================================================================
// Calculator Reducer
// Pure transition function: (state, action) -> state
// ============================================================================

use crate::domain::{Action, CalculatorConfig, CalculatorState, Digit, Operation};
use crate::interfaces::{DecimalEvaluator, Evaluator};

/// Transition function of the running-total calculator.
///
/// Every transition is total: evaluation failures become the `error` field of
/// the returned state. The input state is never modified.
///
/// Chaining: an operator press resolves the previously pending operation, so
/// `2 + 3 + 4 =` shows `5` after the second `+` and `9` at the end.
pub struct Reducer<'a> {
    evaluator: &'a dyn Evaluator,
    config: &'a CalculatorConfig,
}

impl<'a> Reducer<'a> {
    pub fn new(evaluator: &'a dyn Evaluator, config: &'a CalculatorConfig) -> Self {
        Self { evaluator, config }
    }

    /// Compute the state that follows `state` under `action`
    pub fn reduce(&self, state: &CalculatorState, action: Action) -> CalculatorState {
        match action {
            Action::InputDigit(digit) => self.input_digit(state, digit),
            Action::InputDecimal => Self::input_decimal(state),
            Action::PerformOperation(op) => self.perform_operation(state, op),
            Action::PerformEquals => self.perform_equals(state),
            Action::Clear => CalculatorState::default(),
            Action::ToggleSign => Self::toggle_sign(state),
        }
    }

    fn input_digit(&self, state: &CalculatorState, digit: Digit) -> CalculatorState {
        let d = digit.as_char().to_string();

        // An error is an implicit clear
        if state.is_error() {
            return CalculatorState::with_display(d);
        }

        if state.waiting_for_operand {
            return CalculatorState {
                display: d,
                waiting_for_operand: false,
                error: None,
                ..state.clone()
            };
        }

        if state.display == "0" {
            return CalculatorState {
                display: d,
                error: None,
                ..state.clone()
            };
        }

        if !self.config.accepts_more_digits(state.digit_count()) {
            return state.clone();
        }

        CalculatorState {
            display: format!("{}{}", state.display, d),
            error: None,
            ..state.clone()
        }
    }

    fn input_decimal(state: &CalculatorState) -> CalculatorState {
        if state.is_error() {
            return CalculatorState::with_display("0.");
        }

        if state.waiting_for_operand {
            return CalculatorState {
                display: "0.".to_string(),
                waiting_for_operand: false,
                error: None,
                ..state.clone()
            };
        }

        if state.has_decimal_point() {
            return state.clone();
        }

        CalculatorState {
            display: format!("{}.", state.display),
            error: None,
            ..state.clone()
        }
    }

    fn perform_operation(&self, state: &CalculatorState, next: Operation) -> CalculatorState {
        // Recover from an error by starting a new operation on what is shown
        if state.is_error() {
            return CalculatorState {
                display: state.display.clone(),
                previous_value: Some(state.display.clone()),
                operation: Some(next),
                waiting_for_operand: true,
                error: None,
            };
        }

        let (lhs, pending) = match (&state.previous_value, state.operation) {
            (None, _) => {
                return CalculatorState {
                    previous_value: Some(state.display.clone()),
                    operation: Some(next),
                    waiting_for_operand: true,
                    ..state.clone()
                };
            }
            (Some(lhs), Some(pending)) if !state.waiting_for_operand => (lhs, pending),
            // Operator pressed again before an operand: replace it
            (Some(_), _) => {
                return CalculatorState {
                    operation: Some(next),
                    waiting_for_operand: true,
                    ..state.clone()
                };
            }
        };

        match self.evaluator.calculate(lhs, &state.display, pending) {
            Ok(result) => CalculatorState {
                display: result.clone(),
                previous_value: Some(result),
                operation: Some(next),
                waiting_for_operand: true,
                error: None,
            },
            Err(error) => CalculatorState {
                error: Some(error),
                waiting_for_operand: true,
                ..state.clone()
            },
        }
    }

    fn perform_equals(&self, state: &CalculatorState) -> CalculatorState {
        let (lhs, pending) = match (&state.previous_value, state.operation) {
            (Some(lhs), Some(pending)) if !state.is_error() => (lhs, pending),
            _ => return state.clone(),
        };

        match self.evaluator.calculate(lhs, &state.display, pending) {
            Ok(result) => CalculatorState {
                display: result,
                previous_value: None,
                operation: None,
                waiting_for_operand: true,
                error: None,
            },
            Err(error) => CalculatorState {
                error: Some(error),
                waiting_for_operand: true,
                ..state.clone()
            },
        }
    }

    fn toggle_sign(state: &CalculatorState) -> CalculatorState {
        if state.is_error() || state.display == "0" {
            return state.clone();
        }

        let display = if state.is_negative() {
            state.display[1..].to_string()
        } else {
            format!("-{}", state.display)
        };

        CalculatorState {
            display,
            ..state.clone()
        }
    }
}

impl CalculatorState {
    /// Apply `action` with the decimal evaluator and default configuration
    ///
    /// # Example
    /// ```
    /// use calculator_engine::domain::{Action, CalculatorState, Digit, Operation};
    ///
    /// let state = [
    ///     Action::InputDigit(Digit::new(7).unwrap()),
    ///     Action::PerformOperation(Operation::Multiply),
    ///     Action::InputDigit(Digit::new(6).unwrap()),
    ///     Action::PerformEquals,
    /// ]
    /// .into_iter()
    /// .fold(CalculatorState::default(), |state, action| state.apply(action));
    ///
    /// assert_eq!(state.display, "42");
    /// ```
    pub fn apply(&self, action: Action) -> CalculatorState {
        let config = CalculatorConfig::default();
        Reducer::new(&DecimalEvaluator, &config).reduce(self, action)
    }
}
