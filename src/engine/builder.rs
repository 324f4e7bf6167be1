// ============================================================================
// Calculator Factory
// Creates calculator sessions with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::{DecimalEvaluator, EventHandler, Evaluator, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator session from configuration
///
/// # Arguments
/// * `config` - Session configuration
/// * `event_handler` - Event handler for calculator events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use calculator_engine::prelude::*;
/// use calculator_engine::engine::builder::create_from_config;
/// use std::sync::Arc;
///
/// let calc = create_from_config(CalculatorConfig::pocket(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calc.display(), "0");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate().inspect_err(|reason| {
        tracing::warn!(%reason, "rejected calculator configuration");
    })?;

    Ok(Calculator::new(config, Box::new(DecimalEvaluator), event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculator sessions with fluent API
///
/// # Example
/// ```
/// use calculator_engine::prelude::*;
/// use std::sync::Arc;
///
/// let mut calc = CalculatorBuilder::new()
///     .max_digits(12)
///     .event_handler(Arc::new(LoggingEventHandler))
///     .build()
///     .unwrap();
///
/// calc.handle_key("7");
/// assert_eq!(calc.display(), "7");
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    evaluator: Box<dyn Evaluator>,
    event_handler: Arc<dyn EventHandler>,
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorBuilder {
    /// Create a builder with the default configuration, the decimal
    /// evaluator and no event handling
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            evaluator: Box::new(DecimalEvaluator),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    // ========================================================================
    // Input Limits
    // ========================================================================

    /// Cap typed operands at `digits` digits
    pub fn max_digits(mut self, digits: usize) -> Self {
        self.config.max_digits = Some(digits);
        self
    }

    /// Accept operands of any length
    pub fn unbounded_input(mut self) -> Self {
        self.config.max_digits = None;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    // ========================================================================
    // Collaborators
    // ========================================================================

    /// Use a different arithmetic service
    pub fn evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Receive calculator events
    pub fn event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator session
    pub fn build(self) -> Result<Calculator, String> {
        self.config.validate().inspect_err(|reason| {
            tracing::warn!(%reason, "rejected calculator configuration");
        })?;

        Ok(Calculator::new(self.config, self.evaluator, self.event_handler))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}
