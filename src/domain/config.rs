// ============================================================================
// Calculator Configuration
// Input limits for a calculator session
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Significant digits carried by the decimal type; typed operands beyond
/// this could not be represented exactly.
pub const MAX_DECIMAL_DIGITS: usize = 28;

/// Default digit cap for typed operands
pub const DEFAULT_MAX_DIGITS: usize = 16;

/// Configuration for a calculator session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Optional: Maximum number of digits a typed operand may hold.
    /// Further digit presses are ignored once reached.
    /// None means unlimited input
    pub max_digits: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

impl CalculatorConfig {
    /// Create a configuration without an input cap
    pub fn new() -> Self {
        Self { max_digits: None }
    }

    /// Builder method: Set the digit cap
    pub fn with_max_digits(mut self, digits: usize) -> Self {
        self.max_digits = Some(digits);
        self
    }

    /// Builder method: Remove the digit cap
    pub fn without_max_digits(mut self) -> Self {
        self.max_digits = None;
        self
    }

    /// Whether a display with `digits` digits may take one more
    pub fn accepts_more_digits(&self, digits: usize) -> bool {
        self.max_digits.map_or(true, |max| digits < max)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(max) = self.max_digits {
            if max == 0 {
                return Err("Digit cap must be at least 1".to_string());
            }
            if max > MAX_DECIMAL_DIGITS {
                return Err(format!(
                    "Digit cap cannot exceed {} significant digits",
                    MAX_DECIMAL_DIGITS
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// Pocket calculator: 8-digit entry
    pub fn pocket() -> Self {
        Self::new().with_max_digits(8)
    }

    /// Desktop calculator: 16-digit entry
    pub fn desktop() -> Self {
        Self::new().with_max_digits(DEFAULT_MAX_DIGITS)
    }

    /// No entry limit; over-long operands surface as evaluation errors
    pub fn unbounded() -> Self {
        Self::new()
    }
}
