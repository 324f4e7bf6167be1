// ============================================================================
// User Actions
// Discrete inputs accepted by the calculator state machine
// ============================================================================

use super::operation::Operation;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Digit
// ============================================================================

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or_else(|| format!("Not a decimal digit: {}", value))
    }
}

impl TryFrom<char> for Digit {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::from_char(c).ok_or_else(|| format!("Not a decimal digit: {:?}", c))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Action
// ============================================================================

/// Every transition the calculator state machine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    InputDigit(Digit),
    InputDecimal,
    PerformOperation(Operation),
    PerformEquals,
    Clear,
    ToggleSign,
}

impl Action {
    /// Actions that resolve a pending operation through the evaluator
    pub fn may_evaluate(&self) -> bool {
        matches!(self, Action::PerformOperation(_) | Action::PerformEquals)
    }
}
