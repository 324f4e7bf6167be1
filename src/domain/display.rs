// ============================================================================
// Display View Model
// What a renderer shows for a given calculator state
// ============================================================================

use super::state::CalculatorState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest text rendered at the large size
const LARGE_TEXT_MAX_LEN: usize = 10;

/// Longest text rendered at the medium size
const MEDIUM_TEXT_MAX_LEN: usize = 16;

/// Size class for the display text, chosen by length so long results fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisplaySize {
    Large,
    Medium,
    Small,
}

impl DisplaySize {
    pub fn for_text(text: &str) -> Self {
        let len = text.chars().count();
        if len <= LARGE_TEXT_MAX_LEN {
            DisplaySize::Large
        } else if len <= MEDIUM_TEXT_MAX_LEN {
            DisplaySize::Medium
        } else {
            DisplaySize::Small
        }
    }
}

/// Read-only projection of a [`CalculatorState`] for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayView {
    /// Error message when an error is set, the numeric buffer otherwise
    pub text: String,
    pub is_error: bool,
    pub size: DisplaySize,
}

impl DisplayView {
    pub fn from_state(state: &CalculatorState) -> Self {
        let text = state.error_message().unwrap_or_else(|| state.display.clone());
        let size = DisplaySize::for_text(&text);

        Self {
            text,
            is_error: state.is_error(),
            size,
        }
    }

    /// Serialize for a host UI bridge
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&CalculatorState> for DisplayView {
    fn from(state: &CalculatorState) -> Self {
        Self::from_state(state)
    }
}
