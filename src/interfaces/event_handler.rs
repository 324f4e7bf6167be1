// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator transitions
// ============================================================================

use crate::domain::{Action, SessionId};
use crate::numeric::EvalError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a calculator session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// Action applied and state replaced
    ActionApplied {
        session: SessionId,
        sequence: u64,
        action: Action,
        display: String,
        timestamp: DateTime<Utc>,
    },

    /// Action resolved a pending operation and the evaluation failed
    EvaluationFailed {
        session: SessionId,
        sequence: u64,
        error: EvalError,
        timestamp: DateTime<Utc>,
    },
}

impl CalculatorEvent {
    pub fn sequence(&self) -> u64 {
        match self {
            CalculatorEvent::ActionApplied { sequence, .. }
            | CalculatorEvent::EvaluationFailed { sequence, .. } => *sequence,
        }
    }

    pub fn session(&self) -> SessionId {
        match self {
            CalculatorEvent::ActionApplied { session, .. }
            | CalculatorEvent::EvaluationFailed { session, .. } => *session,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, audit trails, UI notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculatorEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far
    pub fn events(&self) -> Vec<CalculatorEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<CalculatorEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculatorEvent>) {
        self.events.lock().extend(events);
    }
}
