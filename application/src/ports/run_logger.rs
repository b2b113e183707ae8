//! Port for structured run logging.
//!
//! Defines the [`RunLogger`] trait for recording research run summaries to
//! a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures one
//! machine-readable record per research run (JSONL).

use serde_json::Value;

/// A structured run event for logging.
pub struct RunEvent {
    /// Event type identifier (e.g., "research_completed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl RunEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging run events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible to
/// avoid disrupting the main execution flow — logging failures are silently
/// ignored.
pub trait RunLogger: Send + Sync {
    /// Record a run event.
    fn log(&self, event: RunEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoRunLogger;

impl RunLogger for NoRunLogger {
    fn log(&self, _event: RunEvent) {}
}
