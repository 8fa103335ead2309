//! Audit trail port for survey navigation.
//!
//! Every decision that moves a respondent is reported to a
//! [`NavigationLogger`]: the activation verdict for a survey, the first
//! question of a new response, each resolved answer and every forced
//! termination. An adapter can replay a response from these records alone.
//!
//! Diagnostics still go through `tracing`. The audit trail is data about
//! responses, kept apart so it can be retained and queried on its own.

use serde_json::Value;

/// One audit record: a fixed event name and its fields.
pub struct NavigationEvent {
    /// One of `survey_validated`, `session_started`, `answer_resolved`
    /// or `session_terminated`.
    pub event_type: &'static str,
    /// Fields of the event, usually a JSON object keyed by id names.
    pub payload: Value,
}

impl NavigationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Receives navigation audit records.
///
/// Recording cannot fail from the caller's side: where a respondent goes
/// next never depends on whether the record was written.
pub trait NavigationLogger: Send + Sync {
    fn log(&self, event: NavigationEvent);
}

/// Discards every record; used when no audit log is configured.
pub struct NoNavigationLogger;

impl NavigationLogger for NoNavigationLogger {
    fn log(&self, _event: NavigationEvent) {}
}
