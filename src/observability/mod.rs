//! Observability subsystem for voltform
//!
//! This module provides:
//! - Structured logging (JSON)
//! - Lifecycle event tracing
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//! 5. stderr only, so stdout stays machine-parseable
//!
//! # Usage
//!
//! ```ignore
//! use voltform::observability::{log_event_with_fields, Event, Logger};
//!
//! // Log a lifecycle event
//! log_event_with_fields(Event::RecomputeComplete, &[("tcf", "1.25")]);
//!
//! // Or log ad hoc
//! Logger::info("REPORT_LOADED", &[("bytes", "2048")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_error() {
        Severity::Error
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::ReportLoaded);
        log_event(Event::RecomputeComplete);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::ProfileLoaded, &[("tcf_mode", "exact_or_default")]);
    }
}
