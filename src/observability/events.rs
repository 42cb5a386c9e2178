//! Observability events for voltform
//!
//! Defines all observable events that can occur while loading, editing and
//! recomputing reports.
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in voltform
///
/// These events cover:
/// - Report I/O
/// - Edit application
/// - Recompute passes
/// - Display classification
/// - Configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Report I/O
    /// Report document read and parsed
    ReportLoaded,
    /// Report document written out
    ReportSaved,

    // Edits
    /// One edit operation applied
    EditApplied,
    /// Edit batch rejected before anything was applied
    EditRejected,

    // Recompute
    /// Recompute pipeline begins
    RecomputeBegin,
    /// Recompute pipeline complete
    RecomputeComplete,

    // Display classification
    /// Section list built
    SectionsBuilt,
    /// Leaf fields classified
    FieldsClassified,

    // Configuration
    /// Report profile loaded
    ProfileLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            // Report I/O
            Event::ReportLoaded => "REPORT_LOADED",
            Event::ReportSaved => "REPORT_SAVED",

            // Edits
            Event::EditApplied => "EDIT_APPLIED",
            Event::EditRejected => "EDIT_REJECTED",

            // Recompute
            Event::RecomputeBegin => "RECOMPUTE_BEGIN",
            Event::RecomputeComplete => "RECOMPUTE_COMPLETE",

            // Display classification
            Event::SectionsBuilt => "SECTIONS_BUILT",
            Event::FieldsClassified => "FIELDS_CLASSIFIED",

            // Configuration
            Event::ProfileLoaded => "PROFILE_LOADED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Event::EditRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ReportLoaded,
            Event::ReportSaved,
            Event::EditApplied,
            Event::EditRejected,
            Event::RecomputeBegin,
            Event::RecomputeComplete,
            Event::SectionsBuilt,
            Event::FieldsClassified,
            Event::ProfileLoaded,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            // Verify all uppercase format
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_error_events() {
        assert!(Event::EditRejected.is_error());
        assert!(!Event::ReportLoaded.is_error());
        assert!(!Event::RecomputeComplete.is_error());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::ReportLoaded), "REPORT_LOADED");
        assert_eq!(format!("{}", Event::RecomputeComplete), "RECOMPUTE_COMPLETE");
    }
}
