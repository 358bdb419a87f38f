//! Case schedule aggregate.
//!
//! # Responsibility
//! - Tie anchors and the current event list to one case id.
//! - Provide the serializable shape persisted by the repository layer.
//!
//! # Invariants
//! - The automatic subset of `events` is derived from `anchors` and the
//!   rule tables; stored copies are re-resolved on load and are only read
//!   back for completion carry-over, never trusted verbatim.
//! - The manual subset of `events` is authoritative and survives every
//!   recomputation untouched.

use crate::model::anchors::CaseAnchors;
use crate::model::event::CalendarEvent;
use serde::{Deserialize, Serialize};

/// Per-case schedule state: anchors plus the merged event list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSchedule {
    pub case_id: String,
    #[serde(default)]
    pub anchors: CaseAnchors,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

impl CaseSchedule {
    /// Creates an empty schedule for a case.
    ///
    /// Used for lazy initialization: operations on an unknown case start
    /// from this state instead of failing.
    pub fn new(case_id: impl Into<String>) -> Self {
        Self {
            case_id: case_id.into(),
            anchors: CaseAnchors::default(),
            events: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CaseSchedule;
    use crate::model::event::{CalendarEvent, EventCategory, EventSource};
    use chrono::NaiveDate;

    #[test]
    fn new_schedule_is_empty() {
        let schedule = CaseSchedule::new("case-1");
        assert_eq!(schedule.case_id, "case-1");
        assert!(schedule.events.is_empty());
        assert_eq!(schedule.anchors.trial_date, None);
    }

    #[test]
    fn schedule_round_trips_through_json() {
        let mut schedule = CaseSchedule::new("case-1");
        schedule.anchors.trial_date = NaiveDate::from_ymd_opt(2026, 10, 5);
        schedule.events.push(CalendarEvent {
            id: "manual-0e3f".to_string(),
            case_id: "case-1".to_string(),
            title: "Client prep call".to_string(),
            note: None,
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            category: EventCategory::Trial,
            source: EventSource::Manual,
            completed: true,
        });

        let json = serde_json::to_string(&schedule).unwrap();
        let back: CaseSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
