//! Calendar event record.
//!
//! # Responsibility
//! - Define the single event shape shared by automatic deadlines and
//!   user-authored entries.
//! - Own the manual-event id scheme.
//!
//! # Invariants
//! - For `source == Auto` the id equals the generating rule id, so one
//!   case carries at most one automatic event per rule.
//! - For `source == Manual` the id is generated once at creation and is
//!   namespaced with the `manual-` prefix.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix reserved for user-authored event ids.
///
/// Rule ids never start with this prefix, which is what guarantees that
/// manual ids cannot collide with automatic ones.
pub const MANUAL_ID_PREFIX: &str = "manual-";

/// Display category for calendar rendering and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Pleadings,
    Discovery,
    Motions,
    Trial,
}

/// Origin of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    /// Produced by resolving a catalog or jurisdiction rule.
    Auto,
    /// Authored by the user; never regenerated or altered by recomputation.
    Manual,
}

/// One dated entry on a case calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Rule id for automatic events, `manual-<uuid>` for manual ones.
    pub id: String,
    pub case_id: String,
    pub title: String,
    /// Statute / local-rule citation or free-form annotation. Display only.
    pub note: Option<String>,
    /// Concrete calendar date. Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub category: EventCategory,
    pub source: EventSource,
    pub completed: bool,
}

impl CalendarEvent {
    pub fn is_manual(&self) -> bool {
        self.source == EventSource::Manual
    }
}

/// Generates a fresh manual event id.
pub fn manual_event_id() -> String {
    format!("{MANUAL_ID_PREFIX}{}", Uuid::new_v4())
}
