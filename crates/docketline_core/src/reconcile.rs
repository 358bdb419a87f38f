//! Event reconciler: merge freshly resolved events with stored state.
//!
//! # Responsibility
//! - Replace the automatic subset of a case's events wholesale while
//!   carrying forward completion flags by rule id.
//! - Preserve manual events verbatim.
//!
//! # Invariants
//! - Manual events are never mutated or dropped here.
//! - An automatic event whose rule no longer resolves disappears together
//!   with its completion state; re-resolving later starts it uncompleted.

use crate::model::event::CalendarEvent;
use std::collections::HashMap;

/// Merges `fresh_auto` (newly resolved automatic events) into `previous`
/// (the case's stored event list).
pub fn reconcile(
    previous: Vec<CalendarEvent>,
    fresh_auto: Vec<CalendarEvent>,
) -> Vec<CalendarEvent> {
    let (manual, auto_previous): (Vec<_>, Vec<_>) =
        previous.into_iter().partition(CalendarEvent::is_manual);

    let completion: HashMap<String, bool> = auto_previous
        .into_iter()
        .map(|event| (event.id, event.completed))
        .collect();

    let mut events = manual;
    events.extend(fresh_auto.into_iter().map(|mut event| {
        event.completed = completion.get(&event.id).copied().unwrap_or(false);
        event
    }));
    events
}
