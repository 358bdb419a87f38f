//! Case schedule store.
//!
//! # Responsibility
//! - Own per-case schedule state and expose the mutation/query API.
//! - Recompute the automatic event subset on every anchor change via the
//!   resolver and reconciler.
//! - Persist through an injected repository; the write is the commit
//!   point for every mutation.
//!
//! # Invariants
//! - A failed persistence write leaves the in-memory schedule unchanged;
//!   mutations are applied all-or-nothing.
//! - Automatic events are recomputed from anchors and the rule tables on
//!   every load; stored copies contribute completion flags only.
//! - Operations on unknown case ids lazily initialize an empty schedule;
//!   unknown event ids are no-ops.

use crate::dates::month_bounds;
use crate::model::anchors::{AnchorPatch, CaseAnchors};
use crate::model::event::{manual_event_id, CalendarEvent, EventCategory, EventSource};
use crate::model::schedule::CaseSchedule;
use crate::reconcile::reconcile;
use crate::repo::schedule_repo::{RepoResult, ScheduleRepository};
use crate::resolve::resolve_case_events;
use chrono::NaiveDate;
use log::info;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::mem;

/// Request model for adding a user-authored event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewManualEvent {
    pub title: String,
    pub date: NaiveDate,
    pub category: EventCategory,
    pub note: Option<String>,
}

/// Schedule store over an injected repository.
///
/// One instance serves many cases; each case's state is hydrated lazily
/// from the repository on first touch.
pub struct ScheduleService<R: ScheduleRepository> {
    repo: R,
    cases: HashMap<String, CaseSchedule>,
}

impl<R: ScheduleRepository> ScheduleService<R> {
    /// Creates a store using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            cases: HashMap::new(),
        }
    }

    /// Merges a partial anchor update and regenerates automatic events.
    ///
    /// # Contract
    /// - Manual events survive untouched; completion flags carry over to
    ///   automatic events whose rule still resolves.
    /// - The updated schedule is persisted before memory is replaced.
    pub fn set_anchors(&mut self, case_id: &str, patch: AnchorPatch) -> RepoResult<()> {
        let mut next = self.hydrated(case_id)?.clone();
        next.anchors.apply(patch);

        let auto = resolve_case_events(case_id, &next.anchors);
        let auto_count = auto.len();
        let previous = mem::take(&mut next.events);
        next.events = reconcile(previous, auto);

        self.commit(case_id, next)?;
        info!(
            "event=anchors_set module=schedule status=ok case_id={case_id} auto_events={auto_count}"
        );
        Ok(())
    }

    /// Appends a user-authored event and returns its generated id.
    pub fn add_manual_event(
        &mut self,
        case_id: &str,
        request: NewManualEvent,
    ) -> RepoResult<String> {
        let mut next = self.hydrated(case_id)?.clone();
        let event = CalendarEvent {
            id: manual_event_id(),
            case_id: case_id.to_string(),
            title: request.title,
            note: request.note,
            date: request.date,
            category: request.category,
            source: EventSource::Manual,
            completed: false,
        };
        let event_id = event.id.clone();
        next.events.push(event);

        self.commit(case_id, next)?;
        info!(
            "event=manual_event_added module=schedule status=ok case_id={case_id} event_id={event_id}"
        );
        Ok(event_id)
    }

    /// Removes one event by id, regardless of source.
    ///
    /// Removing an automatic event is not sticky: the next anchor write
    /// regenerates it. Unknown ids are a no-op.
    pub fn remove_event(&mut self, case_id: &str, event_id: &str) -> RepoResult<()> {
        let mut next = self.hydrated(case_id)?.clone();
        let before = next.events.len();
        next.events.retain(|event| event.id != event_id);
        if next.events.len() == before {
            return Ok(());
        }

        self.commit(case_id, next)?;
        info!(
            "event=event_removed module=schedule status=ok case_id={case_id} event_id={event_id}"
        );
        Ok(())
    }

    /// Flips the completion flag of one event. Unknown ids are a no-op.
    pub fn toggle_completed(&mut self, case_id: &str, event_id: &str) -> RepoResult<()> {
        let mut next = self.hydrated(case_id)?.clone();
        let Some(event) = next.events.iter_mut().find(|event| event.id == event_id) else {
            return Ok(());
        };
        event.completed = !event.completed;
        let completed = event.completed;

        self.commit(case_id, next)?;
        info!(
            "event=event_toggled module=schedule status=ok case_id={case_id} event_id={event_id} completed={completed}"
        );
        Ok(())
    }

    /// Returns events within the calendar month containing `month_start`,
    /// inclusive of both month ends, sorted by date then id.
    pub fn events_for_month(
        &mut self,
        case_id: &str,
        month_start: NaiveDate,
    ) -> RepoResult<Vec<CalendarEvent>> {
        let (start, end) = month_bounds(month_start);
        let schedule = self.hydrated(case_id)?;
        let mut events: Vec<_> = schedule
            .events
            .iter()
            .filter(|event| event.date >= start && event.date <= end)
            .cloned()
            .collect();
        sort_for_display(&mut events);
        Ok(events)
    }

    /// Returns the full current event list, sorted by date then id.
    pub fn export_events(&mut self, case_id: &str) -> RepoResult<Vec<CalendarEvent>> {
        let schedule = self.hydrated(case_id)?;
        let mut events = schedule.events.clone();
        sort_for_display(&mut events);
        Ok(events)
    }

    /// Returns a snapshot of the case's current anchors.
    pub fn anchors(&mut self, case_id: &str) -> RepoResult<CaseAnchors> {
        Ok(self.hydrated(case_id)?.anchors.clone())
    }

    /// Returns the in-memory schedule, loading (and re-reconciling) it
    /// from the repository on first touch.
    fn hydrated(&mut self, case_id: &str) -> RepoResult<&mut CaseSchedule> {
        match self.cases.entry(case_id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let schedule = match self.repo.load(case_id)? {
                    // Stored automatic events are only a completion source;
                    // dates and rule membership come from the current
                    // catalog.
                    Some(mut stored) => {
                        let auto = resolve_case_events(case_id, &stored.anchors);
                        let previous = mem::take(&mut stored.events);
                        stored.events = reconcile(previous, auto);
                        stored
                    }
                    None => CaseSchedule::new(case_id),
                };
                Ok(entry.insert(schedule))
            }
        }
    }

    /// Persists `next` and, only on success, makes it the in-memory state.
    fn commit(&mut self, case_id: &str, next: CaseSchedule) -> RepoResult<()> {
        self.repo.save(&next)?;
        self.cases.insert(case_id.to_string(), next);
        Ok(())
    }
}

fn sort_for_display(events: &mut [CalendarEvent]) {
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
}
