//! Commit-point semantics over a host-supplied repository double.

use chrono::NaiveDate;
use docketline_core::{
    AnchorPatch, CaseSchedule, EventCategory, NewManualEvent, Patch, RepoError, RepoResult,
    ScheduleRepository, ScheduleService,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// In-memory repository standing in for a host key-value store. Saves can
/// be made to fail on demand to exercise commit-point behavior.
#[derive(Clone, Default)]
struct MemoryRepository {
    inner: Rc<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    stored: RefCell<HashMap<String, CaseSchedule>>,
    fail_saves: Cell<bool>,
    save_count: Cell<u32>,
}

impl ScheduleRepository for MemoryRepository {
    fn load(&self, case_id: &str) -> RepoResult<Option<CaseSchedule>> {
        Ok(self.inner.stored.borrow().get(case_id).cloned())
    }

    fn save(&self, schedule: &CaseSchedule) -> RepoResult<()> {
        if self.inner.fail_saves.get() {
            return Err(RepoError::InvalidPayload(
                "simulated write failure".to_string(),
            ));
        }
        self.inner.save_count.set(self.inner.save_count.get() + 1);
        self.inner
            .stored
            .borrow_mut()
            .insert(schedule.case_id.clone(), schedule.clone());
        Ok(())
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn trial_patch() -> AnchorPatch {
    AnchorPatch {
        trial_date: Patch::Set(day(2026, 10, 5)),
        ..AnchorPatch::default()
    }
}

#[test]
fn a_failed_save_rejects_the_whole_mutation() {
    let repo = MemoryRepository::default();
    let mut store = ScheduleService::new(repo.clone());

    store.set_anchors("case-1", trial_patch()).unwrap();
    let before = store.export_events("case-1").unwrap();

    repo.inner.fail_saves.set(true);

    let err = store
        .set_anchors(
            "case-1",
            AnchorPatch {
                trial_date: Patch::Clear,
                ..AnchorPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidPayload(_)));

    assert!(store
        .add_manual_event(
            "case-1",
            NewManualEvent {
                title: "doomed".to_string(),
                date: day(2026, 9, 1),
                category: EventCategory::Trial,
                note: None,
            },
        )
        .is_err());
    assert!(store.toggle_completed("case-1", "discovery-cutoff").is_err());
    assert!(store.remove_event("case-1", "discovery-cutoff").is_err());

    // In-memory state still matches the last durable state.
    assert_eq!(store.export_events("case-1").unwrap(), before);

    // And the store recovers once persistence does.
    repo.inner.fail_saves.set(false);
    store.toggle_completed("case-1", "discovery-cutoff").unwrap();
    assert!(store
        .export_events("case-1")
        .unwrap()
        .iter()
        .any(|event| event.id == "discovery-cutoff" && event.completed));
}

#[test]
fn no_op_mutations_do_not_touch_persistence() {
    let repo = MemoryRepository::default();
    let mut store = ScheduleService::new(repo.clone());

    store.set_anchors("case-1", trial_patch()).unwrap();
    let saves_after_setup = repo.inner.save_count.get();

    store.remove_event("case-1", "no-such-event").unwrap();
    store.toggle_completed("case-1", "no-such-event").unwrap();

    assert_eq!(repo.inner.save_count.get(), saves_after_setup);
}

#[test]
fn queries_hydrate_without_writing() {
    let repo = MemoryRepository::default();
    let mut store = ScheduleService::new(repo.clone());

    store.export_events("case-1").unwrap();
    store.events_for_month("case-1", day(2026, 6, 1)).unwrap();

    assert_eq!(repo.inner.save_count.get(), 0);
    assert!(repo.inner.stored.borrow().is_empty());
}
