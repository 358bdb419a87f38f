use chrono::NaiveDate;
use docketline_core::db::open_db_in_memory;
use docketline_core::{
    AnchorPatch, CalendarEvent, EventCategory, EventSource, NewManualEvent, Patch,
    ScheduleService, SqliteScheduleRepository, MANUAL_ID_PREFIX,
};
use rusqlite::Connection;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn service(conn: &Connection) -> ScheduleService<SqliteScheduleRepository<'_>> {
    ScheduleService::new(SqliteScheduleRepository::try_new(conn).unwrap())
}

fn trial_patch() -> AnchorPatch {
    AnchorPatch {
        trial_date: Patch::Set(day(2026, 10, 5)),
        ..AnchorPatch::default()
    }
}

fn find<'a>(events: &'a [CalendarEvent], id: &str) -> Option<&'a CalendarEvent> {
    events.iter().find(|event| event.id == id)
}

#[test]
fn set_anchors_generates_a_dated_checklist() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    store.set_anchors("case-1", trial_patch()).unwrap();

    let events = store.export_events("case-1").unwrap();
    assert!(!events.is_empty());
    assert_eq!(find(&events, "discovery-cutoff").unwrap().date, day(2026, 9, 5));
    assert!(events.windows(2).all(|pair| pair[0].date <= pair[1].date));
}

#[test]
fn unknown_cases_initialize_lazily() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    assert!(store.export_events("never-seen").unwrap().is_empty());
    assert!(store
        .events_for_month("never-seen", day(2026, 6, 1))
        .unwrap()
        .is_empty());

    // All-null anchors are a valid write producing zero automatic events.
    store.set_anchors("never-seen", AnchorPatch::default()).unwrap();
    assert!(store.export_events("never-seen").unwrap().is_empty());
}

#[test]
fn completion_survives_unrelated_anchor_changes() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    store.set_anchors("case-1", trial_patch()).unwrap();
    store.toggle_completed("case-1", "discovery-cutoff").unwrap();

    store
        .set_anchors(
            "case-1",
            AnchorPatch {
                msc_date: Patch::Set(day(2026, 8, 17)),
                ..AnchorPatch::default()
            },
        )
        .unwrap();

    let events = store.export_events("case-1").unwrap();
    assert!(find(&events, "discovery-cutoff").unwrap().completed);
    assert!(find(&events, "msc-appearance").is_some());
}

#[test]
fn completion_is_lost_when_the_rule_disappears() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    store.set_anchors("case-1", trial_patch()).unwrap();
    store.toggle_completed("case-1", "discovery-cutoff").unwrap();

    store
        .set_anchors(
            "case-1",
            AnchorPatch {
                trial_date: Patch::Clear,
                ..AnchorPatch::default()
            },
        )
        .unwrap();
    let events = store.export_events("case-1").unwrap();
    assert!(find(&events, "discovery-cutoff").is_none());

    // Re-setting the same trial date regenerates the event uncompleted.
    store.set_anchors("case-1", trial_patch()).unwrap();
    let events = store.export_events("case-1").unwrap();
    assert!(!find(&events, "discovery-cutoff").unwrap().completed);
}

#[test]
fn manual_events_survive_every_anchor_change() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    let manual_id = store
        .add_manual_event(
            "case-1",
            NewManualEvent {
                title: "Client prep call".to_string(),
                date: day(2026, 9, 1),
                category: EventCategory::Trial,
                note: Some("internal".to_string()),
            },
        )
        .unwrap();
    assert!(manual_id.starts_with(MANUAL_ID_PREFIX));

    store.toggle_completed("case-1", &manual_id).unwrap();

    store.set_anchors("case-1", trial_patch()).unwrap();
    store
        .set_anchors(
            "case-1",
            AnchorPatch {
                trial_date: Patch::Clear,
                ..AnchorPatch::default()
            },
        )
        .unwrap();
    store.set_anchors("case-1", trial_patch()).unwrap();

    let events = store.export_events("case-1").unwrap();
    let manual = find(&events, &manual_id).unwrap();
    assert_eq!(manual.title, "Client prep call");
    assert_eq!(manual.date, day(2026, 9, 1));
    assert_eq!(manual.source, EventSource::Manual);
    assert!(manual.completed);
}

#[test]
fn month_window_is_inclusive_of_both_ends() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    for (title, date) in [
        ("late May", day(2026, 5, 31)),
        ("first of June", day(2026, 6, 1)),
        ("last of June", day(2026, 6, 30)),
        ("first of July", day(2026, 7, 1)),
    ] {
        store
            .add_manual_event(
                "case-1",
                NewManualEvent {
                    title: title.to_string(),
                    date,
                    category: EventCategory::Discovery,
                    note: None,
                },
            )
            .unwrap();
    }

    let june = store.events_for_month("case-1", day(2026, 6, 1)).unwrap();
    let titles: Vec<_> = june.iter().map(|event| event.title.as_str()).collect();
    assert_eq!(titles, vec!["first of June", "last of June"]);

    // Any day inside the month selects the same window.
    let mid_june = store.events_for_month("case-1", day(2026, 6, 15)).unwrap();
    assert_eq!(june, mid_june);
}

#[test]
fn removing_an_automatic_event_is_not_sticky() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    store.set_anchors("case-1", trial_patch()).unwrap();
    store.remove_event("case-1", "discovery-cutoff").unwrap();
    assert!(find(&store.export_events("case-1").unwrap(), "discovery-cutoff").is_none());

    // Any later anchor write re-derives the removed automatic event.
    store
        .set_anchors(
            "case-1",
            AnchorPatch {
                msc_date: Patch::Set(day(2026, 8, 17)),
                ..AnchorPatch::default()
            },
        )
        .unwrap();
    let regenerated = store.export_events("case-1").unwrap();
    let cutoff = find(&regenerated, "discovery-cutoff").unwrap();
    assert!(!cutoff.completed);
}

#[test]
fn unknown_event_ids_are_tolerated() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    store.set_anchors("case-1", trial_patch()).unwrap();
    let before = store.export_events("case-1").unwrap();

    store.remove_event("case-1", "no-such-event").unwrap();
    store.toggle_completed("case-1", "no-such-event").unwrap();

    assert_eq!(store.export_events("case-1").unwrap(), before);
}

#[test]
fn jurisdiction_and_flags_flow_through_the_store() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    store
        .set_anchors(
            "case-1",
            AnchorPatch {
                trial_date: Patch::Set(day(2026, 10, 5)),
                jurisdiction: Patch::Set("Orange County Superior".to_string()),
                ocsc_enabled: Some(true),
                ..AnchorPatch::default()
            },
        )
        .unwrap();

    let events = store.export_events("case-1").unwrap();
    assert!(find(&events, "orange-1").is_some());
    assert!(find(&events, "issues-conference").is_some());
    assert!(find(&events, "discovery-cutoff").is_some());

    let anchors = store.anchors("case-1").unwrap();
    assert_eq!(anchors.jurisdiction.as_deref(), Some("Orange County Superior"));
    assert!(anchors.flags.ocsc_enabled);
}

#[test]
fn cases_are_isolated_from_each_other() {
    let conn = open_db_in_memory().unwrap();
    let mut store = service(&conn);

    store.set_anchors("case-1", trial_patch()).unwrap();
    assert!(store.export_events("case-2").unwrap().is_empty());

    store.toggle_completed("case-1", "discovery-cutoff").unwrap();
    store.set_anchors("case-2", trial_patch()).unwrap();
    assert!(!find(&store.export_events("case-2").unwrap(), "discovery-cutoff")
        .unwrap()
        .completed);
}

#[test]
fn a_fresh_store_rehydrates_from_persistence() {
    let conn = open_db_in_memory().unwrap();

    let manual_id = {
        let mut store = service(&conn);
        store.set_anchors("case-1", trial_patch()).unwrap();
        store.toggle_completed("case-1", "discovery-cutoff").unwrap();
        store
            .add_manual_event(
                "case-1",
                NewManualEvent {
                    title: "Client prep call".to_string(),
                    date: day(2026, 9, 1),
                    category: EventCategory::Trial,
                    note: None,
                },
            )
            .unwrap()
    };

    // New store instance over the same database: anchors, completion and
    // manual events come back; automatic dates are recomputed, not read.
    let mut reloaded = service(&conn);
    let events = reloaded.export_events("case-1").unwrap();
    assert!(find(&events, "discovery-cutoff").unwrap().completed);
    assert_eq!(find(&events, "discovery-cutoff").unwrap().date, day(2026, 9, 5));
    assert!(find(&events, &manual_id).is_some());
    assert_eq!(
        reloaded.anchors("case-1").unwrap().trial_date,
        Some(day(2026, 10, 5))
    );
}
