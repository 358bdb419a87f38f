//! Date resolver: rule tables + anchors -> automatic events.
//!
//! # Responsibility
//! - Turn the visible, resolvable subset of the rule tables into dated
//!   automatic events for one case.
//!
//! # Invariants
//! - Deterministic and side-effect free: identical inputs yield an
//!   identical event list, field for field.
//! - Rules referencing unset anchors are omitted silently; missing data
//!   narrows the schedule instead of producing placeholder rows.
//! - Output order is not significant; callers sort for display.

use crate::model::anchors::CaseAnchors;
use crate::model::event::{CalendarEvent, EventSource};
use crate::rules::catalog::{base_catalog, DeadlineRule};
use crate::rules::jurisdiction::{matching_extensions, JurisdictionExtension};

/// Resolves automatic events from explicit rule tables.
///
/// The production path is [`resolve_case_events`]; this variant exists so
/// tests can drive reduced catalogs.
pub fn resolve_events(
    catalog: &[DeadlineRule],
    extensions: &[&JurisdictionExtension],
    case_id: &str,
    anchors: &CaseAnchors,
) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for rule in catalog {
        if !rule.visible(&anchors.flags) {
            continue;
        }
        let Some(date) = rule.offset.resolve(anchors) else {
            continue;
        };
        events.push(CalendarEvent {
            id: rule.id.to_string(),
            case_id: case_id.to_string(),
            title: rule.title.to_string(),
            note: Some(rule.reference.to_string()),
            date,
            category: rule.category,
            source: EventSource::Auto,
            completed: false,
        });
    }

    for set in extensions {
        for rule in &set.rules {
            let Some(date) = rule.offset.resolve(anchors) else {
                continue;
            };
            events.push(CalendarEvent {
                id: rule.id.to_string(),
                case_id: case_id.to_string(),
                title: rule.title.to_string(),
                note: Some(rule.reference.to_string()),
                date,
                category: rule.category,
                source: EventSource::Auto,
                completed: false,
            });
        }
    }

    events
}

/// Resolves automatic events using the built-in catalog and the extension
/// sets matching the case's jurisdiction label.
pub fn resolve_case_events(case_id: &str, anchors: &CaseAnchors) -> Vec<CalendarEvent> {
    let extensions = anchors
        .jurisdiction
        .as_deref()
        .map(matching_extensions)
        .unwrap_or_default();
    resolve_events(base_catalog(), &extensions, case_id, anchors)
}
