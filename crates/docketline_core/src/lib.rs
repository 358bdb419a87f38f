//! Deadline scheduling engine for litigation cases.
//! This crate is the single source of truth for deadline computation
//! invariants: rule resolution, reconciliation and the schedule store.

pub mod dates;
pub mod db;
pub mod logging;
pub mod model;
pub mod reconcile;
pub mod repo;
pub mod resolve;
pub mod rules;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::anchors::{AnchorKind, AnchorPatch, CaseAnchors, CaseFlags, Patch};
pub use model::event::{CalendarEvent, EventCategory, EventSource, MANUAL_ID_PREFIX};
pub use model::schedule::CaseSchedule;
pub use reconcile::reconcile;
pub use repo::schedule_repo::{
    RepoError, RepoResult, ScheduleRepository, SqliteScheduleRepository,
};
pub use resolve::{resolve_case_events, resolve_events};
pub use rules::catalog::{base_catalog, DeadlineRule, RuleVisibility};
pub use rules::jurisdiction::{
    extensions, matching_extensions, ExtensionRule, JurisdictionExtension,
};
pub use rules::offset::OffsetSpec;
pub use service::schedule_service::{NewManualEvent, ScheduleService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
