//! Offset specification and date resolution.
//!
//! # Responsibility
//! - Express every supported deadline offset as one exhaustive sum type.
//! - Resolve a specification to a concrete date against case anchors.
//!
//! # Invariants
//! - Resolution is pure: identical anchors always yield identical dates.
//! - A specification referencing an unset anchor resolves to `None`; it is
//!   never treated as zero or an epoch date.

use crate::dates::{
    add_calendar_days, later, nearest_weekday_before, subtract_calendar_days, subtract_court_days,
};
use crate::model::anchors::{AnchorKind, CaseAnchors};
use chrono::{NaiveDate, Weekday};

/// How a deadline date is derived from case anchors.
///
/// Each variant names one offset algorithm; parameters are plain data so
/// the whole catalog is inspectable without running anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetSpec {
    /// `days` calendar days before the anchor.
    Before { anchor: AnchorKind, days: i64 },
    /// `days` court days (Monday–Friday only) before the anchor.
    CourtDaysBefore { anchor: AnchorKind, days: u32 },
    /// Nearest `weekday` strictly before the anchor.
    WeekdayBefore { anchor: AnchorKind, weekday: Weekday },
    /// `days` calendar days after the anchor.
    After { anchor: AnchorKind, days: i64 },
    /// Later of two sub-specifications; degrades to the resolvable side
    /// when the other references an unset anchor.
    LaterOf(Box<OffsetSpec>, Box<OffsetSpec>),
}

impl OffsetSpec {
    /// `days` calendar days before the trial date.
    pub fn before_trial(days: i64) -> Self {
        Self::Before {
            anchor: AnchorKind::Trial,
            days,
        }
    }

    /// `days` calendar days after an anchor.
    pub fn after(anchor: AnchorKind, days: i64) -> Self {
        Self::After { anchor, days }
    }

    /// Later of two sub-specifications.
    pub fn later_of(a: Self, b: Self) -> Self {
        Self::LaterOf(Box::new(a), Box::new(b))
    }

    /// Resolves this specification to a concrete date.
    ///
    /// Returns `None` when a required anchor is unset; for `LaterOf`, only
    /// when both sides are unresolved.
    pub fn resolve(&self, anchors: &CaseAnchors) -> Option<NaiveDate> {
        match self {
            Self::Before { anchor, days } => anchors
                .date(*anchor)
                .map(|date| subtract_calendar_days(date, *days)),
            Self::CourtDaysBefore { anchor, days } => anchors
                .date(*anchor)
                .map(|date| subtract_court_days(date, *days)),
            Self::WeekdayBefore { anchor, weekday } => anchors
                .date(*anchor)
                .map(|date| nearest_weekday_before(date, *weekday)),
            Self::After { anchor, days } => anchors
                .date(*anchor)
                .map(|date| add_calendar_days(date, *days)),
            Self::LaterOf(a, b) => later(a.resolve(anchors), b.resolve(anchors)),
        }
    }
}
