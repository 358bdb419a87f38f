//! Temporal anchors and partial anchor updates.
//!
//! # Responsibility
//! - Hold the per-case dates and flags every deadline is computed from.
//! - Express partial updates, including explicit clearing, as data.
//!
//! # Invariants
//! - Anchors are plain calendar dates; no time zones, no timestamps.
//! - An unset anchor silently suppresses every rule that references it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The anchor dates a rule offset can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    /// First day of trial.
    Trial,
    /// Date expert witness lists were exchanged.
    ExpertExchange,
    /// Date the trial date itself was set.
    TrialSet,
    /// Mandatory settlement conference date.
    Msc,
}

/// Named boolean case attributes consulted by rule visibility gates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFlags {
    /// Orange County Superior Court procedure opt-in.
    #[serde(default)]
    pub ocsc_enabled: bool,
}

/// Case-level inputs the resolver computes deadlines from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseAnchors {
    #[serde(default)]
    pub trial_date: Option<NaiveDate>,
    #[serde(default)]
    pub expert_exchange_date: Option<NaiveDate>,
    #[serde(default)]
    pub trial_set_date: Option<NaiveDate>,
    #[serde(default)]
    pub msc_date: Option<NaiveDate>,
    /// Free-text court/county label, matched by substring against the
    /// jurisdiction extension registry.
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub flags: CaseFlags,
}

impl CaseAnchors {
    /// Returns the concrete date for one anchor, if set.
    pub fn date(&self, anchor: AnchorKind) -> Option<NaiveDate> {
        match anchor {
            AnchorKind::Trial => self.trial_date,
            AnchorKind::ExpertExchange => self.expert_exchange_date,
            AnchorKind::TrialSet => self.trial_set_date,
            AnchorKind::Msc => self.msc_date,
        }
    }

    /// Merges a partial update into these anchors.
    pub fn apply(&mut self, patch: AnchorPatch) {
        self.trial_date = patch.trial_date.apply(self.trial_date);
        self.expert_exchange_date = patch.expert_exchange_date.apply(self.expert_exchange_date);
        self.trial_set_date = patch.trial_set_date.apply(self.trial_set_date);
        self.msc_date = patch.msc_date.apply(self.msc_date);
        self.jurisdiction = patch.jurisdiction.apply(self.jurisdiction.take());
        if let Some(ocsc_enabled) = patch.ocsc_enabled {
            self.flags.ocsc_enabled = ocsc_enabled;
        }
    }
}

/// Tri-state field update: leave alone, clear, or replace.
///
/// Distinguishing "not mentioned" from "explicitly cleared" is what lets a
/// caller null out a trial date without touching the other anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    Keep,
    Clear,
    Set(T),
}

// Hand-written so `Patch<T>: Default` does not require `T: Default`.
impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> Patch<T> {
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }
}

/// Partial anchor update applied by `ScheduleService::set_anchors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorPatch {
    pub trial_date: Patch<NaiveDate>,
    pub expert_exchange_date: Patch<NaiveDate>,
    pub trial_set_date: Patch<NaiveDate>,
    pub msc_date: Patch<NaiveDate>,
    pub jurisdiction: Patch<String>,
    /// `None` keeps the current flag value.
    pub ocsc_enabled: Option<bool>,
}
