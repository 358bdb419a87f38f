//! Statewide deadline rule catalog.
//!
//! # Responsibility
//! - Register every generic (non-jurisdiction) deadline rule as one
//!   immutable record: id, title, category, offset and citation note.
//! - Gate jurisdiction-opt-in rules behind case flag visibility.
//!
//! # Invariants
//! - Ids are stable across releases and never reused for a different
//!   deadline; completion carry-over keys on them.
//! - Day offsets are procedural constants (CCP timing rules) and are
//!   carried verbatim, not derived.

use crate::model::anchors::{AnchorKind, CaseFlags};
use crate::model::event::EventCategory;
use crate::rules::offset::OffsetSpec;
use chrono::Weekday;
use once_cell::sync::Lazy;

/// Case-flag gate controlling whether a rule applies at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleVisibility {
    /// Only for cases opted into Orange County Superior Court procedures.
    OcscOnly,
}

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineRule {
    /// Stable id; doubles as the automatic event id for this rule.
    pub id: &'static str,
    pub title: &'static str,
    pub category: EventCategory,
    pub offset: OffsetSpec,
    pub visible_if: Option<RuleVisibility>,
    /// Plain-language timing note shown alongside the event.
    pub reference: &'static str,
}

impl DeadlineRule {
    /// Evaluates this rule's visibility gate against case flags.
    pub fn visible(&self, flags: &CaseFlags) -> bool {
        match self.visible_if {
            None => true,
            Some(RuleVisibility::OcscOnly) => flags.ocsc_enabled,
        }
    }
}

fn rule(
    id: &'static str,
    title: &'static str,
    category: EventCategory,
    offset: OffsetSpec,
    reference: &'static str,
) -> DeadlineRule {
    DeadlineRule {
        id,
        title,
        category,
        offset,
        visible_if: None,
        reference,
    }
}

static CATALOG: Lazy<Vec<DeadlineRule>> = Lazy::new(|| {
    use EventCategory::{Discovery, Motions, Pleadings, Trial};
    use OffsetSpec as O;

    vec![
        // Pleadings
        rule(
            "joint-stmt",
            "Reminder to prepare joint stmt. of case/wit. list; jury instructions, exhibits",
            Pleadings,
            O::WeekdayBefore {
                anchor: AnchorKind::Trial,
                weekday: Weekday::Fri,
            },
            "Friday before trial",
        ),
        rule(
            "motions-limine",
            "All motions in limine to be served",
            Pleadings,
            O::before_trial(10),
            "10 days before trial",
        ),
        rule(
            "offer-compromise-personal",
            "Last Day to Serve Offer to Compromise (CCP §998)",
            Pleadings,
            O::before_trial(10),
            "10 days before trial",
        ),
        DeadlineRule {
            id: "issues-conference",
            title: "Hold Issues Conference (OC Rule 317 - OCSC only)",
            category: Pleadings,
            offset: O::before_trial(10),
            visible_if: Some(RuleVisibility::OcscOnly),
            reference: "10 days before trial",
        },
        rule(
            "expert-discovery-motion",
            "Discovery Motion Heard as to Expert Witnesses (CCP §2024(d))",
            Pleadings,
            O::before_trial(10),
            "10 days before trial",
        ),
        rule(
            "notice-appear-personal",
            "Personally Serve Notice to Appear/Testify (No Docs) (CCP §1987(b))",
            Pleadings,
            O::before_trial(10),
            "10 days before trial",
        ),
        rule(
            "offer-compromise-mail",
            "Serve by Mail Offer to Compromise (998 + 5 mail)",
            Pleadings,
            O::before_trial(15),
            "15 days before trial",
        ),
        rule(
            "complete-expert-discovery",
            "Complete Discovery re CCP §2034 Experts (CCP §2024(d))",
            Pleadings,
            O::before_trial(15),
            "15 days before trial",
        ),
        rule(
            "notice-appear-mail",
            "Serve by Mail Notice to Appear/Testify (No Docs) (CCP §1987(b))",
            Pleadings,
            O::before_trial(15),
            "15 days before trial",
        ),
        rule(
            "discovery-motion-heard",
            "Discovery Motion Heard (CCP §2024(a))",
            Pleadings,
            O::before_trial(15),
            "15 days before trial",
        ),
        rule(
            "notice-produce-personal",
            "Personally Serve Notice to Produce Docs (CCP §1987(c))",
            Pleadings,
            O::before_trial(20),
            "20 days before trial",
        ),
        rule(
            "notice-produce-mail",
            "Serve by Mail Notice to Produce Docs (CCP §1987(c))",
            Pleadings,
            O::before_trial(25),
            "25 days before trial",
        ),
        rule(
            "jury-fees",
            "Deposit Jury Fees (CCP §631(a)(5))",
            Pleadings,
            O::before_trial(25),
            "25 days before trial",
        ),
        // Discovery
        rule(
            "expert-depo-personal",
            "Personally Serve Expert Depo Notice (no docs)",
            Discovery,
            O::before_trial(25),
            "25 days before trial",
        ),
        rule(
            "expert-depo-mail",
            "Serve by Mail Expert Depo Notice (no docs)",
            Discovery,
            O::before_trial(30),
            "30 days before trial",
        ),
        rule(
            "supplemental-expert-personal",
            "Personally Serve Supplemental Expert List",
            Discovery,
            O::after(AnchorKind::ExpertExchange, 20),
            "20 days after expert exchange",
        ),
        rule(
            "discovery-cutoff",
            "Discovery Cut-Off (CCP §2024(a))",
            Discovery,
            O::before_trial(30),
            "30 days before trial",
        ),
        rule(
            "expert-depo-docs-personal",
            "Personally Serve Expert Depo Notice (with docs)",
            Discovery,
            O::before_trial(35),
            "35 days before trial",
        ),
        rule(
            "expert-depo-docs-mail",
            "Serve by Mail Expert Depo Notice (with docs)",
            Discovery,
            O::before_trial(40),
            "40 days before trial",
        ),
        rule(
            "subpoena-non-party",
            "Subpoena Non-Party Witnesses (CC §1987(a))",
            Discovery,
            O::before_trial(45),
            "45 days before trial",
        ),
        rule(
            "expert-list-designate",
            "Serve List Designating Experts (CCP §2034(c))",
            Discovery,
            O::before_trial(50),
            "50 days before trial",
        ),
        rule(
            "discovery-personal",
            "Serve Discovery (non-§2034) by Personal Service",
            Discovery,
            O::before_trial(60),
            "60 days before trial",
        ),
        rule(
            "discovery-mail",
            "Serve Discovery (non-§2034) by Mail",
            Discovery,
            O::before_trial(65),
            "65 days before trial",
        ),
        rule(
            "expert-demand-personal",
            "Demand to Exchange Expert Lists – Personal (CCP §2034(b))",
            Discovery,
            O::later_of(O::before_trial(70), O::after(AnchorKind::TrialSet, 10)),
            "Later of 70 days before trial OR 10 days after trial set",
        ),
        rule(
            "expert-demand-mail",
            "Demand to Exchange Expert Lists – Mail (CCP §2034(b))",
            Discovery,
            O::later_of(O::before_trial(75), O::after(AnchorKind::TrialSet, 10)),
            "Later of 75 days before trial OR 10 days after trial set",
        ),
        rule(
            "pretrial-interrogatories",
            "Propound Pretrial Interrogatories (reminder)",
            Discovery,
            O::before_trial(100),
            "100 days before trial",
        ),
        // Motions
        rule(
            "summary-judgment-heard",
            "Have Summary Judgment Motion Heard (CCP §437c(a))",
            Motions,
            O::before_trial(30),
            "30 days before trial",
        ),
        rule(
            "rjn-reminder",
            "Reminder to Serve RJN (Evid. C. §§452–453)",
            Motions,
            O::before_trial(30),
            "30 days before trial",
        ),
        rule(
            "summary-judgment-personal",
            "Personally Serve Summary Judgment Motion (CCP §437c(a))",
            Motions,
            O::before_trial(105),
            "105 days before trial",
        ),
        rule(
            "summary-judgment-mail",
            "Serve by Mail Summary Judgment Motion (CCP §437c(a))",
            Motions,
            O::before_trial(110),
            "110 days before trial",
        ),
        // Trial
        rule(
            "milestone-120",
            "Milestone – 120 Days Before Trial",
            Trial,
            O::before_trial(120),
            "120 days before trial",
        ),
        // Settlement conference
        rule(
            "msc-attendance-review",
            "Determine whether in-person carrier/client attendance at the MSC is required",
            Trial,
            O::Before {
                anchor: AnchorKind::Msc,
                days: 30,
            },
            "30 days before MSC",
        ),
        rule(
            "msc-excuse-request",
            "File written request or ex parte to excuse in-person carrier/client MSC attendance",
            Trial,
            O::Before {
                anchor: AnchorKind::Msc,
                days: 14,
            },
            "14 days before MSC",
        ),
        rule(
            "msc-appearance",
            "MSC: bring required documents and ensure client/carrier attendance",
            Trial,
            O::Before {
                anchor: AnchorKind::Msc,
                days: 0,
            },
            "On the MSC date",
        ),
    ]
});

/// Returns the statewide rule catalog.
pub fn base_catalog() -> &'static [DeadlineRule] {
    &CATALOG
}
