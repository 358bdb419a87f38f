//! Jurisdiction extension registry.
//!
//! # Responsibility
//! - Register county-specific local-rule deadlines as supplemental rule
//!   sets keyed by court-label substrings.
//! - Match a case's free-text jurisdiction label against the registry.
//!
//! # Invariants
//! - Extension event ids are `<slug>-<seq>` and stay stable as long as a
//!   set's rule order is append-only.
//! - A label matching several distinct sets receives all of them; alias
//!   keys within one set register that set at most once.

use crate::model::anchors::AnchorKind;
use crate::model::event::EventCategory;
use crate::rules::offset::OffsetSpec;
use chrono::Weekday;
use once_cell::sync::Lazy;

/// One supplemental rule contributed by a jurisdiction set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRule {
    /// Synthetic stable id derived from the set slug and a sequence number.
    pub id: &'static str,
    pub title: &'static str,
    pub category: EventCategory,
    pub offset: OffsetSpec,
    /// Local-rule citation. Display only.
    pub reference: &'static str,
}

/// A named set of local rules layered on top of the base catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JurisdictionExtension {
    /// Short identifier used for synthetic event ids.
    pub slug: &'static str,
    /// Lowercase substrings that activate this set. Any hit activates it;
    /// several hits still register it only once.
    pub keys: &'static [&'static str],
    pub rules: Vec<ExtensionRule>,
}

fn ext(
    id: &'static str,
    title: &'static str,
    category: EventCategory,
    offset: OffsetSpec,
    reference: &'static str,
) -> ExtensionRule {
    ExtensionRule {
        id,
        title,
        category,
        offset,
        reference,
    }
}

static EXTENSIONS: Lazy<Vec<JurisdictionExtension>> = Lazy::new(|| {
    use EventCategory::{Motions, Trial};
    use OffsetSpec as O;

    vec![
        JurisdictionExtension {
            slug: "riverside",
            keys: &["riverside"],
            rules: vec![
                ext(
                    "riverside-1",
                    "Exchange witness lists, exhibit lists, copies of exhibits not previously exchanged, uncontroverted fact/issue lists, and motions in limine",
                    Trial,
                    O::before_trial(14),
                    "Local Rule 3401",
                ),
                ext(
                    "riverside-2",
                    "Exchange proposed statement of the case, form jury instruction list, special jury instruction text, and proposed verdict form",
                    Trial,
                    O::before_trial(14),
                    "Local Rule 3401",
                ),
                ext(
                    "riverside-3",
                    "Lead trial counsel to conduct issues conference",
                    Trial,
                    O::before_trial(7),
                    "Local Rule 3401",
                ),
                ext(
                    "riverside-4",
                    "Jury trials: submit special verdict jury questions and verdict forms in writing to the court before any evidence is offered",
                    Trial,
                    O::before_trial(1),
                    "Local Rule 3402",
                ),
            ],
        },
        JurisdictionExtension {
            slug: "orange",
            keys: &["orange"],
            rules: vec![
                ext(
                    "orange-1",
                    "Attend Issue Conference with all parties and exchange motions in limine, exhibits, and photos/diagrams for trial",
                    Trial,
                    O::before_trial(14),
                    "Local Rule 317",
                ),
                ext(
                    "orange-2",
                    "Electronically file by noon all documents discussed, prepared, and/or exchanged during the Issue Conference",
                    Trial,
                    O::WeekdayBefore {
                        anchor: AnchorKind::Trial,
                        weekday: Weekday::Wed,
                    },
                    "Local Rule 317",
                ),
                ext(
                    "orange-3",
                    "Deliver by noon to the clerk in the trial department the Joint Trial Notebook with all required documents",
                    Trial,
                    O::WeekdayBefore {
                        anchor: AnchorKind::Trial,
                        weekday: Weekday::Wed,
                    },
                    "Local Rule 317",
                ),
                ext(
                    "orange-4",
                    "Lodge confidential Settlement Conference Statement and any objection to the assigned settlement judge",
                    Trial,
                    O::CourtDaysBefore {
                        anchor: AnchorKind::Msc,
                        days: 5,
                    },
                    "Local Rule 316",
                ),
                ext(
                    "orange-5",
                    "Serve a settlement demand on each defendant in advance of the MSC",
                    Trial,
                    O::Before {
                        anchor: AnchorKind::Msc,
                        days: 5,
                    },
                    "Local Rule 316",
                ),
            ],
        },
        JurisdictionExtension {
            slug: "los-angeles",
            keys: &["los angeles", "la county"],
            rules: vec![ext(
                "los-angeles-1",
                "File and serve exhibit list, witness list, jury instructions, and statement of the case",
                Trial,
                O::before_trial(5),
                "Local Rule 3.25",
            )],
        },
        JurisdictionExtension {
            slug: "san-bernardino",
            keys: &["san bernardino"],
            rules: vec![ext(
                "san-bernardino-1",
                "File and serve motions in limine",
                Motions,
                O::before_trial(8),
                "Local Rule 411.2",
            )],
        },
        JurisdictionExtension {
            slug: "san-diego",
            keys: &["san diego"],
            rules: vec![
                ext(
                    "san-diego-1",
                    "File and serve motions in limine",
                    Motions,
                    O::before_trial(5),
                    "Local Rule 2.1.18",
                ),
                ext(
                    "san-diego-2",
                    "File and serve oppositions to motions in limine",
                    Motions,
                    O::before_trial(2),
                    "Local Rule 2.1.18",
                ),
            ],
        },
        JurisdictionExtension {
            slug: "santa-barbara",
            keys: &["santa barbara"],
            rules: vec![
                ext(
                    "santa-barbara-1",
                    "File and serve motions in limine",
                    Motions,
                    O::CourtDaysBefore {
                        anchor: AnchorKind::Trial,
                        days: 16,
                    },
                    "Local Rule 1302",
                ),
                ext(
                    "santa-barbara-2",
                    "File and serve oppositions to motions in limine",
                    Motions,
                    O::CourtDaysBefore {
                        anchor: AnchorKind::Trial,
                        days: 9,
                    },
                    "Local Rule 1302",
                ),
                ext(
                    "santa-barbara-3",
                    "File trial brief",
                    Trial,
                    O::CourtDaysBefore {
                        anchor: AnchorKind::Trial,
                        days: 3,
                    },
                    "Local Rule 1306",
                ),
            ],
        },
        JurisdictionExtension {
            slug: "ventura",
            keys: &["ventura"],
            rules: vec![ext(
                "ventura-1",
                "Submit trial brief, joint statement of the case, joint witness and exhibit lists, motions in limine, and oppositions to motions in limine",
                Trial,
                O::before_trial(0),
                "Local Rule 8.12",
            )],
        },
    ]
});

/// Returns the full extension registry.
pub fn extensions() -> &'static [JurisdictionExtension] {
    &EXTENSIONS
}

/// Returns every extension set whose keys match `label`.
///
/// Matching is case-insensitive substring containment; distinct sets
/// stack, so a label naming two counties yields both sets.
pub fn matching_extensions(label: &str) -> Vec<&'static JurisdictionExtension> {
    let needle = label.to_lowercase();
    extensions()
        .iter()
        .filter(|set| set.keys.iter().any(|key| needle.contains(key)))
        .collect()
}
