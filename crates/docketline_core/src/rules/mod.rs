//! Deadline rule tables and offset resolution.
//!
//! # Responsibility
//! - Define the offset specification sum type and its resolution against
//!   case anchors.
//! - Register the statewide rule catalog and the jurisdiction extension
//!   sets as data, not code paths.
//!
//! # Invariants
//! - Rule ids are stable and unique across the catalog and all extension
//!   sets; they are never reused for a different deadline.
//! - Offset constants (e.g. the 70/10 and 75/10 expert-exchange pairs) are
//!   catalog data carried verbatim from the governing procedure rules.

pub mod catalog;
pub mod jurisdiction;
pub mod offset;
