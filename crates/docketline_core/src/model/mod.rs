//! Domain model for case scheduling.
//!
//! # Responsibility
//! - Define the canonical event, anchor and schedule records used by the
//!   resolver, reconciler and store.
//! - Keep one serializable shape for persistence round-trips.
//!
//! # Invariants
//! - Automatic event ids equal their generating rule id; manual event ids
//!   carry the `manual-` prefix and never collide with rule ids.
//! - Automatic events are derived state and are regenerated wholesale on
//!   every anchor change.

pub mod anchors;
pub mod event;
pub mod schedule;
