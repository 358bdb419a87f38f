//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the keyed load/save contract the schedule store persists
//!   through.
//! - Isolate SQLite and payload-encoding details from service logic.
//!
//! # Invariants
//! - Stored payloads round-trip every anchor and event field exactly,
//!   with dates as plain `YYYY-MM-DD` strings.

pub mod schedule_repo;
