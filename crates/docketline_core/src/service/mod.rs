//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate resolver, reconciler and repository calls into the
//!   schedule store API.
//! - Keep host/UI layers decoupled from storage details.

pub mod schedule_service;
