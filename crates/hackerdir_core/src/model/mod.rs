//! Directory domain model.
//!
//! # Responsibility
//! - Define the persisted shapes of persons and projects.
//! - Define the insert payloads produced by forms and accepted by the store.
//!
//! # Invariants
//! - IDs and timestamps are assigned by the store, never by callers.
//! - Insert payloads are validated before any write reaches SQLite.

pub mod person;
pub mod project;
pub mod validation;
