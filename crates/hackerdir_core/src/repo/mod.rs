//! Store layer: repository contracts and their SQLite implementations.
//!
//! # Responsibility
//! - Define the select/insert/delete capabilities screens and services need.
//! - Keep SQL inside the persistence boundary so callers can inject fakes.
//!
//! # Invariants
//! - Repository writes validate payloads before persistence.
//! - Repository APIs return semantic errors (`NotFound`) next to DB errors.

pub mod person_repo;
pub mod project_repo;
