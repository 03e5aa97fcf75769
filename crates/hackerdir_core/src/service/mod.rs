//! Use-case services over the store capabilities.
//!
//! # Responsibility
//! - Orchestrate repository calls into directory use-cases.
//! - Keep screens and the CLI decoupled from storage details.

pub mod error;
pub mod person_service;
pub mod project_service;
pub mod seed;
