//! Screens of the directory application.
//!
//! # Responsibility
//! - Load rows from the store on activation and keep them in local state.
//! - Forward validated form payloads to services and record the outcome.
//! - Render the current state as plain text.
//!
//! # Invariants
//! - Local state changes only after a successful store write.
//! - Every mutation outcome pushes exactly one toast.
//! - Screens never refetch after activation.

pub mod directory;
pub mod profile;
pub mod route;

/// Lifecycle of data requested by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    /// Activation has not completed yet.
    Loading,
    Loaded(T),
    /// The requested record does not exist.
    NotFound,
    /// The store request failed; rendered as an empty state.
    Failed,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

pub(crate) const LOADING_TEXT: &str = "Loading...";
