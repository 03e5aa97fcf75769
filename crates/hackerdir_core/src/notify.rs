//! Transient user-facing notifications ("toasts").
//!
//! Screens push one toast per mutation outcome; callers drain and display
//! them. Toasts carry no identifiers or payload data beyond display text.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Default,
    /// Failure outcome; rendered prominently.
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success!".to_string(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Pending toasts of one screen, oldest first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Toasts {
    pending: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast) {
        self.pending.push(toast);
    }

    pub fn pending(&self) -> &[Toast] {
        &self.pending
    }

    pub fn has_errors(&self) -> bool {
        self.pending.iter().any(Toast::is_error)
    }

    /// Removes and returns every pending toast.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }
}
