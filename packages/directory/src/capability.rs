//! Capabilities the controller needs from whatever presents it.
//!
//! The controller never talks to a UI toolkit directly. It asks for
//! confirmation through [`Confirm`] and reports outcomes through [`Notify`];
//! the Dioxus UI and the test presenters both implement these two traits.

use std::future::Future;

/// Severity of a [`Notification`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

/// A user-facing message, shown once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NoticeKind,
}

impl Notification {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, "Error", message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, title, message)
    }
}

/// Question put to the user before a destructive action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn delete_user() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            message: "You won't be able to revert this!".to_string(),
            confirm_label: "Yes, delete it!".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    /// Resolves to `true` only if the user explicitly confirmed.
    fn confirm(&self, prompt: &ConfirmPrompt) -> impl Future<Output = bool>;
}

/// Sink for success, warning and error messages.
pub trait Notify {
    fn notify(&self, notification: Notification);
}
