//! Signal-backed presenter: toasts and the confirmation dialog.
//!
//! [`UiPresenter`] is what the directory controller sees of the UI. Notifying
//! pushes a toast; confirming parks a [`PendingConfirm`] in a signal and waits
//! until [`ConfirmDialog`](crate::ConfirmDialog) answers it.

use directory::{Confirm, ConfirmPrompt, NoticeKind, Notification, Notify};
use dioxus::prelude::*;
use futures::channel::oneshot;

/// Toasts kept on screen at once; older ones are dropped first.
const MAX_TOASTS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// A question waiting for the user.
pub struct PendingConfirm {
    pub prompt: ConfirmPrompt,
    reply: oneshot::Sender<bool>,
}

impl PendingConfirm {
    pub fn answer(self, confirmed: bool) {
        // The asking task may already be gone; nothing to do then.
        let _ = self.reply.send(confirmed);
    }
}

#[derive(Clone, Copy)]
pub struct UiPresenter {
    pub toasts: Signal<Vec<Toast>>,
    pub pending: Signal<Option<PendingConfirm>>,
    next_toast: Signal<u64>,
}

impl UiPresenter {
    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|t| t.id != id);
    }
}

/// Create the presenter signals and share them with child components.
pub fn use_presenter_provider() -> UiPresenter {
    let toasts = use_signal(Vec::new);
    let pending = use_signal(|| None);
    let next_toast = use_signal(|| 0u64);
    use_context_provider(|| UiPresenter {
        toasts,
        pending,
        next_toast,
    })
}

pub fn use_presenter() -> UiPresenter {
    use_context::<UiPresenter>()
}

impl Notify for UiPresenter {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NoticeKind::Error => {
                tracing::error!("{}: {}", notification.title, notification.message)
            }
            NoticeKind::Warning => {
                tracing::warn!("{}: {}", notification.title, notification.message)
            }
            NoticeKind::Success => {
                tracing::info!("{}: {}", notification.title, notification.message)
            }
        }

        let mut next_toast = self.next_toast;
        let id = *next_toast.peek();
        next_toast.set(id + 1);

        let mut toasts = self.toasts;
        let mut list = toasts.write();
        list.push(Toast { id, notification });
        let overflow = list.len().saturating_sub(MAX_TOASTS);
        list.drain(..overflow).for_each(drop);
    }
}

impl Confirm for UiPresenter {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let (reply, answer) = oneshot::channel();
        let mut pending = self.pending;
        let previous = pending.write().replace(PendingConfirm {
            prompt: prompt.clone(),
            reply,
        });
        // Only one dialog at a time; an unanswered earlier one counts as declined.
        if let Some(previous) = previous {
            previous.answer(false);
        }
        answer.await.unwrap_or(false)
    }
}
