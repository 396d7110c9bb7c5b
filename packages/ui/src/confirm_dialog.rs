use dioxus::prelude::*;

use crate::modal::ModalOverlay;
use crate::presenter::use_presenter;

/// Renders the pending confirmation, if any, and answers it.
/// Dismissing the dialog counts as declining.
#[component]
pub fn ConfirmDialog() -> Element {
    let presenter = use_presenter();
    let mut pending = presenter.pending;

    let Some(prompt) = pending.read().as_ref().map(|p| p.prompt.clone()) else {
        return rsx! {};
    };

    let mut answer = move |confirmed: bool| {
        if let Some(request) = pending.write().take() {
            request.answer(confirmed);
        }
    };

    rsx! {
        ModalOverlay {
            title: prompt.title.clone(),
            on_close: move |_| answer(false),
            div {
                class: "modal-body",
                p { class: "confirm-message", "{prompt.message}" }
            }
            div {
                class: "modal-footer",
                button {
                    r#type: "button",
                    class: "btn btn-secondary neumorphic-btn",
                    onclick: move |_| answer(false),
                    "{prompt.cancel_label}"
                }
                button {
                    r#type: "button",
                    class: "btn btn-danger neumorphic-btn",
                    onclick: move |_| answer(true),
                    "{prompt.confirm_label}"
                }
            }
        }
    }
}
