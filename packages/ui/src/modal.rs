use dioxus::prelude::*;

/// Full-screen backdrop with a centered dialog card.
/// Clicking the backdrop triggers `on_close`; clicks inside the card do not.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop-custom",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card neumorphic",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h5 { class: "modal-title", "{title}" }
                    button {
                        r#type: "button",
                        class: "btn-close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                    }
                }
                {children}
            }
        }
    }
}
