use std::time::Duration;

use directory::NoticeKind;
use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaTriangleExclamation, FaXmark};
use crate::presenter::{use_presenter, Toast};
use crate::Icon;

/// How long a toast stays up before it dismisses itself.
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Stack of notifications in the corner of the page.
#[component]
pub fn Toasts() -> Element {
    let presenter = use_presenter();
    let toasts = presenter.toasts.read().clone();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let presenter = use_presenter();
    let id = toast.id;

    use_hook(move || {
        spawn(async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::sleep(TOAST_TTL).await;
            #[cfg(not(target_arch = "wasm32"))]
            tokio::time::sleep(TOAST_TTL).await;

            presenter.dismiss(id);
        });
    });

    let notification = toast.notification;
    let (class, icon) = match notification.kind {
        NoticeKind::Success => (
            "toast-item toast-success",
            rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        ),
        NoticeKind::Error => (
            "toast-item toast-error",
            rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
        ),
        NoticeKind::Warning => (
            "toast-item toast-warning",
            rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } },
        ),
    };

    rsx! {
        div {
            class: class,
            role: "status",
            span { class: "toast-icon", {icon} }
            div {
                class: "toast-text",
                strong { "{notification.title}" }
                p { "{notification.message}" }
            }
            button {
                r#type: "button",
                class: "toast-close",
                aria_label: "Dismiss",
                onclick: move |_| presenter.dismiss(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
