use dioxus::prelude::*;
use store::Field;

use crate::modal::ModalOverlay;
use crate::provider::use_directory;
use crate::ProfileFields;

/// "Edit User" dialog, shown while the controller has an edit session.
#[component]
pub fn EditUserModal() -> Element {
    let directory = use_directory();
    let Some(session) = directory.editing() else {
        return rsx! {};
    };

    let bind = directory.clone();
    let on_input = move |(field, value): (Field, String)| {
        let _ = bind.edit_field(field, &value);
    };

    let close = directory.clone();
    let on_close = move |_: ()| close.cancel_edit();
    let close = directory.clone();
    let on_cancel = move |_| close.cancel_edit();

    let save = move |_| {
        let directory = directory.clone();
        spawn(async move {
            let _ = directory.save_edit().await;
        });
    };

    rsx! {
        ModalOverlay {
            title: "Edit User".to_string(),
            on_close: on_close,
            div {
                class: "modal-body",
                ProfileFields {
                    id_prefix: "edit-user".to_string(),
                    draft: session.draft,
                    on_input: on_input,
                }
            }
            div {
                class: "modal-footer",
                button {
                    r#type: "button",
                    class: "btn btn-secondary neumorphic-btn",
                    onclick: on_cancel,
                    "Close"
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary neumorphic-btn",
                    onclick: save,
                    "Save changes"
                }
            }
        }
    }
}
