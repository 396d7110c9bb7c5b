use dioxus::prelude::*;
use store::Field;

use crate::icons::FaPlus;
use crate::provider::use_directory;
use crate::{Icon, ProfileFields};

/// "Add New User" card, bound to the controller's new-record draft.
#[component]
pub fn UserForm() -> Element {
    let directory = use_directory();
    let draft = directory.new_draft();

    let bind = directory.clone();
    let on_input = move |(field, value): (Field, String)| {
        // Inputs only produce well-formed values; anything else is ignored.
        let _ = bind.set_new_field(field, &value);
    };

    let submit = move |_| {
        let directory = directory.clone();
        spawn(async move {
            let _ = directory.submit_new().await;
        });
    };

    rsx! {
        div {
            class: "card mb-4 neumorphic",
            div {
                class: "card-body",
                h5 { class: "card-title", "Add New User" }
                form {
                    onsubmit: move |evt: FormEvent| evt.prevent_default(),
                    ProfileFields {
                        id_prefix: "new-user".to_string(),
                        draft: draft,
                        on_input: on_input,
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-primary neumorphic-btn",
                        onclick: submit,
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        " Add User"
                    }
                }
            }
        }
    }
}
