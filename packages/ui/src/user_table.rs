use dioxus::prelude::*;
use store::{Field, Record};

use crate::icons::{FaMagnifyingGlass, FaPenToSquare, FaTrash};
use crate::provider::use_directory;
use crate::Icon;

/// Search box bound to the controller's search term.
#[component]
pub fn SearchBar() -> Element {
    let directory = use_directory();
    let term = directory.search_term();

    rsx! {
        div {
            class: "input-group mb-3",
            span {
                class: "input-group-text neumorphic",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
            input {
                r#type: "text",
                class: "form-control neumorphic",
                placeholder: "Search users...",
                value: "{term}",
                oninput: move |evt: FormEvent| directory.set_search_term(evt.value()),
            }
        }
    }
}

/// Table of the records matching the current search term.
#[component]
pub fn UserTable() -> Element {
    let directory = use_directory();
    let records = directory.visible();
    let empty_message = if directory.records().is_empty() {
        "No users yet."
    } else {
        "No users match the search."
    };

    rsx! {
        div {
            class: "table-responsive",
            table {
                class: "table table-hover neumorphic",
                thead {
                    tr {
                        for field in Field::ALL {
                            th { key: "{field.key()}", {field.label()} }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    for record in records.iter() {
                        UserRow { key: "{record.id}", record: record.clone() }
                    }
                }
            }
            if records.is_empty() {
                p { class: "text-muted text-center", "{empty_message}" }
            }
        }
    }
}

#[component]
fn UserRow(record: Record) -> Element {
    let directory = use_directory();

    let edit_id = record.id.clone();
    let edit_directory = directory.clone();
    let on_edit = move |_| {
        // The row exists, so the record is in the loaded list.
        let _ = edit_directory.begin_edit(&edit_id);
    };

    let delete_id = record.id.clone();
    let on_delete = move |_| {
        let directory = directory.clone();
        let id = delete_id.clone();
        spawn(async move {
            let _ = directory.delete(id).await;
        });
    };

    rsx! {
        tr {
            class: "fade-in",
            for field in Field::ALL {
                td { key: "{field.key()}", {record.profile.get(field)} }
            }
            td {
                button {
                    class: "btn btn-warning btn-sm me-2 neumorphic-btn",
                    onclick: on_edit,
                    Icon { icon: FaPenToSquare, width: 12, height: 12 }
                    " Edit"
                }
                button {
                    class: "btn btn-danger btn-sm neumorphic-btn",
                    onclick: on_delete,
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}
