use dioxus::prelude::*;

use crate::provider::use_directory;
use crate::{ConfirmDialog, EditUserModal, SearchBar, Toasts, UserForm, UserTable};

/// The whole directory screen. Render inside a [`DirectoryProvider`](crate::DirectoryProvider).
#[component]
pub fn DirectoryPage() -> Element {
    let directory = use_directory();
    let backend = directory.backend_label();
    let count = directory.records().len();

    rsx! {
        document::Stylesheet { href: crate::DIRECTORY_CSS }
        div {
            class: "container mt-5",
            h1 { class: "mb-4 text-center neumorphic", "User Management System" }
            p {
                class: "text-center text-muted backend-label",
                "{backend} · {count} users"
            }
            div {
                class: "row justify-content-center",
                div { class: "col-narrow", UserForm {} }
            }
            div {
                class: "row justify-content-center",
                div {
                    class: "col-wide",
                    h2 { class: "mb-3", "User List" }
                    SearchBar {}
                    UserTable {}
                }
            }
        }
        EditUserModal {}
        ConfirmDialog {}
        Toasts {}
    }
}
