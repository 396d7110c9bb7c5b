//! This crate contains the directory screen shared by the web and desktop apps.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const DIRECTORY_CSS: Asset = asset!("/assets/directory.css");

mod backend;
pub use backend::Backend;

mod presenter;
pub use presenter::{use_presenter, PendingConfirm, Toast, UiPresenter};

mod provider;
pub use provider::{use_directory, Directory, DirectoryHandle, DirectoryProvider};

mod modal;
pub use modal::ModalOverlay;

mod profile_fields;
pub use profile_fields::ProfileFields;

mod user_form;
pub use user_form::UserForm;

mod user_table;
pub use user_table::{SearchBar, UserTable};

mod edit_modal;
pub use edit_modal::EditUserModal;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod toasts;
pub use toasts::Toasts;

mod page;
pub use page::DirectoryPage;
