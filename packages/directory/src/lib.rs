//! # Directory crate: keeps the UI's user list in step with the store
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`controller`] | [`DirectorySync`]: load, create, update and delete users; drafts and the edit session |
//! | [`capability`] | [`Confirm`] and [`Notify`], the two things the controller needs from a presenter |
//! | [`filter`] | Case-insensitive search over the loaded records |
//! | [`edit`] | [`EditSession`] and the [`Mutation`] handed to the post-mutation hook |
//! | [`error`] | [`SyncError`] |

pub mod capability;
pub mod controller;
pub mod edit;
pub mod error;
pub mod filter;

pub use capability::{Confirm, ConfirmPrompt, NoticeKind, Notification, Notify};
pub use controller::DirectorySync;
pub use edit::{EditSession, Mutation};
pub use error::SyncError;
pub use filter::filter;
