//! # API crate: remote access to the user directory
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`firestore`] | [`FirestoreStore`], a [`store::RecordStore`] over the Cloud Firestore REST API, and its document codec |
//! | [`settings`] | [`Settings`], loaded with the `config` crate from defaults, `directory.toml` and `DIRECTORY__*` variables |

pub mod firestore;
pub mod settings;

pub use firestore::FirestoreStore;
pub use settings::{FirestoreSettings, Settings, SettingsError};
pub use store::{Profile, Record, RecordId, StoreError};
