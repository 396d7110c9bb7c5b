use store::{RecordId, StoreError, ValidationError};
use thiserror::Error;

/// Why a user action on the directory failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Rejected before touching the store.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The record is not in the loaded list.
    #[error("No user {0} in the current list")]
    NoSuchRecord(RecordId),

    #[error("No user is being edited")]
    NotEditing,
}

impl SyncError {
    /// True if the store was never contacted.
    pub fn is_local(&self) -> bool {
        !matches!(self, SyncError::Store(_))
    }
}
