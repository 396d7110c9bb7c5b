use thiserror::Error;

use crate::models::RecordId;

/// A draft that cannot be persisted as-is. Raised before any store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name and email are required")]
    MissingRequired,

    #[error("Unknown gender {0:?}")]
    InvalidGender(String),

    #[error("Birthdate {0:?} is not a YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Failure reported by a [`crate::RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached (transport failure, timeout, ...).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("record {0} not found")]
    NotFound(RecordId),

    /// The store answered, but refused the request.
    #[error("store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// A stored document could not be read back as a record.
    #[error("could not decode record {id}: {reason}")]
    Decode { id: String, reason: String },
}
