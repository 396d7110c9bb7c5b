pub mod error;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use error::{StoreError, ValidationError};
pub use models::{Field, Gender, Profile, Record, RecordId};
pub use repo::RecordStore;
