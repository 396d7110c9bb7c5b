//! Store constructor shared by all platforms.
//!
//! Returns a [`Backend`] that is either the remote Firestore collection or, when
//! no project is configured, an in-memory store so the app still runs as a demo.

use api::{FirestoreStore, Settings};
use store::{MemoryStore, Profile, Record, RecordId, RecordStore, StoreError};

/// The record store the UI talks to.
#[derive(Clone, Debug)]
pub enum Backend {
    Firestore(FirestoreStore),
    Memory(MemoryStore),
}

impl Backend {
    /// Firestore when settings are available, otherwise an empty in-memory store.
    pub fn from_settings(settings: Option<&Settings>) -> Self {
        match settings {
            Some(settings) => {
                tracing::info!(
                    project = %settings.firestore.project_id,
                    collection = %settings.firestore.collection,
                    "Using Firestore"
                );
                Backend::Firestore(FirestoreStore::new(&settings.firestore))
            }
            None => {
                tracing::warn!("No Firestore project configured, using an in-memory store");
                Backend::Memory(MemoryStore::new())
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Backend::Firestore(_) => "Firestore",
            Backend::Memory(_) => "In-memory (changes are lost on reload)",
        }
    }
}

impl RecordStore for Backend {
    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        match self {
            Backend::Firestore(s) => s.list_all().await,
            Backend::Memory(s) => s.list_all().await,
        }
    }

    async fn insert(&self, profile: &Profile) -> Result<RecordId, StoreError> {
        match self {
            Backend::Firestore(s) => s.insert(profile).await,
            Backend::Memory(s) => s.insert(profile).await,
        }
    }

    async fn replace(&self, id: &RecordId, profile: &Profile) -> Result<(), StoreError> {
        match self {
            Backend::Firestore(s) => s.replace(id, profile).await,
            Backend::Memory(s) => s.replace(id, profile).await,
        }
    }

    async fn remove(&self, id: &RecordId) -> Result<(), StoreError> {
        match self {
            Backend::Firestore(s) => s.remove(id).await,
            Backend::Memory(s) => s.remove(id).await,
        }
    }
}
