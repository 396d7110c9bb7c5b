use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;
use crate::models::{Profile, Record, RecordId};
use crate::repo::RecordStore;

/// In-memory RecordStore for tests and the offline demo.
///
/// Records keep insertion order. Identifiers come from a counter that is never
/// rewound, so a deleted id is never handed out again.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    records: Vec<Record>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the given profiles.
    pub fn with_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.lock() {
            for profile in profiles {
                let id = inner.allocate_id();
                inner.records.push(Record::new(id, profile));
            }
        }
        store
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl Inner {
    fn allocate_id(&mut self) -> RecordId {
        self.next_id += 1;
        RecordId::new(format!("mem-{:06}", self.next_id))
    }

    fn position(&self, id: &RecordId) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

impl RecordStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.lock()?.records.clone())
    }

    async fn insert(&self, profile: &Profile) -> Result<RecordId, StoreError> {
        let mut inner = self.lock()?;
        let id = inner.allocate_id();
        inner.records.push(Record::new(id.clone(), profile.clone()));
        Ok(id)
    }

    async fn replace(&self, id: &RecordId, profile: &Profile) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let idx = inner.position(id)?;
        inner.records[idx].profile = profile.clone();
        Ok(())
    }

    async fn remove(&self, id: &RecordId) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let idx = inner.position(id)?;
        inner.records.remove(idx);
        Ok(())
    }
}
