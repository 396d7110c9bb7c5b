//! # Record store: the async boundary to the authoritative collection
//!
//! Every read and write of directory records goes through the [`RecordStore`]
//! trait, so the controller works the same against the in-memory store used in
//! tests and against a remote document database.
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`list_all`](RecordStore::list_all) | The whole collection, in the store's fetch order. |
//! | [`insert`](RecordStore::insert) | Adds a record; the store picks the identifier. |
//! | [`replace`](RecordStore::replace) | Overwrites every attribute of an existing record. Fails with [`StoreError::NotFound`] when the id is absent. |
//! | [`remove`](RecordStore::remove) | Deletes an existing record. Fails with [`StoreError::NotFound`] when the id is absent. |
//!
//! The futures are not required to be `Send`: stores are driven from a
//! single-threaded UI executor (WASM or the desktop event loop).

use std::future::Future;

use crate::error::StoreError;
use crate::models::{Profile, Record, RecordId};

/// Async access to the user collection.
pub trait RecordStore {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Record>, StoreError>>;

    fn insert(
        &self,
        profile: &Profile,
    ) -> impl Future<Output = Result<RecordId, StoreError>>;

    fn replace(
        &self,
        id: &RecordId,
        profile: &Profile,
    ) -> impl Future<Output = Result<(), StoreError>>;

    fn remove(&self, id: &RecordId) -> impl Future<Output = Result<(), StoreError>>;
}
