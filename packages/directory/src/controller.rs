//! # Directory sync controller
//!
//! [`DirectorySync`] owns the local view of the user collection and is the only
//! thing that mutates it. It keeps three pieces of state:
//!
//! - the **record list**, an ordered snapshot of the whole collection in fetch
//!   order, replaced wholesale after every successful load;
//! - the **new-record draft** bound to the create form;
//! - at most one **edit session** (see [`EditSession`]).
//!
//! ## Write path
//!
//! Every write follows the same steps: validate the draft (no store access on
//! failure), call the store, run the post-mutation hook
//! [`resync`](DirectorySync::resync), then notify the user. The hook currently
//! reloads the whole collection; if that reload fails the write still counts as
//! done and the user gets a warning that the list may be out of date.
//!
//! ## Overlapping loads
//!
//! Each load takes a ticket from a monotonically increasing counter. A response
//! is applied only if its ticket is newer than the last one applied, so a slow
//! early load can never overwrite the result of a later one.
//!
//! ## Concurrency
//!
//! The controller is driven from a single-threaded executor. State lives in
//! `RefCell`/`Cell`, and no borrow is held across an `.await`, so a second user
//! action may start while the first one waits on the store.

use std::cell::{Cell, RefCell};

use store::{Field, Profile, Record, RecordId, RecordStore, StoreError};
use tracing::{debug, error, info, warn};

use crate::capability::{Confirm, ConfirmPrompt, Notification, Notify};
use crate::edit::{EditSession, Mutation};
use crate::error::SyncError;
use crate::filter::filter;

#[derive(Debug, Default)]
struct State {
    records: Vec<Record>,
    new_draft: Profile,
    editing: Option<EditSession>,
    search_term: String,
}

/// Keeps the local record list in step with a [`RecordStore`].
pub struct DirectorySync<S, P> {
    store: S,
    presenter: P,
    state: RefCell<State>,
    loads_issued: Cell<u64>,
    loads_applied: Cell<u64>,
    on_change: Option<Box<dyn Fn()>>,
}

impl<S, P> DirectorySync<S, P>
where
    S: RecordStore,
    P: Confirm + Notify,
{
    pub fn new(store: S, presenter: P) -> Self {
        Self {
            store,
            presenter,
            state: RefCell::new(State::default()),
            loads_issued: Cell::new(0),
            loads_applied: Cell::new(0),
            on_change: None,
        }
    }

    /// Register a callback run after any change to the list, the drafts or
    /// the search term. The UI uses it to schedule a re-render.
    pub fn on_change(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Snapshot of the loaded records, in fetch order.
    pub fn records(&self) -> Vec<Record> {
        self.state.borrow().records.clone()
    }

    pub fn search_term(&self) -> String {
        self.state.borrow().search_term.clone()
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.state.borrow_mut().search_term = term.into();
        self.changed();
    }

    /// Records matching the current search term.
    pub fn visible(&self) -> Vec<Record> {
        let state = self.state.borrow();
        filter(&state.records, &state.search_term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Records matching `term`, without touching the stored search term.
    pub fn filter(&self, term: &str) -> Vec<Record> {
        filter(&self.state.borrow().records, term)
            .into_iter()
            .cloned()
            .collect()
    }

    // ---- loading ----------------------------------------------------------

    /// Reload the whole collection. On failure the previous list is kept and
    /// the user is told.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        self.load()
            .await
            .map_err(|e| self.fail("load users", SyncError::Store(e)))
    }

    async fn load(&self) -> Result<(), StoreError> {
        let ticket = self.loads_issued.get() + 1;
        self.loads_issued.set(ticket);

        let records = self.store.list_all().await?;

        if ticket <= self.loads_applied.get() {
            debug!(ticket, applied = self.loads_applied.get(), "Discarding stale load");
            return Ok(());
        }
        self.loads_applied.set(ticket);
        debug!(ticket, count = records.len(), "Loaded users");
        self.state.borrow_mut().records = records;
        self.changed();
        Ok(())
    }

    /// Post-mutation hook: bring the local list back in step after a write.
    ///
    /// Reloads everything. A failed reload does not undo the write, so it is
    /// reported as a warning rather than an error.
    async fn resync(&self, mutation: &Mutation) {
        if let Err(e) = self.load().await {
            warn!(id = %mutation.id(), error = %e, "Reload after write failed");
            self.presenter.notify(Notification::warning(
                "Warning",
                format!("The change was saved, but the list could not be reloaded: {e}"),
            ));
        }
    }

    // ---- create -----------------------------------------------------------

    /// Current contents of the create form.
    pub fn new_draft(&self) -> Profile {
        self.state.borrow().new_draft.clone()
    }

    /// Bind one input of the create form.
    pub fn set_new_field(&self, field: Field, value: &str) -> Result<(), SyncError> {
        self.state.borrow_mut().new_draft.set(field, value)?;
        self.changed();
        Ok(())
    }

    pub fn clear_new_draft(&self) {
        self.state.borrow_mut().new_draft = Profile::default();
        self.changed();
    }

    /// Create a record from the create form. The form is cleared only on
    /// success.
    pub async fn submit_new(&self) -> Result<RecordId, SyncError> {
        let draft = self.new_draft();
        self.create(draft).await
    }

    /// Insert `draft` as a new record and clear the create form.
    pub async fn create(&self, draft: Profile) -> Result<RecordId, SyncError> {
        draft
            .validate()
            .map_err(|e| self.fail("add user", e.into()))?;

        let id = self
            .store
            .insert(&draft)
            .await
            .map_err(|e| self.fail("add user", e.into()))?;
        info!(%id, "User added");

        self.clear_new_draft();
        self.resync(&Mutation::Created(id.clone())).await;
        self.presenter
            .notify(Notification::success("Success", "User added successfully"));
        Ok(id)
    }

    // ---- update -----------------------------------------------------------

    /// Overwrite every attribute of record `id` with `draft`.
    pub async fn update(&self, id: RecordId, draft: Profile) -> Result<(), SyncError> {
        draft
            .validate()
            .map_err(|e| self.fail("update user", e.into()))?;

        self.store
            .replace(&id, &draft)
            .await
            .map_err(|e| self.fail("update user", e.into()))?;
        info!(%id, "User updated");

        self.resync(&Mutation::Updated(id)).await;
        self.presenter
            .notify(Notification::success("Success", "User updated successfully"));
        Ok(())
    }

    /// The record currently open for editing, if any.
    pub fn editing(&self) -> Option<EditSession> {
        self.state.borrow().editing.clone()
    }

    /// Open record `id` for editing. Any session already open is discarded.
    pub fn begin_edit(&self, id: &RecordId) -> Result<(), SyncError> {
        let session = {
            let state = self.state.borrow();
            state
                .records
                .iter()
                .find(|r| &r.id == id)
                .map(EditSession::of)
        };
        let session =
            session.ok_or_else(|| self.fail("edit user", SyncError::NoSuchRecord(id.clone())))?;

        let replaced = self.state.borrow_mut().editing.replace(session);
        if let Some(old) = replaced.filter(|old| &old.id != id) {
            debug!(discarded = %old.id, "Discarding open edit");
        }
        self.changed();
        Ok(())
    }

    /// Bind one input of the edit dialog.
    pub fn edit_field(&self, field: Field, value: &str) -> Result<(), SyncError> {
        {
            let mut state = self.state.borrow_mut();
            let session = state.editing.as_mut().ok_or(SyncError::NotEditing)?;
            session.draft.set(field, value)?;
        }
        self.changed();
        Ok(())
    }

    pub fn cancel_edit(&self) {
        if self.state.borrow_mut().editing.take().is_some() {
            self.changed();
        }
    }

    /// Save the open edit session.
    ///
    /// An invalid draft stays open so it can be corrected. Once the draft is
    /// sent to the store the session is closed, whatever the outcome.
    pub async fn save_edit(&self) -> Result<(), SyncError> {
        let session = self
            .editing()
            .ok_or_else(|| self.fail("update user", SyncError::NotEditing))?;
        session
            .draft
            .validate()
            .map_err(|e| self.fail("update user", e.into()))?;

        self.cancel_edit();
        self.update(session.id, session.draft).await
    }

    // ---- delete -----------------------------------------------------------

    /// Delete record `id` after the user confirms.
    ///
    /// Returns `Ok(false)` if the user declined; the store is not touched.
    pub async fn delete(&self, id: RecordId) -> Result<bool, SyncError> {
        if !self.presenter.confirm(&ConfirmPrompt::delete_user()).await {
            debug!(%id, "Delete declined");
            return Ok(false);
        }

        self.store
            .remove(&id)
            .await
            .map_err(|e| self.fail("delete user", e.into()))?;
        info!(%id, "User deleted");

        let closed = {
            let mut state = self.state.borrow_mut();
            match &state.editing {
                Some(session) if session.id == id => state.editing.take(),
                _ => None,
            }
        };
        if closed.is_some() {
            self.changed();
        }

        self.resync(&Mutation::Deleted(id)).await;
        self.presenter
            .notify(Notification::success("Deleted!", "User has been deleted."));
        Ok(true)
    }

    // ---- helpers ----------------------------------------------------------

    fn fail(&self, action: &str, err: SyncError) -> SyncError {
        if err.is_local() {
            warn!(action, error = %err, "Rejected");
        } else {
            error!(action, error = %err, "Store call failed");
        }
        self.presenter.notify(Notification::error(err.to_string()));
        err
    }

    fn changed(&self) {
        if let Some(callback) = &self.on_change {
            callback();
        }
    }
}
