use store::{Profile, Record, RecordId};

/// A record open in the edit dialog.
///
/// The draft is a private copy; nothing reaches the store until the session
/// is saved, and cancelling simply drops it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub id: RecordId,
    pub draft: Profile,
}

impl EditSession {
    pub fn of(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            draft: record.profile.clone(),
        }
    }
}

/// What the last write changed, handed to the post-mutation hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    Created(RecordId),
    Updated(RecordId),
    Deleted(RecordId),
}

impl Mutation {
    pub fn id(&self) -> &RecordId {
        match self {
            Mutation::Created(id) | Mutation::Updated(id) | Mutation::Deleted(id) => id,
        }
    }
}
