use thiserror::Error;

/// Errors returned by the mutating operations of a
/// [`ReactiveStore`](super::ReactiveStore).
///
/// A failed call never changes the stored snapshot and never notifies
/// observers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with the same id is already present.
    #[error("record with id '{id}' already exists")]
    DuplicateId {
        /// Id of the rejected record
        id: String,
    },

    /// No record with the requested id exists.
    #[error("record with id '{id}' not found")]
    NotFound {
        /// Id that was looked up
        id: String,
    },

    /// An observer callback tried to mutate the store while a snapshot was
    /// being delivered.
    #[error("'{operation}' called while observers are being notified")]
    ReentrantMutation {
        /// Name of the rejected operation
        operation: &'static str,
    },
}

impl StoreError {
    pub(crate) fn duplicate_id(id: impl ToString) -> Self {
        Self::DuplicateId { id: id.to_string() }
    }

    pub(crate) fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}
