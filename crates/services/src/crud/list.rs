use catalog_core::model::{Entity, RecordId};
use storage::repository::StorageError;

use crate::error::failure_message;
use crate::messages;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Initial,
    Loading,
    Ready,
    LoadError,
}

/// View state of a collection screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<E: Entity> {
    items: Vec<E::Record>,
    phase: ListPhase,
    error: Option<String>,
    deleting: Option<RecordId>,
}

impl<E: Entity> Default for ListState<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> ListState<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: ListPhase::Initial,
            error: None,
            deleting: None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[E::Record] {
        &self.items
    }

    #[must_use]
    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// True from mount until the first fetch settles.
    #[must_use]
    pub fn is_loading_initial(&self) -> bool {
        matches!(self.phase, ListPhase::Initial | ListPhase::Loading)
    }

    /// True while a delete request is outstanding.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.deleting.is_some()
    }

    #[must_use]
    pub fn deleting(&self) -> Option<&RecordId> {
        self.deleting.as_ref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn find(&self, id: &RecordId) -> Option<&E::Record> {
        self.items.iter().find(|record| E::id(record) == id)
    }

    pub fn begin_load(&mut self) {
        self.phase = ListPhase::Loading;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<E::Record>, StorageError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = ListPhase::Ready;
            }
            Err(err) => {
                self.error = Some(failure_message(&err, messages::LOAD_FAILED));
                self.phase = ListPhase::LoadError;
            }
        }
    }

    /// Display name of a record that may be deleted right now.
    ///
    /// `None` while the list is not ready, while another delete is in
    /// flight, or when the id is not in the local copy.
    #[must_use]
    pub fn deletable_name(&self, id: &RecordId) -> Option<String> {
        if self.phase != ListPhase::Ready || self.deleting.is_some() {
            return None;
        }
        self.find(id).map(|record| E::display_name(record).to_owned())
    }

    /// Mark `id` as being deleted. Returns `false` if that is not allowed.
    pub fn begin_delete(&mut self, id: &RecordId) -> bool {
        if self.deletable_name(id).is_none() {
            return false;
        }
        self.deleting = Some(id.clone());
        true
    }

    /// Settle a delete. Only a success touches the local collection.
    pub fn finish_delete(&mut self, id: &RecordId, result: &Result<(), StorageError>) {
        self.deleting = None;
        if result.is_ok() {
            self.items.retain(|record| E::id(record) != id);
        }
    }
}
