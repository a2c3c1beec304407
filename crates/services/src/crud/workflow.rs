use catalog_core::model::{Entity, RecordId};
use storage::repository::{EntityRepository, StorageError};

use crate::crud::cell::StateCell;
use crate::crud::form::{FormState, SubmitTarget};
use crate::crud::list::ListState;
use crate::error::SubmitRejected;
use crate::messages;
use crate::ports::{Navigator, Notifier};

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user answered "no"; nothing was sent.
    Cancelled,
    /// The record is not deletable right now (unknown id, list not ready,
    /// another delete in flight).
    Unavailable,
    Failed(StorageError),
    /// The screen went away before the outcome could be applied.
    Detached,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<E: Entity> {
    Saved(E::Record),
    Rejected(SubmitRejected),
    Failed(String),
    Detached,
}

/// Fetch the collection into a list screen's state.
pub async fn load_collection<E, C>(cell: &C, repo: &dyn EntityRepository<E>)
where
    E: Entity,
    C: StateCell<ListState<E>>,
{
    if cell.update(ListState::begin_load).is_none() {
        return;
    }

    let result = repo.list().await;
    match &result {
        Ok(items) => tracing::info!(entity = %E::KIND, count = items.len(), "collection loaded"),
        Err(err) => tracing::error!(entity = %E::KIND, error = %err, "failed to load collection"),
    }

    if cell.update(|state| state.finish_load(result)).is_none() {
        tracing::debug!(entity = %E::KIND, "list screen gone; dropping result");
    }
}

/// Confirm with the user, then delete one record of a list screen.
pub async fn delete_record<E, C>(
    cell: &C,
    repo: &dyn EntityRepository<E>,
    notifier: &dyn Notifier,
    id: &RecordId,
) -> DeleteOutcome
where
    E: Entity,
    C: StateCell<ListState<E>>,
{
    let Some(name) = cell.read(|state| state.deletable_name(id)).flatten() else {
        return DeleteOutcome::Unavailable;
    };

    if !notifier.confirm(&messages::delete_prompt(&name)).await {
        return DeleteOutcome::Cancelled;
    }

    match cell.update(|state| state.begin_delete(id)) {
        Some(true) => {}
        Some(false) => return DeleteOutcome::Unavailable,
        None => return DeleteOutcome::Detached,
    }

    let result = repo.delete(id).await;
    let applied = cell
        .update(|state| state.finish_delete(id, &result))
        .is_some();

    match result {
        Ok(()) => {
            tracing::info!(entity = %E::KIND, %id, "record deleted");
            if !applied {
                return DeleteOutcome::Detached;
            }
            notifier.notify_success(&messages::deleted());
            DeleteOutcome::Deleted
        }
        Err(err) => {
            tracing::error!(entity = %E::KIND, %id, error = %err, "failed to delete record");
            if !applied {
                return DeleteOutcome::Detached;
            }
            notifier.notify_error(&messages::delete_failed());
            DeleteOutcome::Failed(err)
        }
    }
}

/// Fetch the record an edit screen points at, unless it is already the one
/// most recently requested.
pub async fn load_record<E, C>(cell: &C, repo: &dyn EntityRepository<E>, id: &RecordId)
where
    E: Entity,
    C: StateCell<FormState<E>>,
{
    if cell.update(|state| state.begin_load(id)) != Some(true) {
        return;
    }

    let result = repo.get(id).await;
    if let Err(err) = &result {
        tracing::error!(entity = %E::KIND, %id, error = %err, "failed to load record");
    }

    match cell.update(|state| state.finish_load(id, result)) {
        Some(true) => {}
        Some(false) => tracing::debug!(entity = %E::KIND, %id, "stale load result dropped"),
        None => tracing::debug!(entity = %E::KIND, %id, "form screen gone; dropping result"),
    }
}

/// Fill the select options of a form's reference field from the referenced
/// collection. Failures only leave the options empty.
pub async fn load_options<E, R, C>(cell: &C, repo: &dyn EntityRepository<R>)
where
    E: Entity,
    R: Entity,
    C: StateCell<FormState<E>>,
{
    match repo.list().await {
        Ok(records) => {
            let options = records.iter().map(R::choice).collect();
            cell.update(|state| state.set_options(R::KIND, options));
        }
        Err(err) => {
            tracing::warn!(entity = %E::KIND, options = %R::KIND, error = %err, "failed to load options");
        }
    }
}

/// Validate and send a create/edit form; on success acknowledge and go back
/// to the collection screen.
pub async fn submit_form<E, C>(
    cell: &C,
    repo: &dyn EntityRepository<E>,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> SubmitOutcome<E>
where
    E: Entity,
    C: StateCell<FormState<E>>,
{
    let request = match cell.update(FormState::begin_submit) {
        Some(Ok(request)) => request,
        Some(Err(rejected)) => {
            tracing::debug!(entity = %E::KIND, reason = %rejected, "submit rejected");
            return SubmitOutcome::Rejected(rejected);
        }
        None => return SubmitOutcome::Detached,
    };

    let result = match &request.target {
        SubmitTarget::Create => repo.create(&request.draft).await,
        SubmitTarget::Update(id) => repo.update(id, &request.draft).await,
    };
    if let Err(err) = &result {
        tracing::error!(entity = %E::KIND, error = %err, "failed to save record");
    }

    let Some(finished) = cell.update(|state| state.finish_submit(result)) else {
        return SubmitOutcome::Detached;
    };

    match finished {
        Ok(record) => {
            tracing::info!(entity = %E::KIND, id = %E::id(&record), "record saved");
            let notice = match request.target {
                SubmitTarget::Create => messages::created(E::KIND),
                SubmitTarget::Update(_) => messages::updated(E::KIND),
            };
            notifier.notify_success(&notice);
            navigator.navigate(E::KIND.collection_route());
            SubmitOutcome::Saved(record)
        }
        Err(message) => SubmitOutcome::Failed(message),
    }
}
