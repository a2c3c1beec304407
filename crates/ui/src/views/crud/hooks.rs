use std::sync::Arc;

use catalog_core::model::{Entity, RecordId};
use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use services::{
    FormState, ListState, delete_record, load_collection, load_options, load_record, submit_form,
};
use storage::repository::EntityRepository;

use crate::cell::SignalCell;
use crate::dialog::DialogNotifier;
use crate::navigation::RouterNavigator;

pub struct ListScreen<E: Entity> {
    pub state: Signal<ListState<E>>,
    pub on_delete: Callback<RecordId>,
}

/// State of a collection screen; the collection is fetched once on mount.
pub fn use_list_screen<E: Entity>(repo: Arc<dyn EntityRepository<E>>) -> ListScreen<E> {
    let state = use_signal(ListState::<E>::new);
    let notifier = use_context::<DialogNotifier>();

    let repo_for_load = Arc::clone(&repo);
    use_future(move || {
        let repo = Arc::clone(&repo_for_load);
        async move {
            load_collection(&SignalCell::new(state), repo.as_ref()).await;
        }
    });

    let on_delete = use_callback(move |id: RecordId| {
        let repo = Arc::clone(&repo);
        spawn(async move {
            let outcome =
                delete_record(&SignalCell::new(state), repo.as_ref(), &notifier, &id).await;
            tracing::debug!(entity = %E::KIND, %id, ?outcome, "delete finished");
        });
    });

    ListScreen { state, on_delete }
}

pub struct FormScreen<E: Entity> {
    pub state: Signal<FormState<E>>,
    pub on_input: Callback<(&'static str, String)>,
    pub on_submit: Callback<()>,
    pub navigator: Navigator,
}

/// State of a create or edit screen backed by `repo`.
pub fn use_form_screen<E: Entity>(
    repo: Arc<dyn EntityRepository<E>>,
    initial: impl FnOnce() -> FormState<E>,
) -> FormScreen<E> {
    let mut state = use_signal(initial);
    let notifier = use_context::<DialogNotifier>();
    let router = use_navigator();
    let navigator = RouterNavigator::new(router);

    let on_input = use_callback(move |(name, value): (&'static str, String)| {
        state.write().update_field(name, value);
    });

    let on_submit = use_callback(move |()| {
        let repo = Arc::clone(&repo);
        spawn(async move {
            let outcome =
                submit_form(&SignalCell::new(state), repo.as_ref(), &notifier, &navigator).await;
            if let services::SubmitOutcome::Rejected(reason) = outcome {
                tracing::debug!(entity = %E::KIND, %reason, "submit not sent");
            }
        });
    });

    FormScreen {
        state,
        on_input,
        on_submit,
        navigator: router,
    }
}

/// Fetch the record behind an edit screen whenever `id` changes.
pub fn use_record_loader<E: Entity>(
    state: Signal<FormState<E>>,
    repo: Arc<dyn EntityRepository<E>>,
    id: &String,
) {
    use_effect(use_reactive((id,), move |(id,)| {
        let repo = Arc::clone(&repo);
        spawn(async move {
            load_record(&SignalCell::new(state), repo.as_ref(), &RecordId::new(id)).await;
        });
    }));
}

/// Fill a form's select options from the `R` collection once on mount.
pub fn use_option_loader<E: Entity, R: Entity>(
    state: Signal<FormState<E>>,
    repo: Arc<dyn EntityRepository<R>>,
) {
    use_future(move || {
        let repo = Arc::clone(&repo);
        async move {
            load_options::<E, R, _>(&SignalCell::new(state), repo.as_ref()).await;
        }
    });
}
