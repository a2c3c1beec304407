use std::collections::HashMap;
use std::marker::PhantomData;

use catalog_core::model::{ChoiceOption, Entity, EntityKind, Form, RecordId};
use storage::repository::StorageError;

use crate::error::{SubmitRejected, failure_message};
use crate::messages;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(RecordId),
}

/// A validated write, ready to be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitRequest<E: Entity> {
    pub target: SubmitTarget,
    pub draft: E::Draft,
}

/// View state of a create or edit screen.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState<E: Entity> {
    mode: FormMode,
    form: Form,
    requested: Option<RecordId>,
    loading_initial: bool,
    submitting: bool,
    error: Option<String>,
    options: HashMap<EntityKind, Vec<ChoiceOption>>,
    entity: PhantomData<E>,
}

impl<E: Entity> FormState<E> {
    /// Empty form; nothing to load.
    #[must_use]
    pub fn create() -> Self {
        Self::with_mode(FormMode::Create, false)
    }

    /// Form for an existing record; stays loading until `finish_load`.
    #[must_use]
    pub fn edit(id: RecordId) -> Self {
        Self::with_mode(FormMode::Edit(id), true)
    }

    fn with_mode(mode: FormMode, loading_initial: bool) -> Self {
        Self {
            mode,
            form: E::empty_form(),
            requested: None,
            loading_initial,
            submitting: false,
            error: None,
            options: HashMap::new(),
            entity: PhantomData,
        }
    }

    #[must_use]
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    #[must_use]
    pub fn is_loading_initial(&self) -> bool {
        self.loading_initial
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn options_for(&self, kind: EntityKind) -> &[ChoiceOption] {
        self.options.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn set_options(&mut self, kind: EntityKind, options: Vec<ChoiceOption>) {
        self.options.insert(kind, options);
    }

    /// Start loading `id`. Returns `false` when `id` is the identifier most
    /// recently requested, in which case no fetch should run.
    pub fn begin_load(&mut self, id: &RecordId) -> bool {
        if self.requested.as_ref() == Some(id) {
            return false;
        }
        self.requested = Some(id.clone());
        self.mode = FormMode::Edit(id.clone());
        self.form = E::empty_form();
        self.loading_initial = true;
        self.error = None;
        true
    }

    /// Settle a load. Results for anything but the latest requested id are
    /// dropped and `false` is returned.
    pub fn finish_load(&mut self, id: &RecordId, result: Result<E::Record, StorageError>) -> bool {
        if self.requested.as_ref() != Some(id) {
            return false;
        }
        match result {
            Ok(record) => {
                self.form = E::to_form(&record);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(failure_message(&err, messages::LOAD_FAILED));
            }
        }
        self.loading_initial = false;
        true
    }

    /// Merge one field's value. Unknown names are ignored.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.form.set(name, value)
    }

    /// Validate and, if the form passes, enter the submitting state.
    ///
    /// # Errors
    ///
    /// Returns `SubmitRejected::InFlight` or `SubmitRejected::Loading` when a
    /// submit is not possible right now, and `SubmitRejected::Invalid` when
    /// the form fails validation (the message is also recorded).
    pub fn begin_submit(&mut self) -> Result<SubmitRequest<E>, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        if self.loading_initial {
            return Err(SubmitRejected::Loading);
        }

        let draft = match self
            .form
            .require_all()
            .and_then(|()| E::draft_from_form(&self.form))
        {
            Ok(draft) => draft,
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(err.into());
            }
        };

        let target = match &self.mode {
            FormMode::Create => SubmitTarget::Create,
            FormMode::Edit(id) => SubmitTarget::Update(id.clone()),
        };
        self.error = None;
        self.submitting = true;
        Ok(SubmitRequest { target, draft })
    }

    /// Settle a submit.
    ///
    /// A successful create clears the form so the screen is ready for the
    /// next entry.
    ///
    /// # Errors
    ///
    /// Returns the user-facing failure message, which is also recorded.
    pub fn finish_submit(
        &mut self,
        result: Result<E::Record, StorageError>,
    ) -> Result<E::Record, String> {
        self.submitting = false;
        match result {
            Ok(record) => {
                if self.mode == FormMode::Create {
                    self.form.clear();
                }
                Ok(record)
            }
            Err(err) => {
                let fallback = match self.mode {
                    FormMode::Create => messages::CREATE_FAILED,
                    FormMode::Edit(_) => messages::UPDATE_FAILED,
                };
                let message = failure_message(&err, fallback);
                self.error = Some(message.clone());
                Err(message)
            }
        }
    }
}
