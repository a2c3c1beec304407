use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::FormError;
use crate::model::field::FieldSpec;
use crate::model::form::Form;
use crate::model::ids::RecordId;

/// The catalog resources the admin manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Menu,
    Kategori,
}

impl EntityKind {
    /// Path segment of the resource on the remote service.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Kategori => "kategori",
        }
    }

    /// Client route of the collection screen.
    #[must_use]
    pub fn collection_route(self) -> &'static str {
        match self {
            Self::Menu => "/menu",
            Self::Kategori => "/kategori",
        }
    }

    /// Lower-case noun used inside user-facing sentences.
    #[must_use]
    pub fn noun(self) -> &'static str {
        self.segment()
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::Kategori => "Kategori",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Entry of a select input for a reference field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: RecordId,
    pub label: String,
}

/// Everything the generic CRUD lifecycle needs to know about one resource.
///
/// Implemented by zero-sized markers; screens, repositories and workflows are
/// all parameterized by it instead of being written once per resource.
pub trait Entity: Send + Sync + 'static {
    /// Record as the server returns it.
    type Record: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;
    /// Payload sent on create and update.
    type Draft: Clone + fmt::Debug + PartialEq + Serialize + Send + Sync + 'static;

    const KIND: EntityKind;

    /// Editable fields, in display order.
    fn fields() -> &'static [FieldSpec];

    fn id(record: &Self::Record) -> &RecordId;

    /// Name shown to the user when the record is referred to (e.g. on delete).
    fn display_name(record: &Self::Record) -> &str;

    /// Pre-fill a form from a fetched record.
    fn to_form(record: &Self::Record) -> Form;

    /// Build the write payload from a form that already passed the
    /// required-field check.
    ///
    /// # Errors
    ///
    /// Returns `FormError` when a value cannot be converted to its wire type.
    fn draft_from_form(form: &Form) -> Result<Self::Draft, FormError>;

    /// Materialize a record from a draft. Used by local adapters that stand
    /// in for the server.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self::Record;

    /// Table header of the list screen.
    fn columns() -> &'static [&'static str];

    /// Table cells of one list row, aligned with `columns`.
    fn row(record: &Self::Record) -> Vec<String>;

    #[must_use]
    fn empty_form() -> Form {
        Form::empty(Self::fields())
    }

    #[must_use]
    fn choice(record: &Self::Record) -> ChoiceOption {
        ChoiceOption {
            value: Self::id(record).clone(),
            label: Self::display_name(record).to_owned(),
        }
    }
}
