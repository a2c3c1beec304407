//! The view-state lifecycle shared by every entity screen.
//!
//! State types hold no I/O and change only through their methods; the
//! `workflow` functions sequence those changes around repository calls and
//! the notification/navigation ports.

mod cell;
mod form;
mod list;
mod workflow;

pub use cell::StateCell;
pub use form::{FormMode, FormState, SubmitRequest, SubmitTarget};
pub use list::{ListPhase, ListState};
pub use workflow::{
    DeleteOutcome, SubmitOutcome, delete_record, load_collection, load_options, load_record,
    submit_form,
};
