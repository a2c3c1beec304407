#![forbid(unsafe_code)]

pub mod app_services;
pub mod crud;
pub mod error;
pub mod messages;
pub mod ports;

pub use app_services::{AppServices, Backend};
pub use error::{SubmitRejected, failure_message};
pub use ports::{ConfirmPrompt, Navigator, Notice, Notifier};

pub use crud::{
    DeleteOutcome, FormMode, FormState, ListPhase, ListState, StateCell, SubmitOutcome,
    SubmitRequest, SubmitTarget, delete_record, load_collection, load_options, load_record,
    submit_form,
};
