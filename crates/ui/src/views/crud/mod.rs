//! Screens shared by every catalog resource.
//!
//! Hooks wire a resource's repository into the service workflows; the
//! page functions render a list or form screen from that state.

mod components;
mod hooks;

pub use components::{collection_page, form_page, FormLabels};
pub use hooks::{
    FormScreen, ListScreen, use_form_screen, use_list_screen, use_option_loader,
    use_record_loader,
};
