//! Fixed user-facing texts of the CRUD screens.

use catalog_core::model::EntityKind;

use crate::ports::{ConfirmPrompt, Notice};

pub const LOAD_FAILED: &str = "Terjadi kesalahan saat mengambil data";
pub const CREATE_FAILED: &str = "Terjadi kesalahan saat menyimpan data";
pub const UPDATE_FAILED: &str = "Terjadi kesalahan saat mengupdate data";

const SUCCESS_TITLE: &str = "Berhasil!";

#[must_use]
pub fn created(kind: EntityKind) -> Notice {
    Notice::new(
        SUCCESS_TITLE,
        format!("Data {} berhasil disimpan.", kind.noun()),
    )
}

#[must_use]
pub fn updated(kind: EntityKind) -> Notice {
    Notice::new(
        SUCCESS_TITLE,
        format!("Data {} berhasil diperbarui.", kind.noun()),
    )
}

#[must_use]
pub fn delete_prompt(name: &str) -> ConfirmPrompt {
    ConfirmPrompt {
        title: format!("Are you sure wanna delete {name}?"),
        text: "You won't be able to revert this!".to_string(),
        confirm_label: "Yes, delete it!".to_string(),
        cancel_label: "Cancel".to_string(),
    }
}

#[must_use]
pub fn deleted() -> Notice {
    Notice::new("Deleted!", "Your file has been deleted.")
}

#[must_use]
pub fn delete_failed() -> Notice {
    Notice::new("Error", "There was an issue deleting the data.")
}
