use catalog_core::model::{ChoiceOption, Entity, FieldKind, FieldSpec, RecordId};
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

use super::hooks::{FormScreen, ListScreen};

#[derive(Clone, Debug, PartialEq)]
struct RowData {
    id: RecordId,
    cells: Vec<String>,
    edit: Route,
}

/// Table of a collection with per-row edit link and delete button.
pub fn collection_page<E: Entity>(
    screen: &ListScreen<E>,
    create: Route,
    edit: impl Fn(&RecordId) -> Route,
) -> Element {
    let state = screen.state.read();
    if state.is_loading_initial() {
        return rsx! {
            div { class: "page", "Loading..." }
        };
    }
    if let Some(message) = state.error_message() {
        return rsx! {
            div { class: "page", "Error: {message}" }
        };
    }

    let title = E::KIND.title();
    let span = E::columns().len() + 2;
    let deleting = state.deleting().cloned();
    let rows: Vec<RowData> = state
        .items()
        .iter()
        .map(|record| RowData {
            id: E::id(record).clone(),
            cells: E::row(record),
            edit: edit(E::id(record)),
        })
        .collect();
    drop(state);

    rsx! {
        div { class: "page",
            h1 { "{title} List" }
            Link { class: "btn btn-primary mb-3", to: create, "Tambah {title}" }
            table { class: "table table-striped",
                thead {
                    tr {
                        for column in E::columns() {
                            th { "{column}" }
                        }
                        th { "Edit" }
                        th { "Aksi" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { colspan: "{span}", class: "empty", "Belum ada data." }
                        }
                    }
                    for row in rows {
                        CollectionRow {
                            key: "{row.id}",
                            deleting: deleting.as_ref() == Some(&row.id),
                            busy: deleting.is_some(),
                            row: row.clone(),
                            on_delete: screen.on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CollectionRow(row: RowData, deleting: bool, busy: bool, on_delete: Callback<RecordId>) -> Element {
    let id = row.id.clone();
    rsx! {
        tr {
            for cell in row.cells {
                td { "{cell}" }
            }
            td {
                Link { class: "btn btn-warning", to: row.edit, "Edit" }
            }
            td {
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |_| on_delete.call(id.clone()),
                    if deleting { "Menghapus..." } else { "Hapus" }
                }
            }
        }
    }
}

/// Fixed texts of a create or edit screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormLabels {
    pub heading: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
}

impl FormLabels {
    #[must_use]
    pub fn create(heading: &'static str) -> Self {
        Self {
            heading,
            submit: "Simpan",
            submitting: "Menyimpan...",
        }
    }

    #[must_use]
    pub fn edit(heading: &'static str) -> Self {
        Self {
            heading,
            submit: "Update",
            submitting: "Mengupdate...",
        }
    }
}

/// Create or edit form for every field of `E`.
pub fn form_page<E: Entity>(screen: &FormScreen<E>, labels: FormLabels, cancel: Route) -> Element {
    let state = screen.state.read();
    if state.is_loading_initial() {
        return rsx! {
            div { class: "page", "Loading..." }
        };
    }

    let submitting = state.is_submitting();
    let error = state.error_message().map(str::to_owned);
    let fields: Vec<(FieldSpec, String, Vec<ChoiceOption>)> = E::fields()
        .iter()
        .map(|spec| {
            let options = match spec.kind {
                FieldKind::Reference(kind) => state.options_for(kind).to_vec(),
                _ => Vec::new(),
            };
            (*spec, state.form().value(spec.name).to_string(), options)
        })
        .collect();
    drop(state);

    let on_submit = screen.on_submit;
    let on_input = screen.on_input;
    let navigator = screen.navigator;

    rsx! {
        div { class: "page",
            h2 { class: "mb-4", "{labels.heading}" }
            if let Some(error) = error {
                div { class: "alert alert-danger", role: "alert", "{error}" }
            }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                for (spec, value, options) in fields {
                    FieldInput {
                        key: "{spec.name}",
                        spec,
                        value,
                        options,
                        disabled: submitting,
                        on_input,
                    }
                }
                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "{labels.submitting}" } else { "{labels.submit}" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: submitting,
                        onclick: move |_| {
                            let _ = navigator.push(cancel.clone());
                        },
                        "Batal"
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(
    spec: FieldSpec,
    value: String,
    options: Vec<ChoiceOption>,
    disabled: bool,
    on_input: Callback<(&'static str, String)>,
) -> Element {
    let name = spec.name;
    let control = match spec.kind {
        FieldKind::Text => rsx! {
            input {
                r#type: "text",
                class: "form-control",
                id: name,
                name,
                disabled,
                value: "{value}",
                placeholder: spec.placeholder,
                oninput: move |evt| on_input.call((name, evt.value())),
            }
        },
        FieldKind::TextArea => rsx! {
            textarea {
                class: "form-control",
                id: name,
                name,
                disabled,
                rows: "3",
                value: "{value}",
                placeholder: spec.placeholder,
                oninput: move |evt| on_input.call((name, evt.value())),
            }
        },
        FieldKind::Number(hints) => rsx! {
            input {
                r#type: "number",
                class: "form-control",
                id: name,
                name,
                disabled,
                value: "{value}",
                placeholder: spec.placeholder,
                step: hints.step,
                min: hints.min,
                max: hints.max,
                oninput: move |evt| on_input.call((name, evt.value())),
            }
        },
        FieldKind::Reference(_) => rsx! {
            select {
                class: "form-control",
                id: name,
                name,
                disabled,
                value: "{value}",
                onchange: move |evt| on_input.call((name, evt.value())),
                option { value: "", "{spec.placeholder}" }
                for choice in options {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value.as_str() == value,
                        "{choice.label}"
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: name, "{spec.label}" }
            {control}
        }
    }
}
