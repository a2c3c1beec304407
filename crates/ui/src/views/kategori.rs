use catalog_core::model::{KategoriEntity, RecordId};
use dioxus::prelude::*;
use services::FormState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::crud::{
    FormLabels, collection_page, form_page, use_form_screen, use_list_screen, use_record_loader,
};

#[component]
pub fn KategoriListView() -> Element {
    let ctx = use_context::<AppContext>();
    let screen = use_list_screen::<KategoriEntity>(ctx.kategori());

    collection_page(&screen, Route::KategoriCreate {}, |id| Route::KategoriEdit {
        id: id.to_string(),
    })
}

#[component]
pub fn KategoriCreateView() -> Element {
    let ctx = use_context::<AppContext>();
    let screen = use_form_screen::<KategoriEntity>(ctx.kategori(), FormState::create);

    form_page(&screen, FormLabels::create("Tambah Kategori"), Route::KategoriList {})
}

#[component]
pub fn KategoriEditView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let initial_id = id.clone();
    let screen = use_form_screen::<KategoriEntity>(ctx.kategori(), move || {
        FormState::edit(RecordId::new(initial_id))
    });
    use_record_loader(screen.state, ctx.kategori(), &id);

    form_page(&screen, FormLabels::edit("Edit Kategori"), Route::KategoriList {})
}
