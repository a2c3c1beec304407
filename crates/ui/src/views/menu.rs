use catalog_core::model::{KategoriEntity, MenuEntity, RecordId};
use dioxus::prelude::*;
use services::FormState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::crud::{
    FormLabels, collection_page, form_page, use_form_screen, use_list_screen, use_option_loader,
    use_record_loader,
};

#[component]
pub fn MenuListView() -> Element {
    let ctx = use_context::<AppContext>();
    let screen = use_list_screen::<MenuEntity>(ctx.menus());

    collection_page(&screen, Route::MenuCreate {}, |id| Route::MenuEdit {
        id: id.to_string(),
    })
}

#[component]
pub fn MenuCreateView() -> Element {
    let ctx = use_context::<AppContext>();
    let screen = use_form_screen::<MenuEntity>(ctx.menus(), FormState::create);
    use_option_loader::<MenuEntity, KategoriEntity>(screen.state, ctx.kategori());

    form_page(&screen, FormLabels::create("Tambah Menu"), Route::MenuList {})
}

#[component]
pub fn MenuEditView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let initial_id = id.clone();
    let screen = use_form_screen::<MenuEntity>(ctx.menus(), move || {
        FormState::edit(RecordId::new(initial_id))
    });
    use_option_loader::<MenuEntity, KategoriEntity>(screen.state, ctx.kategori());
    use_record_loader(screen.state, ctx.menus(), &id);

    form_page(&screen, FormLabels::edit("Edit Menu"), Route::MenuList {})
}
