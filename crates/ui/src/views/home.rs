use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page",
            h2 { "Home" }
            p { "Kelola data menu dan kategori restoran." }
            p { class: "muted", "API: {ctx.api_label()}" }
            ul { class: "home-links",
                li { Link { to: Route::MenuList {}, "Daftar Menu" } }
                li { Link { to: Route::KategoriList {}, "Daftar Kategori" } }
            }
        }
    }
}
