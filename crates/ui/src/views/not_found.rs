use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page",
            h2 { "Halaman tidak ditemukan" }
            p { "Tidak ada halaman di /{path}." }
            Link { to: Route::Home {}, "Kembali ke Home" }
        }
    }
}
