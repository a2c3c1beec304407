use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::dialog::DialogLayer;
use crate::views::{
    HomeView, KategoriCreateView, KategoriEditView, KategoriListView, MenuCreateView,
    MenuEditView, MenuListView, NotFoundView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/menu", MenuListView)] MenuList {},
        #[route("/menu/create", MenuCreateView)] MenuCreate {},
        #[route("/menu/edit/:id", MenuEditView)] MenuEdit { id: String },
        #[route("/kategori", KategoriListView)] KategoriList {},
        #[route("/kategori/create", KategoriCreateView)] KategoriCreate {},
        #[route("/kategori/edit/:id", KategoriEditView)] KategoriEdit { id: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            DialogLayer {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            span { class: "navbar-brand", "Catalog Admin" }
            ul { class: "navbar-nav",
                li { Link { class: "nav-link", to: Route::Home {}, "Home" } }
                li { Link { class: "nav-link", to: Route::MenuList {}, "Menu" } }
                li { Link { class: "nav-link", to: Route::KategoriList {}, "Kategori" } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_paths_parse_to_list_routes() {
        assert_eq!("/menu".parse::<Route>().ok(), Some(Route::MenuList {}));
        assert_eq!("/kategori".parse::<Route>().ok(), Some(Route::KategoriList {}));
    }

    #[test]
    fn edit_route_carries_identifier() {
        assert_eq!(
            "/menu/edit/42".parse::<Route>().ok(),
            Some(Route::MenuEdit { id: "42".into() })
        );
        assert_eq!(
            Route::KategoriEdit { id: "9".into() }.to_string(),
            "/kategori/edit/9"
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(matches!(
            "/nowhere/at/all".parse::<Route>(),
            Ok(Route::NotFound { .. })
        ));
    }
}
