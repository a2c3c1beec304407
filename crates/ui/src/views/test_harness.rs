use std::sync::Arc;

use catalog_core::model::{KategoriEntity, MenuEntity};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use storage::repository::{EntityRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::dialog::{DialogLayer, use_dialog_provider};
use crate::views::{
    HomeView, KategoriCreateView, KategoriEditView, KategoriListView, MenuCreateView,
    MenuEditView, MenuListView,
};

pub const TEST_API_LABEL: &str = "http://catalog.test/api";

#[derive(Clone)]
struct TestApp {
    storage: Storage,
}

impl UiApp for TestApp {
    fn menus(&self) -> Arc<dyn EntityRepository<MenuEntity>> {
        Arc::clone(&self.storage.menus)
    }

    fn kategori(&self) -> Arc<dyn EntityRepository<KategoriEntity>> {
        Arc::clone(&self.storage.kategori)
    }

    fn api_label(&self) -> String {
        TEST_API_LABEL.to_string()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    MenuList,
    MenuCreate,
    MenuEdit(String),
    KategoriList,
    KategoriCreate,
    KategoriEdit(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_dialog_provider();
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let page = match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::MenuList => rsx! { MenuListView {} },
        ViewKind::MenuCreate => rsx! { MenuCreateView {} },
        ViewKind::MenuEdit(id) => rsx! { MenuEditView { id } },
        ViewKind::KategoriList => rsx! { KategoriListView {} },
        ViewKind::KategoriCreate => rsx! { KategoriCreateView {} },
        ViewKind::KategoriEdit(id) => rsx! { KategoriEditView { id } },
    };
    rsx! {
        {page}
        DialogLayer {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Run spawned loads until the screen settles.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::demo())
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let app = Arc::new(TestApp {
        storage: storage.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, storage }
}
