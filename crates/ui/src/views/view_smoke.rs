use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use catalog_core::model::{Entity, KategoriEntity, MenuEntity, RecordId};
use dioxus::core::{NoOpMutations, ScopeId};
use storage::repository::{EntityRepository, InMemoryRepository, Storage, StorageError};

use super::test_harness::{
    TEST_API_LABEL, ViewKind, setup_view_harness, setup_view_harness_with_storage,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_api_base() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    let expected = format!("API: {TEST_API_LABEL}");
    assert!(html.contains(&expected), "missing {expected} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_list_smoke_shows_loading_then_rows() {
    let mut harness = setup_view_harness(ViewKind::MenuList);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing loading text in {html}");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Menu List"), "missing title in {html}");
    assert!(html.contains("Tambah Menu"), "missing create link in {html}");
    assert!(html.contains("Nasi Goreng"), "missing row in {html}");
    assert!(html.contains("Makanan"), "missing expanded category in {html}");
    assert!(html.contains("Hapus"), "missing delete button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_edit_smoke_prefills_form() {
    let mut harness = setup_view_harness(ViewKind::MenuEdit("m-1".into()));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Loading..."), "still loading in {html}");
    assert!(html.contains("Edit Menu"), "missing heading in {html}");
    assert!(html.contains("value=\"Nasi Goreng\""), "missing name in {html}");
    assert!(html.contains("value=\"20000\""), "missing price in {html}");
    assert!(
        html.matches("value=\"k-1\"").count() >= 2,
        "category not preselected in {html}"
    );
    assert!(html.contains("Update"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn kategori_create_smoke_renders_empty_form() {
    let mut harness = setup_view_harness(ViewKind::KategoriCreate);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Tambah Kategori"), "missing heading in {html}");
    assert!(html.contains("Contoh: Makanan"), "missing placeholder in {html}");
    assert!(html.contains("Simpan"), "missing submit in {html}");
    assert!(html.contains("Batal"), "missing cancel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_create_smoke_lists_category_options() {
    let mut harness = setup_view_harness(ViewKind::MenuCreate);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Pilih Kategori"), "missing placeholder in {html}");
    assert!(html.contains("Minuman"), "missing option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn missing_record_smoke_shows_error() {
    let mut harness = setup_view_harness(ViewKind::KategoriEdit("nope".into()));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("not found"), "missing error in {html}");
}

struct FailingKategoriRepo;

#[async_trait]
impl EntityRepository<KategoriEntity> for FailingKategoriRepo {
    async fn list(&self) -> Result<Vec<<KategoriEntity as Entity>::Record>, StorageError> {
        Err(StorageError::Connection("Network Error".to_string()))
    }

    async fn get(&self, _id: &RecordId) -> Result<<KategoriEntity as Entity>::Record, StorageError> {
        Err(StorageError::Connection("Network Error".to_string()))
    }

    async fn create(
        &self,
        _draft: &<KategoriEntity as Entity>::Draft,
    ) -> Result<<KategoriEntity as Entity>::Record, StorageError> {
        Err(StorageError::Connection("Network Error".to_string()))
    }

    async fn update(
        &self,
        _id: &RecordId,
        _draft: &<KategoriEntity as Entity>::Draft,
    ) -> Result<<KategoriEntity as Entity>::Record, StorageError> {
        Err(StorageError::Connection("Network Error".to_string()))
    }

    async fn delete(&self, _id: &RecordId) -> Result<(), StorageError> {
        Err(StorageError::Connection("Network Error".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn kategori_list_smoke_renders_error_state() {
    let storage = Storage {
        menus: Arc::new(InMemoryRepository::new()),
        kategori: Arc::new(FailingKategoriRepo),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::KategoriList, storage);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Error: Network Error"), "missing error in {html}");
}

struct CountingMenus {
    inner: Arc<dyn EntityRepository<MenuEntity>>,
    gets: Arc<AtomicUsize>,
}

#[async_trait]
impl EntityRepository<MenuEntity> for CountingMenus {
    async fn list(&self) -> Result<Vec<<MenuEntity as Entity>::Record>, StorageError> {
        self.inner.list().await
    }

    async fn get(&self, id: &RecordId) -> Result<<MenuEntity as Entity>::Record, StorageError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id).await
    }

    async fn create(
        &self,
        draft: &<MenuEntity as Entity>::Draft,
    ) -> Result<<MenuEntity as Entity>::Record, StorageError> {
        self.inner.create(draft).await
    }

    async fn update(
        &self,
        id: &RecordId,
        draft: &<MenuEntity as Entity>::Draft,
    ) -> Result<<MenuEntity as Entity>::Record, StorageError> {
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StorageError> {
        self.inner.delete(id).await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn menu_edit_smoke_rerender_keeps_single_fetch() {
    let demo = Storage::demo();
    let gets = Arc::new(AtomicUsize::new(0));
    let storage = Storage {
        menus: Arc::new(CountingMenus {
            inner: Arc::clone(&demo.menus),
            gets: Arc::clone(&gets),
        }),
        kategori: Arc::clone(&demo.kategori),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::MenuEdit("m-1".into()), storage);
    harness.rebuild();
    harness.settle().await;
    assert_eq!(gets.load(Ordering::SeqCst), 1);

    for _ in 0..2 {
        for scope in 0..32 {
            harness.dom.mark_dirty(ScopeId(scope));
        }
        harness.dom.render_immediate(&mut NoOpMutations);
        harness.settle().await;
    }

    let html = harness.render();
    assert!(html.contains("value=\"Nasi Goreng\""), "form lost after re-render in {html}");
    assert_eq!(gets.load(Ordering::SeqCst), 1, "same id fetched again");
}
