use std::sync::Arc;

use catalog_core::model::{KategoriEntity, MenuEntity};
use services::AppServices;
use storage::repository::EntityRepository;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn menus(&self) -> Arc<dyn EntityRepository<MenuEntity>>;
    fn kategori(&self) -> Arc<dyn EntityRepository<KategoriEntity>>;

    /// Human-readable description of where the data comes from.
    fn api_label(&self) -> String;
}

impl UiApp for AppServices {
    fn menus(&self) -> Arc<dyn EntityRepository<MenuEntity>> {
        AppServices::menus(self)
    }

    fn kategori(&self) -> Arc<dyn EntityRepository<KategoriEntity>> {
        AppServices::kategori(self)
    }

    fn api_label(&self) -> String {
        self.backend().to_string()
    }
}

#[derive(Clone)]
pub struct AppContext {
    menus: Arc<dyn EntityRepository<MenuEntity>>,
    kategori: Arc<dyn EntityRepository<KategoriEntity>>,
    api_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            menus: app.menus(),
            kategori: app.kategori(),
            api_label: app.api_label(),
        }
    }

    #[must_use]
    pub fn menus(&self) -> Arc<dyn EntityRepository<MenuEntity>> {
        Arc::clone(&self.menus)
    }

    #[must_use]
    pub fn kategori(&self) -> Arc<dyn EntityRepository<KategoriEntity>> {
        Arc::clone(&self.kategori)
    }

    #[must_use]
    pub fn api_label(&self) -> &str {
        &self.api_label
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
