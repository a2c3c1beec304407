use std::fmt;
use std::sync::Arc;

use catalog_core::model::{KategoriEntity, MenuEntity};
use storage::http::HttpConfig;
use storage::repository::{EntityRepository, Storage};

/// Where the catalog data lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    Remote(String),
    Offline,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(base) => f.write_str(base),
            Self::Offline => f.write_str("offline demo data"),
        }
    }
}

/// Assembles the repositories the screens work against.
#[derive(Clone)]
pub struct AppServices {
    storage: Storage,
    backend: Backend,
}

impl AppServices {
    /// Services backed by the remote REST service at `config`.
    #[must_use]
    pub fn remote(config: HttpConfig) -> Self {
        let backend = Backend::Remote(config.base_url().to_string());
        tracing::info!(api = %backend, "using remote catalog");
        Self {
            storage: Storage::http(config),
            backend,
        }
    }

    /// Services backed by in-memory sample data.
    #[must_use]
    pub fn offline() -> Self {
        tracing::info!("using offline demo catalog");
        Self::from_storage(Storage::demo(), Backend::Offline)
    }

    #[must_use]
    pub fn from_storage(storage: Storage, backend: Backend) -> Self {
        Self { storage, backend }
    }

    #[must_use]
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    #[must_use]
    pub fn menus(&self) -> Arc<dyn EntityRepository<MenuEntity>> {
        Arc::clone(&self.storage.menus)
    }

    #[must_use]
    pub fn kategori(&self) -> Arc<dyn EntityRepository<KategoriEntity>> {
        Arc::clone(&self.storage.kategori)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_backend_reports_base_url() {
        let config = HttpConfig::new("http://localhost:3000/api").unwrap();
        let services = AppServices::remote(config);
        assert_eq!(services.backend().to_string(), "http://localhost:3000/api");
    }

    #[tokio::test]
    async fn offline_services_serve_demo_catalog() {
        let services = AppServices::offline();
        assert_eq!(services.backend(), &Backend::Offline);
        assert_eq!(services.menus().list().await.unwrap().len(), 2);
        assert_eq!(services.kategori().list().await.unwrap().len(), 2);
    }
}
