use async_trait::async_trait;
use catalog_core::model::{
    CategoryRef, Entity, Kategori, KategoriEntity, MenuDraft, MenuEntity, MenuItem, RecordId,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Non-success HTTP status, with the payload's `message` when it had one.
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl StorageError {
    /// Message the server put in its error payload, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Description of the failure at the transport level, if there is a
    /// meaningful one.
    #[must_use]
    pub fn transport_message(&self) -> Option<String> {
        let text = match self {
            Self::NotFound => "not found".to_string(),
            Self::Server { status, .. } => format!("Request failed with status code {status}"),
            Self::Connection(text) | Self::Serialization(text) | Self::InvalidUrl(text) => {
                text.clone()
            }
        };
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Repository contract for one catalog resource.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Fetch the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be read.
    async fn list(&self) -> Result<Vec<E::Record>, StorageError>;

    /// Fetch one record by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` (or a 404 `Server` error) if missing.
    async fn get(&self, id: &RecordId) -> Result<E::Record, StorageError>;

    /// Create a record from the full form payload.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn create(&self, draft: &E::Draft) -> Result<E::Record, StorageError>;

    /// Replace a record's editable fields with the full form payload.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record is missing or cannot be stored.
    async fn update(&self, id: &RecordId, draft: &E::Draft) -> Result<E::Record, StorageError>;

    /// Delete a record by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record is missing or cannot be removed.
    async fn delete(&self, id: &RecordId) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and offline use.
pub struct InMemoryRepository<E: Entity> {
    records: Arc<Mutex<Vec<E::Record>>>,
    next_id: Arc<AtomicU64>,
}

impl<E: Entity> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    #[must_use]
    pub fn with_records(records: Vec<E::Record>) -> Self {
        let next_id = records.len() as u64 + 1;
        Self {
            records: Arc::new(Mutex::new(records)),
            next_id: Arc::new(AtomicU64::new(next_id)),
        }
    }

    /// Current contents, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<E::Record>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    fn allocate_id(&self) -> RecordId {
        RecordId::new(format!(
            "local-{}",
            self.next_id.fetch_add(1, Ordering::Relaxed)
        ))
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for InMemoryRepository<E> {
    async fn list(&self) -> Result<Vec<E::Record>, StorageError> {
        self.snapshot()
    }

    async fn get(&self, id: &RecordId) -> Result<E::Record, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|record| E::id(record) == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn create(&self, draft: &E::Draft) -> Result<E::Record, StorageError> {
        let record = E::from_draft(self.allocate_id(), draft.clone());
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RecordId, draft: &E::Draft) -> Result<E::Record, StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let slot = guard
            .iter_mut()
            .find(|record| E::id(record) == id)
            .ok_or(StorageError::NotFound)?;
        *slot = E::from_draft(id.clone(), draft.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let before = guard.len();
        guard.retain(|record| E::id(record) != id);
        if guard.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

/// Offline menu collection that expands category references on reads, the
/// way the remote list and detail endpoints do. Writes echo the bare id.
struct PopulatedMenus {
    menus: InMemoryRepository<MenuEntity>,
    kategori: InMemoryRepository<KategoriEntity>,
}

fn populate(mut menu: MenuItem, known: &[Kategori]) -> MenuItem {
    if let Some(reference) = menu.category.take() {
        let found = known.iter().find(|kategori| &kategori.id == reference.id());
        menu.category = Some(match found {
            Some(kategori) => CategoryRef::Expanded(kategori.clone()),
            None => reference,
        });
    }
    menu
}

#[async_trait]
impl EntityRepository<MenuEntity> for PopulatedMenus {
    async fn list(&self) -> Result<Vec<MenuItem>, StorageError> {
        let known = self.kategori.snapshot()?;
        Ok(self
            .menus
            .list()
            .await?
            .into_iter()
            .map(|menu| populate(menu, &known))
            .collect())
    }

    async fn get(&self, id: &RecordId) -> Result<MenuItem, StorageError> {
        let known = self.kategori.snapshot()?;
        let menu = self.menus.get(id).await?;
        Ok(populate(menu, &known))
    }

    async fn create(&self, draft: &MenuDraft) -> Result<MenuItem, StorageError> {
        self.menus.create(draft).await
    }

    async fn update(&self, id: &RecordId, draft: &MenuDraft) -> Result<MenuItem, StorageError> {
        self.menus.update(id, draft).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StorageError> {
        self.menus.delete(id).await
    }
}

/// Repositories for every catalog resource, as handed to the services layer.
#[derive(Clone)]
pub struct Storage {
    pub menus: Arc<dyn EntityRepository<MenuEntity>>,
    pub kategori: Arc<dyn EntityRepository<KategoriEntity>>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_memory(InMemoryRepository::new(), InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_memory(
        menus: InMemoryRepository<MenuEntity>,
        kategori: InMemoryRepository<KategoriEntity>,
    ) -> Self {
        let menus: Arc<dyn EntityRepository<MenuEntity>> = Arc::new(PopulatedMenus {
            menus,
            kategori: kategori.clone(),
        });
        let kategori: Arc<dyn EntityRepository<KategoriEntity>> = Arc::new(kategori);
        Self { menus, kategori }
    }

    /// In-memory storage pre-filled with a small sample catalog.
    #[must_use]
    pub fn demo() -> Self {
        let makanan = Kategori {
            id: RecordId::new("k-1"),
            name: "Makanan".into(),
            description: "Kategori untuk makanan utama".into(),
        };
        let minuman = Kategori {
            id: RecordId::new("k-2"),
            name: "Minuman".into(),
            description: "Kategori untuk minuman".into(),
        };
        let menus = vec![
            MenuItem {
                id: RecordId::new("m-1"),
                name: "Nasi Goreng".into(),
                price: 20000.0,
                rating: 4.5,
                category: Some(CategoryRef::Expanded(makanan.clone())),
            },
            MenuItem {
                id: RecordId::new("m-2"),
                name: "Es Teh".into(),
                price: 5000.0,
                rating: 4.0,
                category: Some(CategoryRef::Expanded(minuman.clone())),
            },
        ];
        Self::from_memory(
            InMemoryRepository::with_records(menus),
            InMemoryRepository::with_records(vec![makanan, minuman]),
        )
    }
}
