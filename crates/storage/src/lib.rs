#![forbid(unsafe_code)]

pub mod http;
pub mod repository;

pub use http::{DEFAULT_BASE_URL, HttpConfig, HttpRepository};
pub use repository::{EntityRepository, InMemoryRepository, Storage, StorageError};
