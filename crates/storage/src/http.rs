use std::env;

use async_trait::async_trait;
use catalog_core::model::{Entity, EntityKind, RecordId};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::repository::{EntityRepository, Storage, StorageError};

/// API root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://tugas-2-paw-2.vercel.app/api";

/// Environment variable that overrides the API root.
pub const BASE_URL_ENV: &str = "CATALOG_API_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    base_url: Url,
}

impl HttpConfig {
    /// # Errors
    ///
    /// Returns `StorageError::InvalidUrl` if `base_url` is not an absolute
    /// http(s) URL that can carry path segments.
    pub fn new(base_url: &str) -> Result<Self, StorageError> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|e| StorageError::InvalidUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(StorageError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { base_url: parsed })
    }

    /// Read the API root from `CATALOG_API_URL`, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidUrl` if the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, StorageError> {
        match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/<resource>`
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidUrl` if the base cannot take segments.
    pub fn collection_url(&self, kind: EntityKind) -> Result<Url, StorageError> {
        self.url_with(&[kind.segment()])
    }

    /// `<base>/<resource>/<id>`, with the id encoded as a single segment.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidUrl` if the base cannot take segments.
    pub fn record_url(&self, kind: EntityKind, id: &RecordId) -> Result<Url, StorageError> {
        self.url_with(&[kind.segment(), id.as_str()])
    }

    fn url_with(&self, segments: &[&str]) -> Result<Url, StorageError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StorageError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// REST adapter for every catalog resource on the remote service.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    config: HttpConfig,
}

impl HttpRepository {
    #[must_use]
    pub fn new(config: HttpConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StorageError> {
        let response = request.send().await.map_err(from_reqwest)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = parse_error_message(&body);
        tracing::warn!(
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "catalog request rejected"
        );
        Err(StorageError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, StorageError> {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(from_reqwest)
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for HttpRepository {
    async fn list(&self) -> Result<Vec<E::Record>, StorageError> {
        let url = self.config.collection_url(E::KIND)?;
        tracing::debug!(%url, "GET");
        self.send_json(self.client.get(url)).await
    }

    async fn get(&self, id: &RecordId) -> Result<E::Record, StorageError> {
        let url = self.config.record_url(E::KIND, id)?;
        tracing::debug!(%url, "GET");
        self.send_json(self.client.get(url)).await
    }

    async fn create(&self, draft: &E::Draft) -> Result<E::Record, StorageError> {
        let url = self.config.collection_url(E::KIND)?;
        tracing::debug!(%url, "POST");
        self.send_json(self.client.post(url).json(draft)).await
    }

    async fn update(&self, id: &RecordId, draft: &E::Draft) -> Result<E::Record, StorageError> {
        let url = self.config.record_url(E::KIND, id)?;
        tracing::debug!(%url, "PATCH");
        self.send_json(self.client.patch(url).json(draft)).await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StorageError> {
        let url = self.config.record_url(E::KIND, id)?;
        tracing::debug!(%url, "DELETE");
        // The response body varies between deployments; only the status matters.
        self.send(self.client.delete(url)).await.map(drop)
    }
}

impl Storage {
    /// Build a `Storage` backed by the remote catalog service.
    #[must_use]
    pub fn http(config: HttpConfig) -> Self {
        let repo = HttpRepository::new(config);
        Self {
            menus: std::sync::Arc::new(repo.clone()),
            kategori: std::sync::Arc::new(repo),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}

fn from_reqwest(err: reqwest::Error) -> StorageError {
    if err.is_decode() {
        StorageError::Serialization(err.to_string())
    } else {
        StorageError::Connection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_appends_resource_segment() {
        let config = HttpConfig::new("https://example.test/api").unwrap();
        assert_eq!(
            config.collection_url(EntityKind::Menu).unwrap().as_str(),
            "https://example.test/api/menu"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let config = HttpConfig::new("https://example.test/api/").unwrap();
        assert_eq!(
            config.collection_url(EntityKind::Kategori).unwrap().as_str(),
            "https://example.test/api/kategori"
        );
    }

    #[test]
    fn record_url_encodes_id_as_one_segment() {
        let config = HttpConfig::new("http://localhost:3000/api").unwrap();
        let url = config
            .record_url(EntityKind::Menu, &RecordId::new("a/b c"))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/menu/a%2Fb%20c");
    }

    #[test]
    fn invalid_base_urls_are_rejected() {
        assert!(matches!(
            HttpConfig::new("not a url"),
            Err(StorageError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpConfig::new("mailto:admin@example.test"),
            Err(StorageError::InvalidUrl(_))
        ));
    }

    #[test]
    fn default_config_points_at_public_api() {
        assert_eq!(
            HttpConfig::new(DEFAULT_BASE_URL).unwrap().base_url().as_str(),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn error_payload_message_is_extracted() {
        assert_eq!(
            parse_error_message(r#"{"message":"Menu tidak ditemukan"}"#).as_deref(),
            Some("Menu tidak ditemukan")
        );
        assert_eq!(parse_error_message(r#"{"error":"boom"}"#), None);
        assert_eq!(parse_error_message(r#"{"message":""}"#), None);
        assert_eq!(parse_error_message("<html>502</html>"), None);
    }
}
