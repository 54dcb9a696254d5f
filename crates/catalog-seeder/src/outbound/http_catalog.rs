//! Reqwest-backed catalogue API adapter.
//!
//! This adapter owns transport details only: URL building, request
//! serialisation, the per-request timeout, status checks, and JSON decoding
//! into seed records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::ports::{CatalogApi, CatalogApiError, CategoryCreation, Collection};
use crate::seed::{CategorySeed, CreatedCategory, CreatedUser, ProductSeed, UserSeed};

const DEFAULT_USER_AGENT: &str = concat!("catalog-seeder/", env!("CARGO_PKG_VERSION"));

/// Status codes accepted by listing endpoints.
const READ_OK: &[StatusCode] = &[StatusCode::OK];

/// Status codes accepted by create endpoints.
const WRITE_OK: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

/// Catalogue adapter that performs JSON requests against one base URL.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: Url,
}

impl HttpCatalogApi {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// A base URL without a trailing slash is treated as a directory, so
    /// `http://host/api` and `http://host/api/` address the same routes.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: as_directory(base_url),
        })
    }

    /// Return the normalised base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogApiError> {
        self.base_url
            .join(path)
            .map_err(|error| CatalogApiError::invalid_endpoint(format!("{path}: {error}")))
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, CatalogApiError> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        read_accepted(response, READ_OK).await
    }

    async fn post<T>(&self, path: &str, body: &T) -> Result<Vec<u8>, CatalogApiError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        read_accepted(response, WRITE_OK).await
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn probe(&self) -> Result<(), CatalogApiError> {
        self.get(Collection::Products.list_path()).await.map(drop)
    }

    async fn count(&self, collection: Collection) -> Result<usize, CatalogApiError> {
        let body = self.get(collection.list_path()).await?;
        decode_count(&body)
    }

    async fn create_user(&self, seed: &UserSeed) -> Result<CreatedUser, CatalogApiError> {
        let body = self.post("users", seed).await?;
        decode_json(&body)
    }

    async fn create_category(
        &self,
        seed: &CategorySeed,
    ) -> Result<CategoryCreation, CatalogApiError> {
        let body = self.post("categories", seed).await?;
        Ok(decode_category_creation(&body))
    }

    async fn list_categories(&self) -> Result<Vec<CreatedCategory>, CatalogApiError> {
        let body = self.get(Collection::Categories.list_path()).await?;
        decode_json(&body)
    }

    async fn create_product(&self, product: &ProductSeed) -> Result<(), CatalogApiError> {
        self.post("products", product).await.map(drop)
    }
}

async fn read_accepted(
    response: reqwest::Response,
    accepted: &[StatusCode],
) -> Result<Vec<u8>, CatalogApiError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    check_status(status, accepted, &body)?;
    Ok(body.to_vec())
}

fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let directory = format!("{}/", url.path());
        url.set_path(&directory);
    }
    url
}

fn check_status(
    status: StatusCode,
    accepted: &[StatusCode],
    body: &[u8],
) -> Result<(), CatalogApiError> {
    if accepted.contains(&status) {
        return Ok(());
    }
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_owned()
    } else {
        preview
    };
    Err(CatalogApiError::unexpected_status(status.as_u16(), message))
}

fn decode_json<T>(body: &[u8]) -> Result<T, CatalogApiError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        CatalogApiError::decode(format!(
            "{error} (body: '{preview}')",
            preview = body_preview(body)
        ))
    })
}

fn decode_count(body: &[u8]) -> Result<usize, CatalogApiError> {
    decode_json::<Vec<IgnoredAny>>(body).map(|items| items.len())
}

fn decode_category_creation(body: &[u8]) -> CategoryCreation {
    serde_json::from_slice::<CreatedCategory>(body)
        .map_or(CategoryCreation::Unidentified, CategoryCreation::Created)
}

fn map_transport_error(error: reqwest::Error) -> CatalogApiError {
    if error.is_timeout() {
        CatalogApiError::timeout(error.to_string())
    } else {
        CatalogApiError::transport(error.to_string())
    }
}

/// Collapse a response body into a short single-line preview.
fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
