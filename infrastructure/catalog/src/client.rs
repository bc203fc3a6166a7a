use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use business::domain::catalog::errors::CatalogError;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("catalog.invalid_base_url")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Shared HTTP client for the storefront API (`products/{id}`, `stock/{id}`).
pub struct ApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        let mut base_url = Url::parse(base_url)?;
        // Without the trailing slash `join` would replace the last path segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    /// Returns the product endpoint URL.
    pub fn product_url(&self, id: ProductId) -> Result<Url, CatalogError> {
        self.base_url
            .join(&format!("products/{}", id))
            .map_err(|_| CatalogError::Unavailable)
    }

    /// Returns the stock endpoint URL.
    pub fn stock_url(&self, id: ProductId) -> Result<Url, CatalogError> {
        self.base_url
            .join(&format!("stock/{}", id))
            .map_err(|_| CatalogError::Unavailable)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(%url, error = %e, "request failed");
                CatalogError::Unavailable
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(CatalogError::NotFound),
            status if !status.is_success() => {
                tracing::debug!(%url, %status, "unexpected status");
                return Err(CatalogError::Unavailable);
            }
            _ => {}
        }

        response
            .json::<T>()
            .await
            .map_err(|_| CatalogError::InvalidResponse)
    }
}
