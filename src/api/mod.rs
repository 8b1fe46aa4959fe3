//! HTTP client for the remote product API.
//!
//! One GET per call, JSON in, no retries, no caching. A non-success
//! status is a typed failure carrying the code; everything else the
//! caller needs comes back as decoded records.

pub mod loader;

use serde::de::DeserializeOwned;

use crate::models::{Product, ProductPage};

/// Failure raised by a catalog request.
#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-success HTTP status.
    Status {
        /// The status code of the response.
        status: reqwest::StatusCode,
    },
    /// The request never produced a decodable success response
    /// (connection, protocol, or body decode failure).
    Transport(reqwest::Error),
}

impl ApiError {
    /// The HTTP status code, when the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { status } => write!(
                f,
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            ),
            Self::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Status { .. } => None,
            Self::Transport(err) => Some(err),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

/// Client for the product catalog endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base: String,
}

impl CatalogClient {
    /// Creates a client against `base` (e.g. `https://dummyjson.com/products`).
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// The configured base URL.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fetches the capped, unscoped listing: `{base}?limit={limit}`.
    pub async fn capped_listing(&self, limit: u32) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}?limit={limit}", self.base);
        let page: ProductPage = self.get_json(&url).await?;
        Ok(page.products)
    }

    /// Fetches a full category listing: `{base}/category/{name}?limit=0`.
    pub async fn category_listing(&self, category: &str) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/category/{category}?limit=0", self.base);
        let page: ProductPage = self.get_json(&url).await?;
        Ok(page.products)
    }

    /// Fetches a single product: `{base}/{id}`.
    pub async fn product(&self, id: &str) -> Result<Product, ApiError> {
        let url = format!("{}/{id}", self.base);
        self.get_json(&url).await
    }

    /// Fetches products id by id, 0 through `max_id`, concurrently.
    ///
    /// All requests are joined before returning; a failing request is
    /// logged and dropped without aborting the batch, and the successes
    /// keep id order.
    pub async fn listing_by_ids(&self, max_id: u64) -> Vec<Product> {
        let requests = (0..=max_id).map(|id| self.product_by_number(id));
        let results = futures::future::join_all(requests).await;

        results
            .into_iter()
            .enumerate()
            .filter_map(|(id, result)| match result {
                Ok(product) => Some(product),
                Err(err) => {
                    tracing::warn!(id, %err, "skipping product in per-id listing");
                    None
                }
            })
            .collect()
    }

    async fn product_by_number(&self, id: u64) -> Result<Product, ApiError> {
        self.product(&id.to_string()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!(url, status = status.as_u16(), "request failed");
            return Err(ApiError::Status { status });
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CatalogClient::new("https://dummyjson.com/products/");
        assert_eq!(client.base(), "https://dummyjson.com/products");
    }

    #[test]
    fn test_status_error_display_carries_code() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }
}
