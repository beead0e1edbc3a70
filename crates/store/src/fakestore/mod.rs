//! FakeStore API client.
//!
//! Product supply for the storefront, backed by the public FakeStore demo
//! REST API. Plain `reqwest` JSON with a per-request timeout, bounded retries
//! with exponential backoff and jitter on transient failures, and `moka` read
//! caching for listings and categories.

mod cache;
pub mod conversions;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use rand::Rng;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use ecomdemo_core::ProductId;

use crate::config::ApiConfig;
use crate::models::{Category, Product};

use cache::CacheValue;
use conversions::{convert_categories, convert_product};
use types::ApiProduct;

/// Base retry delay; doubles per attempt.
const BASE_BACKOFF_MS: u64 = 200;
/// Random extra delay added to each backoff so retries from multiple clients
/// don't align.
const BACKOFF_JITTER_MS: u64 = 100;

/// Errors from the FakeStore API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed at the HTTP layer (connect, timeout, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API returned status {status} for {path}")]
    Status { status: u16, path: String },

    /// Base URL or path could not be combined into a request URL.
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// Product does not exist.
    #[error("product not found: {0}")]
    NotFound(ProductId),
}

/// Client for the FakeStore REST API.
///
/// Cheaply cloneable; listings and categories are cached with a TTL, cart
/// state never is (it lives in [`crate::session`], not upstream).
#[derive(Debug, Clone)]
pub struct FakeStoreClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    client: reqwest::Client,
    base_url: Url,
    max_retries: u32,
    cache: Cache<String, CacheValue>,
}

impl FakeStoreClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(ClientInner {
                client,
                base_url: config.base_url.clone(),
                max_retries: config.max_retries,
                cache,
            }),
        })
    }

    /// Fetch all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails after retries.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        self.cached_products("products", "products").await
    }

    /// Fetch at most `limit` products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails after retries.
    #[instrument(skip(self))]
    pub async fn get_products_limited(&self, limit: u32) -> Result<Vec<Product>, ApiError> {
        self.cached_products(
            &format!("products:limit:{limit}"),
            &format!("products?limit={limit}"),
        )
        .await
    }

    /// Fetch products in a category, by raw API category name
    /// (e.g. "men's clothing").
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails after retries.
    #[instrument(skip(self), fields(category = %category))]
    pub async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, ApiError> {
        self.cached_products(
            &format!("products:category:{category}"),
            &format!("products/category/{category}"),
        )
        .await
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for unknown ids, or another error if
    /// the request fails after retries.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let cache_key = format!("product:{id}");
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for product");
            return Ok(*product);
        }

        // FakeStore answers unknown ids with an empty 200 body, which shows
        // up here as a decode error.
        let api: ApiProduct = match self.get_json(&format!("products/{id}")).await {
            Ok(api) => api,
            Err(ApiError::Http(e)) if e.is_decode() => return Err(ApiError::NotFound(id)),
            Err(e) => return Err(e),
        };
        let product = convert_product(api);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Fetch the category list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails after retries.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let cache_key = "categories".to_string();
        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for categories");
            return Ok(categories);
        }

        let raw: Vec<String> = self.get_json("products/categories").await?;
        let categories = convert_categories(raw);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Categories(categories.clone()))
            .await;

        Ok(categories)
    }

    /// Fetch and convert a product list, going through the cache.
    async fn cached_products(
        &self,
        cache_key: &str,
        path: &str,
    ) -> Result<Vec<Product>, ApiError> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(cache_key).await {
            debug!("cache hit for product list");
            return Ok(products);
        }

        let raw: Vec<ApiProduct> = self.get_json(path).await?;
        let products: Vec<Product> = raw.into_iter().map(convert_product).collect();

        self.inner
            .cache
            .insert(cache_key.to_string(), CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// GET a JSON resource with bounded retries.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.inner.base_url.join(path)?;
        let mut attempt = 0;
        loop {
            match self.try_get::<T>(url.clone()).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.inner.max_retries && is_retryable(&e) => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        path,
                        attempt,
                        delay_ms = delay.as_millis(),
                        error = %e,
                        "retrying API request"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self.inner.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: url.path().to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

/// Transient failures worth retrying: connect errors, timeouts, throttling,
/// and server-side errors. Client errors and decode failures are not.
fn is_retryable(error: &ApiError) -> bool {
    match error {
        ApiError::Http(e) => e.is_timeout() || e.is_connect(),
        ApiError::Status { status, .. } => *status == 429 || *status >= 500,
        ApiError::Url(_) | ApiError::NotFound(_) => false,
    }
}

/// Exponential backoff with jitter: 200ms, 400ms, 800ms, ... plus 0-100ms.
fn backoff_delay(attempt: u32) -> Duration {
    let base = BASE_BACKOFF_MS.saturating_mul(1 << attempt.min(8));
    let jitter = rand::rng().random_range(0..=BACKOFF_JITTER_MS);
    Duration::from_millis(base + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(is_retryable(&ApiError::Status {
            status: 500,
            path: "/products".to_string()
        }));
        assert!(is_retryable(&ApiError::Status {
            status: 429,
            path: "/products".to_string()
        }));
        assert!(!is_retryable(&ApiError::Status {
            status: 404,
            path: "/products".to_string()
        }));
        assert!(!is_retryable(&ApiError::NotFound(ProductId::new(1))));
    }

    #[test]
    fn test_backoff_grows_and_is_bounded() {
        for attempt in 0..4 {
            let delay = backoff_delay(attempt);
            let base = BASE_BACKOFF_MS * (1 << attempt);
            assert!(delay.as_millis() >= u128::from(base));
            assert!(delay.as_millis() <= u128::from(base + BACKOFF_JITTER_MS));
        }
    }
}
