// ABOUTME: Open Food Facts API client for barcode lookups and category search
// ABOUTME: Implements ProductSource with response caching and request rate limiting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

//! Open Food Facts API Client
//!
//! Open Food Facts is a free, open product database. Reads need no API key, but
//! the service asks for an identifying User-Agent and a modest request rate.
//!
//! # Features
//! - Product lookup by barcode (`/api/v2/product/{barcode}`)
//! - Category search with pagination (`/api/v2/search`)
//! - TTL caching of both found and not-found lookups
//! - Sliding-window rate limiting
//!
//! # Example
//! ```rust,no_run
//! use fooddraft::config::OpenFoodFactsConfig;
//! use fooddraft::external::{OpenFoodFactsClient, ProductSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenFoodFactsClient::new(OpenFoodFactsConfig::default())?;
//! if let Some(product) = client.fetch_product("3017624010701").await? {
//!     println!("{:?}", product.product_name());
//! }
//! # Ok(())
//! # }
//! ```

use super::product_source::{normalize_barcode, validate_search, ProductSource};
use crate::config::OpenFoodFactsConfig;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use fooddraft_core::constants::{openfoodfacts, service_names};
use fooddraft_core::models::{ProductData, ProductSearchPage};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    /// `None` when the TTL is too large to represent, meaning the entry never expires
    expires_at: Option<Instant>,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now().checked_add(ttl),
        }
    }

    fn is_fresh(&self) -> bool {
        self.expires_at
            .is_none_or(|expires_at| Instant::now() < expires_at)
    }
}

/// Sliding-window rate limiter for outbound requests
#[derive(Debug)]
struct RateLimiter {
    requests: Vec<Instant>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: Vec::new(),
            limit: limit.max(1) as usize,
            window,
        }
    }

    /// Time until a slot frees up, or `None` if a request can go now
    fn wait_time(&mut self) -> Option<Duration> {
        let now = Instant::now();
        self.requests
            .retain(|&t| now.duration_since(t) < self.window);
        if self.requests.len() < self.limit {
            return None;
        }
        self.requests
            .first()
            .map(|&oldest| self.window.saturating_sub(now.duration_since(oldest)))
    }

    /// Wait until a request can be made, then record it
    async fn acquire(&mut self) {
        while let Some(wait) = self.wait_time() {
            debug!(wait_ms = wait.as_millis(), "Open Food Facts rate limit reached, waiting");
            tokio::time::sleep(wait.max(Duration::from_millis(10))).await;
        }
        self.requests.push(Instant::now());
    }
}

/// Open Food Facts API client
pub struct OpenFoodFactsClient {
    config: OpenFoodFactsConfig,
    http_client: reqwest::Client,
    product_cache: Arc<RwLock<HashMap<String, CacheEntry<Option<ProductData>>>>>,
    search_cache: Arc<RwLock<HashMap<String, CacheEntry<ProductSearchPage>>>>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl OpenFoodFactsClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation, or an
    /// internal error if the HTTP client cannot be built
    pub fn new(config: OpenFoodFactsConfig) -> AppResult<Self> {
        config.validate()?;
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute, Duration::from_secs(60));

        Ok(Self {
            config,
            http_client,
            product_cache: Arc::new(RwLock::new(HashMap::new())),
            search_cache: Arc::new(RwLock::new(HashMap::new())),
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
        })
    }

    /// Clear all caches
    pub async fn clear_caches(&self) {
        self.product_cache.write().await.clear();
        self.search_cache.write().await.clear();
    }

    /// Cache sizes as `(products, searches)`
    pub async fn cache_stats(&self) -> (usize, usize) {
        let products = self.product_cache.read().await.len();
        let searches = self.search_cache.read().await.len();
        (products, searches)
    }

    fn caching_enabled(&self) -> bool {
        self.config.cache_ttl_secs > 0
    }

    async fn cached_product(&self, barcode: &str) -> Option<Option<ProductData>> {
        let cache = self.product_cache.read().await;
        cache
            .get(barcode)
            .filter(|entry| entry.is_fresh())
            .map(|entry| entry.data.clone())
    }

    async fn store_product(&self, barcode: &str, product: Option<&ProductData>) {
        if self.caching_enabled() {
            self.product_cache.write().await.insert(
                barcode.to_owned(),
                CacheEntry::new(product.cloned(), self.config.cache_ttl()),
            );
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        self.rate_limiter.write().await.acquire().await;
        request.send().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                AppError::external_unavailable(service_names::OPEN_FOOD_FACTS, e.to_string())
            } else {
                AppError::external_service(service_names::OPEN_FOOD_FACTS, e.to_string())
            }
        })
    }

    async fn read_body(response: reqwest::Response) -> AppResult<String> {
        Ok(response.text().await?)
    }
}

/// Map a non-success status to an error
async fn status_error(response: reqwest::Response) -> AppError {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return AppError::external_rate_limited(service_names::OPEN_FOOD_FACTS);
    }
    let body = response.text().await.unwrap_or_default();
    AppError::external_service(
        service_names::OPEN_FOOD_FACTS,
        format!("HTTP {status}: {}", body.chars().take(200).collect::<String>()),
    )
}

#[async_trait]
impl ProductSource for OpenFoodFactsClient {
    async fn fetch_product(&self, barcode: &str) -> AppResult<Option<ProductData>> {
        let barcode = normalize_barcode(barcode)?;

        if let Some(cached) = self.cached_product(barcode).await {
            debug!(barcode, found = cached.is_some(), "Product cache hit");
            return Ok(cached);
        }

        let url = format!(
            "{}{}/{barcode}",
            self.config.base_url_trimmed(),
            openfoodfacts::PRODUCT_PATH
        );
        let request = self
            .http_client
            .get(&url)
            .query(&[("fields", openfoodfacts::PRODUCT_FIELDS)]);
        let response = self.send(request).await?;

        let product = match response.status() {
            StatusCode::NOT_FOUND => None,
            status if status.is_success() => {
                let body = Self::read_body(response).await?;
                let data: ProductData = serde_json::from_str(&body).map_err(|e| {
                    AppError::serialization(format!(
                        "{}: invalid product JSON: {e}",
                        service_names::OPEN_FOOD_FACTS
                    ))
                })?;
                data.is_found().then_some(data)
            }
            status => {
                warn!(barcode, %status, "Open Food Facts product lookup failed");
                return Err(status_error(response).await);
            }
        };
        debug!(barcode, found = product.is_some(), "Fetched product");

        self.store_product(barcode, product.as_ref()).await;
        Ok(product)
    }

    async fn search_by_category(
        &self,
        category: &str,
        page: u32,
    ) -> AppResult<ProductSearchPage> {
        let category = validate_search(category, page)?;
        let cache_key = format!("{}:{page}", category.to_lowercase());

        {
            let cache = self.search_cache.read().await;
            if let Some(entry) = cache.get(&cache_key).filter(|entry| entry.is_fresh()) {
                debug!(category, page, "Search cache hit");
                return Ok(entry.data.clone());
            }
        }

        let url = format!(
            "{}{}",
            self.config.base_url_trimmed(),
            openfoodfacts::SEARCH_PATH
        );
        let page_param = page.to_string();
        let request = self.http_client.get(&url).query(&[
            ("categories_tags_en", category),
            ("page", page_param.as_str()),
            ("fields", openfoodfacts::SEARCH_FIELDS),
        ]);
        let response = self.send(request).await?;
        if !response.status().is_success() {
            warn!(category, page, status = %response.status(), "Open Food Facts search failed");
            return Err(status_error(response).await);
        }

        let body = Self::read_body(response).await?;
        let results: ProductSearchPage = serde_json::from_str(&body).map_err(|e| {
            AppError::serialization(format!(
                "{}: invalid search JSON: {e}",
                service_names::OPEN_FOOD_FACTS
            ))
        })?;
        debug!(category, page, results = results.products.len(), "Fetched search page");

        if self.caching_enabled() {
            self.search_cache.write().await.insert(
                cache_key,
                CacheEntry::new(results.clone(), self.config.cache_ttl()),
            );
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter_allows_up_to_limit() {
        let mut limiter = RateLimiter::new(2, Duration::from_secs(60));
        assert!(limiter.wait_time().is_none());
        limiter.requests.push(Instant::now());
        assert!(limiter.wait_time().is_none());
        limiter.requests.push(Instant::now());
        let wait = limiter.wait_time().unwrap();
        assert!(wait <= Duration::from_secs(60));
    }

    #[test]
    fn test_rate_limiter_forgets_old_requests() {
        let mut limiter = RateLimiter::new(1, Duration::from_millis(1));
        limiter.requests.push(Instant::now());
        std::thread::sleep(Duration::from_millis(5));
        assert!(limiter.wait_time().is_none());
    }

    #[test]
    fn test_cache_entry_freshness() {
        assert!(CacheEntry::new((), Duration::from_secs(60)).is_fresh());
        assert!(!CacheEntry::new((), Duration::ZERO).is_fresh());
    }

    #[test]
    fn test_cache_entry_with_unrepresentable_ttl_never_expires() {
        let entry = CacheEntry::new((), Duration::from_secs(u64::MAX));
        assert!(entry.expires_at.is_none());
        assert!(entry.is_fresh());
    }

    #[tokio::test]
    async fn test_maximum_cache_ttl_caches_without_expiring() {
        let client = OpenFoodFactsClient::new(OpenFoodFactsConfig {
            cache_ttl_secs: u64::MAX,
            ..OpenFoodFactsConfig::default()
        })
        .unwrap();
        client.store_product("12345678", None).await;

        assert_eq!(client.cache_stats().await, (1, 0));
        assert_eq!(client.cached_product("12345678").await, Some(None));
    }

    #[tokio::test]
    async fn test_invalid_barcode_fails_before_any_request() {
        let client = OpenFoodFactsClient::new(OpenFoodFactsConfig {
            base_url: "http://127.0.0.1:9".to_owned(),
            ..OpenFoodFactsConfig::default()
        })
        .unwrap();
        let error = client.fetch_product("not-a-barcode").await.unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::InvalidInput);
        assert_eq!(client.cache_stats().await, (0, 0));
    }
}
