// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Units, Open Food Facts endpoints, environment keys, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

//! Constants grouped by domain.

/// Unit labels and unit conversion factors
pub mod units;

/// Service names used in structured logs
pub mod service_names {
    /// Library and CLI service name
    pub const FOODDRAFT: &str = "fooddraft";
    /// Name used when reporting Open Food Facts failures
    pub const OPEN_FOOD_FACTS: &str = "Open Food Facts";
}

/// Open Food Facts API endpoints and request shaping
pub mod openfoodfacts {
    /// Public production host
    pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";
    /// Product lookup path (barcode is appended)
    pub const PRODUCT_PATH: &str = "/api/v2/product";
    /// Category search path
    pub const SEARCH_PATH: &str = "/api/v2/search";
    /// Fields requested for a single product lookup
    pub const PRODUCT_FIELDS: &str =
        "code,product_name,brands,nutriments,nutrition_grades,image_front_url";
    /// Fields requested for category search results
    pub const SEARCH_FIELDS: &str = "product_name,code,image_front_url,nutrition_grades_tags";
    /// `status` value the API uses for a found product
    pub const STATUS_FOUND: i64 = 1;
    /// Shortest accepted barcode (EAN-8)
    pub const MIN_BARCODE_LEN: usize = 8;
    /// Longest accepted barcode (GTIN-14)
    pub const MAX_BARCODE_LEN: usize = 14;
}

/// Environment variable names
pub mod env_config {
    /// Open Food Facts base URL override
    pub const OPENFOODFACTS_BASE_URL: &str = "OPENFOODFACTS_BASE_URL";
    /// User-Agent sent to Open Food Facts
    pub const OPENFOODFACTS_USER_AGENT: &str = "OPENFOODFACTS_USER_AGENT";
    /// Request timeout in seconds
    pub const OPENFOODFACTS_TIMEOUT_SECS: &str = "OPENFOODFACTS_TIMEOUT_SECS";
    /// Cache TTL in seconds
    pub const OPENFOODFACTS_CACHE_TTL_SECS: &str = "OPENFOODFACTS_CACHE_TTL_SECS";
    /// Requests allowed per minute
    pub const OPENFOODFACTS_RATE_LIMIT_PER_MINUTE: &str = "OPENFOODFACTS_RATE_LIMIT_PER_MINUTE";
    /// Bookmark cap per user
    pub const BOOKMARKS_MAX_PER_USER: &str = "BOOKMARKS_MAX_PER_USER";
}

/// Default configuration values
pub mod defaults {
    /// Request timeout (seconds)
    pub const TIMEOUT_SECS: u64 = 10;
    /// Product cache TTL (1 hour)
    pub const CACHE_TTL_SECS: u64 = 3_600;
    /// Open Food Facts asks clients to stay well below 100 product reads per minute
    pub const RATE_LIMIT_PER_MINUTE: u32 = 60;
    /// Bookmarks kept per user
    pub const BOOKMARKS_MAX_PER_USER: usize = 500;
}
