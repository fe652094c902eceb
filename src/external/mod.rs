// ABOUTME: External product data sources (Open Food Facts)
// ABOUTME: ProductSource trait, the HTTP client, and an in-memory mock

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

//! External Product Sources
//!
//! Everything that talks to a product database goes through [`ProductSource`].

/// In-memory source for tests
pub mod mock;
/// Open Food Facts HTTP client
pub mod openfoodfacts_client;
/// Source trait and argument validation
pub mod product_source;

pub use mock::MockProductSource;
pub use openfoodfacts_client::OpenFoodFactsClient;
pub use product_source::{normalize_barcode, ProductSource};
