// ABOUTME: ProductSource trait: barcode lookup and category search behind one narrow interface
// ABOUTME: Implemented by the Open Food Facts HTTP client and the in-memory mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use fooddraft_core::constants::openfoodfacts::{MAX_BARCODE_LEN, MIN_BARCODE_LEN};
use fooddraft_core::models::{ProductData, ProductSearchPage};

/// Source of product records keyed by barcode
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the product for `barcode`
    ///
    /// Returns `Ok(None)` when the source has no such product.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed barcode, or an external-service
    /// error when the source cannot be queried
    async fn fetch_product(&self, barcode: &str) -> AppResult<Option<ProductData>>;

    /// One page (1-based) of products in `category`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty category or page 0, or an
    /// external-service error when the source cannot be queried
    async fn search_by_category(&self, category: &str, page: u32)
        -> AppResult<ProductSearchPage>;
}

/// Trim `barcode` and check it is 8 to 14 ASCII digits
///
/// # Errors
///
/// Returns `InvalidInput` otherwise
pub fn normalize_barcode(barcode: &str) -> AppResult<&str> {
    let trimmed = barcode.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("Barcode cannot be empty"));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::invalid_input(format!(
            "Barcode must contain only digits: '{trimmed}'"
        )));
    }
    if !(MIN_BARCODE_LEN..=MAX_BARCODE_LEN).contains(&trimmed.len()) {
        return Err(AppError::invalid_input(format!(
            "Barcode must be {MIN_BARCODE_LEN} to {MAX_BARCODE_LEN} digits, got {}",
            trimmed.len()
        )));
    }
    Ok(trimmed)
}

/// Trim `category` and check the search arguments
///
/// # Errors
///
/// Returns `InvalidInput` for an empty category or page 0
pub fn validate_search(category: &str, page: u32) -> AppResult<&str> {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("Search category cannot be empty"));
    }
    if page == 0 {
        return Err(AppError::invalid_input("Page numbers start at 1"));
    }
    Ok(trimmed)
}
