// ABOUTME: Product lookup and category search response envelopes
// ABOUTME: ProductData, Product, ProductListing, and ProductSearchPage definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use super::lenient;
use super::nutrition::Nutriments;
use crate::constants::openfoodfacts::STATUS_FOUND;
use serde::{Deserialize, Serialize};

/// Response of a single-product lookup by barcode
///
/// Shape: `{ code, status, status_verbose, product: { ..., nutriments: { ... } } }`.
/// Every level is optional; a missing or malformed `product` decodes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    /// Barcode echoed back by the API
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    /// `1` when found, `0` otherwise
    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<i64>,
    /// Human-readable status (`"product found"`, `"product not found"`)
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_verbose: Option<String>,
    /// Product body
    #[serde(
        default,
        deserialize_with = "lenient::nested",
        skip_serializing_if = "Option::is_none"
    )]
    pub product: Option<Product>,
}

impl ProductData {
    /// Nutrition record, if the response carries one
    #[must_use]
    pub fn nutriments(&self) -> Option<&Nutriments> {
        self.product.as_ref().and_then(|p| p.nutriments.as_ref())
    }

    /// Whether the response describes an existing product
    ///
    /// An explicit `status` decides; without one, the presence of a product body does.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.status
            .map_or_else(|| self.product.is_some(), |status| status == STATUS_FOUND)
    }

    /// Product display name
    #[must_use]
    pub fn product_name(&self) -> Option<&str> {
        self.product
            .as_ref()
            .and_then(|p| p.product_name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }
}

/// Product body of a lookup response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_name: Option<String>,
    /// Comma-separated brand list
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub brands: Option<String>,
    /// Nutri-Score letter (`"a"`..`"e"`), when graded
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub nutrition_grades: Option<String>,
    /// Front image URL
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_front_url: Option<String>,
    /// Per-100g nutrient values
    #[serde(
        default,
        deserialize_with = "lenient::nested",
        skip_serializing_if = "Option::is_none"
    )]
    pub nutriments: Option<Nutriments>,
}

/// One entry of a category search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    /// Barcode
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    /// Product name
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_name: Option<String>,
    /// Front image URL
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_front_url: Option<String>,
    /// Nutri-Score tags, first element is the grade
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub nutrition_grades_tags: Vec<String>,
}

/// One page of category search results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSearchPage {
    /// Products on this page; entries that fail to decode are dropped
    #[serde(default, deserialize_with = "lenient::list")]
    pub products: Vec<ProductListing>,
    /// Total matching products
    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<i64>,
    /// Current page (1-based)
    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<i64>,
    /// Number of pages
    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_count: Option<i64>,
    /// Page size
    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_size: Option<i64>,
}

impl ProductSearchPage {
    /// Whether a later page exists
    ///
    /// Uses the total count when the API reports one, otherwise the page count.
    #[must_use]
    pub fn has_more(&self) -> bool {
        match (self.page, self.page_size, self.count, self.page_count) {
            (Some(page), Some(page_size), Some(count), _) if page_size > 0 => {
                page.saturating_mul(page_size) < count
            }
            (Some(page), _, _, Some(page_count)) => page < page_count,
            _ => false,
        }
    }
}
