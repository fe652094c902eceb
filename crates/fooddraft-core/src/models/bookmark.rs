// ABOUTME: Per-user product bookmark record
// ABOUTME: Bookmark definition and conversion from search listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use super::product::{ProductData, ProductListing};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product saved by a user, keyed by product code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Product barcode
    pub code: String,
    /// Product name at the time of bookmarking
    pub name: String,
    /// Front image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Nutri-Score tags
    #[serde(default)]
    pub nutrition_grades: Vec<String>,
    /// When the bookmark was created
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Create a bookmark with no image or grade
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            image_url: None,
            nutrition_grades: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Build a bookmark from a search listing; `None` if the listing has no code
    #[must_use]
    pub fn from_listing(listing: &ProductListing) -> Option<Self> {
        let code = listing.code.clone()?;
        Some(Self {
            code,
            name: listing.product_name.clone().unwrap_or_default(),
            image_url: listing.image_front_url.clone(),
            nutrition_grades: listing.nutrition_grades_tags.clone(),
            created_at: Utc::now(),
        })
    }

    /// Build a bookmark from a lookup response for `code`
    #[must_use]
    pub fn from_product(code: impl Into<String>, data: &ProductData) -> Self {
        let product = data.product.as_ref();
        Self {
            code: code.into(),
            name: data.product_name().unwrap_or_default().to_owned(),
            image_url: product.and_then(|p| p.image_front_url.clone()),
            nutrition_grades: product
                .and_then(|p| p.nutrition_grades.clone())
                .into_iter()
                .collect(),
            created_at: Utc::now(),
        }
    }
}
