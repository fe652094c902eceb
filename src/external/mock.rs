// ABOUTME: In-memory ProductSource used by tests and offline runs
// ABOUTME: Seeded with a few fixture products and a paginated category listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use super::product_source::{normalize_barcode, validate_search, ProductSource};
use crate::errors::AppResult;
use async_trait::async_trait;
use fooddraft_core::constants::openfoodfacts::STATUS_FOUND;
use fooddraft_core::models::{
    NutrientName, Nutriments, Product, ProductData, ProductListing, ProductSearchPage,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Barcode of the fully populated hazelnut spread fixture
pub const MOCK_SPREAD_BARCODE: &str = "3017624010701";
/// Barcode of a product whose nutriments carry only two values
pub const MOCK_PARTIAL_BARCODE: &str = "5449000000996";
/// Barcode of a product with no nutriments block at all
pub const MOCK_BARE_BARCODE: &str = "0000000000017";
/// Category the seeded listings belong to
pub const MOCK_CATEGORY: &str = "spreads";

/// Mock product source (no network calls)
pub struct MockProductSource {
    products: HashMap<String, ProductData>,
    listings: HashMap<String, Vec<ProductListing>>,
    page_size: usize,
    lookups: AtomicUsize,
}

impl MockProductSource {
    /// Create a mock seeded with fixture products
    #[must_use]
    pub fn new() -> Self {
        let spread = Nutriments::default()
            .with_value(NutrientName::Carbohydrates, 57.5)
            .with_value(NutrientName::EnergyKcal, 539.0)
            .with_value(NutrientName::Fat, 30.9)
            .with_value(NutrientName::Proteins, 6.3)
            .with_value(NutrientName::SaturatedFat, 10.6)
            .with_value(NutrientName::Sodium, 0.0428)
            .with_value(NutrientName::Sugars, 56.3);
        let partial = Nutriments::default()
            .with_value(NutrientName::EnergyKcal, 42.0)
            .with_value(NutrientName::Sugars, 10.6);

        let mut mock = Self {
            products: HashMap::new(),
            listings: HashMap::new(),
            page_size: 2,
            lookups: AtomicUsize::new(0),
        };
        mock.insert(
            MOCK_SPREAD_BARCODE,
            found("Hazelnut spread", Some("Ferrero"), Some("e"), Some(spread)),
        );
        mock.insert(
            MOCK_PARTIAL_BARCODE,
            found("Cola", Some("Coca-Cola"), Some("e"), Some(partial)),
        );
        mock.insert(MOCK_BARE_BARCODE, found("Tap water", None, None, None));

        let listings = [
            (MOCK_SPREAD_BARCODE, "Hazelnut spread", "e"),
            ("3560070614202", "Peanut butter", "c"),
            ("7622210449283", "Chocolate spread", "d"),
        ]
        .into_iter()
        .map(|(code, name, grade)| ProductListing {
            code: Some(code.to_owned()),
            product_name: Some(name.to_owned()),
            image_front_url: None,
            nutrition_grades_tags: vec![grade.to_owned()],
        })
        .collect();
        mock.listings.insert(MOCK_CATEGORY.to_owned(), listings);
        mock
    }

    /// Add or replace a product
    #[must_use]
    pub fn with_product(mut self, barcode: impl Into<String>, data: ProductData) -> Self {
        self.insert(barcode, data);
        self
    }

    /// Change how many listings a search page holds
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Number of `fetch_product` calls that passed validation
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    fn insert(&mut self, barcode: impl Into<String>, data: ProductData) {
        self.products.insert(barcode.into(), data);
    }
}

impl Default for MockProductSource {
    fn default() -> Self {
        Self::new()
    }
}

fn found(
    name: &str,
    brands: Option<&str>,
    grade: Option<&str>,
    nutriments: Option<Nutriments>,
) -> ProductData {
    ProductData {
        code: None,
        status: Some(STATUS_FOUND),
        status_verbose: Some("product found".to_owned()),
        product: Some(Product {
            product_name: Some(name.to_owned()),
            brands: brands.map(str::to_owned),
            nutrition_grades: grade.map(str::to_owned),
            image_front_url: None,
            nutriments,
        }),
    }
}

#[async_trait]
impl ProductSource for MockProductSource {
    async fn fetch_product(&self, barcode: &str) -> AppResult<Option<ProductData>> {
        let barcode = normalize_barcode(barcode)?;
        self.lookups.fetch_add(1, Ordering::Relaxed);
        Ok(self.products.get(barcode).map(|data| ProductData {
            code: Some(barcode.to_owned()),
            ..data.clone()
        }))
    }

    async fn search_by_category(
        &self,
        category: &str,
        page: u32,
    ) -> AppResult<ProductSearchPage> {
        let category = validate_search(category, page)?;
        let all = self
            .listings
            .get(&category.to_lowercase())
            .map_or(&[][..], Vec::as_slice);
        let start = (page as usize - 1).saturating_mul(self.page_size);
        let products = all
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();
        let count = i64::try_from(all.len()).unwrap_or(i64::MAX);
        let page_size = i64::try_from(self.page_size).unwrap_or(i64::MAX);

        Ok(ProductSearchPage {
            products,
            count: Some(count),
            page: Some(i64::from(page)),
            page_count: Some((count + page_size - 1) / page_size),
            page_size: Some(page_size),
        })
    }
}
