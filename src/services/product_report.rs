// ABOUTME: Product report service: lookup, not-found handling, and safety classification
// ABOUTME: Also parses local product documents and renders plain-text reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

//! Product reports
//!
//! A missing product and a product with no usable nutrition data are different
//! outcomes: the first is [`ProductReport::NotFound`] and is decided before any
//! classification runs, the second is a [`ProductSummary`] with empty lists.

use crate::errors::{AppError, AppResult};
use crate::external::ProductSource;
use fooddraft_core::models::{Nutriments, Product, ProductData, SafetyClassification};
use fooddraft_intelligence::display::format_reading;
use fooddraft_intelligence::{evaluate_product, NutritionGrade};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, info};

/// Report for a product that exists
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Barcode
    pub code: String,
    /// Product name
    pub name: Option<String>,
    /// Brands
    pub brands: Option<String>,
    /// Nutri-Score grade
    pub grade: NutritionGrade,
    /// Whether the record carried a nutriments block
    pub has_nutriments: bool,
    /// Safety classification at full precision
    pub classification: SafetyClassification,
}

/// Outcome of a product report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProductReport {
    /// The source has no record for the barcode
    NotFound {
        /// Barcode that was looked up
        barcode: String,
    },
    /// The record exists; its classification may be partial or empty
    Found(ProductSummary),
}

impl ProductReport {
    /// Build the report for a record already in hand
    ///
    /// Records whose status says "not found" become [`ProductReport::NotFound`]
    /// without being classified.
    #[must_use]
    pub fn from_data(barcode: &str, data: &ProductData) -> Self {
        if !data.is_found() {
            return Self::NotFound {
                barcode: barcode.to_owned(),
            };
        }
        let product = data.product.as_ref();
        Self::Found(ProductSummary {
            code: data.code.clone().unwrap_or_else(|| barcode.to_owned()),
            name: data.product_name().map(str::to_owned),
            brands: product.and_then(|p| p.brands.clone()),
            grade: NutritionGrade::from_option(product.and_then(|p| p.nutrition_grades.as_deref())),
            has_nutriments: data.nutriments().is_some(),
            classification: evaluate_product(data),
        })
    }

    /// Classification, if the product was found
    #[must_use]
    pub const fn classification(&self) -> Option<&SafetyClassification> {
        match self {
            Self::NotFound { .. } => None,
            Self::Found(summary) => Some(&summary.classification),
        }
    }

    /// Plain-text rendering with values rounded to one decimal
    #[must_use]
    pub fn render_text(&self) -> String {
        let summary = match self {
            Self::NotFound { barcode } => {
                return format!("No product found for barcode {barcode}\n");
            }
            Self::Found(summary) => summary,
        };

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({})",
            summary.name.as_deref().unwrap_or("Unnamed product"),
            summary.code
        );
        if let Some(brands) = summary.brands.as_deref().filter(|b| !b.trim().is_empty()) {
            let _ = writeln!(out, "Brands: {brands}");
        }
        let _ = writeln!(out, "Nutri-Score: {}", summary.grade);

        if summary.classification.is_empty() {
            let message = if summary.has_nutriments {
                "No nutrient values available"
            } else {
                "No nutrition information"
            };
            let _ = writeln!(out, "{message}");
            return out;
        }

        for (title, readings) in [
            ("Safe", &summary.classification.safe),
            ("Not safe", &summary.classification.not_safe),
        ] {
            if readings.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{title}:");
            for reading in readings {
                let _ = writeln!(out, "  {}", format_reading(reading));
            }
        }
        out
    }
}

/// Looks products up and classifies them
pub struct ProductReportService<S: ProductSource + ?Sized> {
    source: Arc<S>,
}

impl<S: ProductSource + ?Sized> Clone for ProductReportService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: ProductSource + ?Sized> ProductReportService<S> {
    /// Create a service over `source`
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Underlying source
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch `barcode` and build its report
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed barcode, or the source's error
    /// when the lookup itself fails
    pub async fn report(&self, barcode: &str) -> AppResult<ProductReport> {
        let barcode = barcode.trim();
        let report = match self.source.fetch_product(barcode).await? {
            Some(data) => ProductReport::from_data(barcode, &data),
            None => ProductReport::NotFound {
                barcode: barcode.to_owned(),
            },
        };
        match &report {
            ProductReport::NotFound { .. } => info!(barcode, "Product not found"),
            ProductReport::Found(summary) => debug!(
                barcode,
                safe = summary.classification.safe.len(),
                not_safe = summary.classification.not_safe.len(),
                "Product classified"
            ),
        }
        Ok(report)
    }
}

/// Parse a local product document
///
/// Accepts a full lookup response (`{"product": {...}}`), a bare product
/// (`{"nutriments": {...}}`), or a bare nutriments object. Field values are
/// decoded leniently.
///
/// # Errors
///
/// Returns `SerializationError` for invalid JSON, or `InvalidInput` when the
/// document is not a JSON object
pub fn parse_document(text: &str) -> AppResult<ProductData> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| AppError::serialization(format!("Invalid product document: {e}")))?;
    let Value::Object(object) = &value else {
        return Err(AppError::invalid_input(
            "Product document must be a JSON object",
        ));
    };

    if object.contains_key("product") || object.contains_key("status") {
        return Ok(serde_json::from_value(value)?);
    }
    let product: Product = if object.contains_key("nutriments") {
        serde_json::from_value(value)?
    } else {
        Product {
            nutriments: Some(serde_json::from_value::<Nutriments>(value)?),
            ..Product::default()
        }
    };
    Ok(ProductData {
        product: Some(product),
        ..ProductData::default()
    })
}
