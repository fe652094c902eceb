// ABOUTME: Core data models for FoodDraft
// ABOUTME: Re-exports nutrition, product, and bookmark types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

//! # Data Models
//!
//! - `Nutriments`: per-100g nutrient values as delivered by the food database
//! - `ProductData`: product lookup envelope wrapping `Nutriments`
//! - `NutrientReading` / `SafetyClassification`: classifier output
//! - `Bookmark`: a product saved by a user

mod bookmark;
mod lenient;
mod nutrition;
mod product;

pub use bookmark::Bookmark;
pub use nutrition::{NutrientName, NutrientReading, Nutriments, SafetyClassification};
pub use product::{Product, ProductData, ProductListing, ProductSearchPage};
