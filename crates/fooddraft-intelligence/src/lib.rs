// ABOUTME: Nutrition intelligence for FoodDraft: safety thresholds and classification
// ABOUTME: Pure, synchronous logic shared by the CLI and the product report service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

#![deny(unsafe_code)]

//! # `FoodDraft` Intelligence
//!
//! - **thresholds**: the static per-100g threshold table
//! - **`nutrient_safety`**: the safe / not-safe classifier
//! - **display**: one-decimal rounding for presentation
//! - **`nutrition_grade`**: Nutri-Score letter normalization

/// Display-path rounding and formatting
pub mod display;

/// Nutrient safety classifier
pub mod nutrient_safety;

/// Nutri-Score grade normalization
pub mod nutrition_grade;

/// Static safety thresholds
pub mod thresholds;

pub use display::{round_one_decimal, DisplayClassification, DisplayReading};
pub use nutrient_safety::{evaluate_nutrient_safety, evaluate_product};
pub use nutrition_grade::NutritionGrade;
pub use thresholds::{NutrientThreshold, SafeRange, ThresholdTable, STANDARD_THRESHOLDS};
