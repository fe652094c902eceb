// ABOUTME: Unit labels and conversion factors for per-100g nutrient values
// ABOUTME: Used when normalizing and displaying nutrient readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

/// Grams
pub const GRAMS: &str = "g";

/// Milligrams
pub const MILLIGRAMS: &str = "mg";

/// Kilocalories
pub const KILOCALORIES: &str = "kcal";

/// Milligrams per gram
pub const MG_PER_GRAM: f64 = 1000.0;
