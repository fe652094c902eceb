// ABOUTME: Per-100g nutrition record, nutrient names, readings, and safety classification
// ABOUTME: NutrientName, Nutriments, NutrientReading, and SafetyClassification definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use super::lenient;
use crate::constants::units;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight nutrients evaluated for safety
///
/// Declaration order is the evaluation order, which is also the display order
/// of classification results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NutrientName {
    /// Total carbohydrates
    Carbohydrates,
    /// Energy in kilocalories
    EnergyKcal,
    /// Total fat
    Fat,
    /// Dietary fiber
    Fiber,
    /// Proteins
    Proteins,
    /// Saturated fat
    SaturatedFat,
    /// Sodium
    Sodium,
    /// Sugars
    Sugars,
}

impl NutrientName {
    /// All nutrients in evaluation order
    pub const ALL: [Self; 8] = [
        Self::Carbohydrates,
        Self::EnergyKcal,
        Self::Fat,
        Self::Fiber,
        Self::Proteins,
        Self::SaturatedFat,
        Self::Sodium,
        Self::Sugars,
    ];

    /// Identifier as used by the food database (`energy-kcal`, `saturated-fat`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carbohydrates => "carbohydrates",
            Self::EnergyKcal => "energy-kcal",
            Self::Fat => "fat",
            Self::Fiber => "fiber",
            Self::Proteins => "proteins",
            Self::SaturatedFat => "saturated-fat",
            Self::Sodium => "sodium",
            Self::Sugars => "sugars",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Carbohydrates => "Carbohydrates",
            Self::EnergyKcal => "Energy",
            Self::Fat => "Fat",
            Self::Fiber => "Fiber",
            Self::Proteins => "Proteins",
            Self::SaturatedFat => "Saturated fat",
            Self::Sodium => "Sodium",
            Self::Sugars => "Sugars",
        }
    }

    /// Unit the safety threshold is expressed in
    #[must_use]
    pub const fn canonical_unit(self) -> &'static str {
        match self {
            Self::EnergyKcal => units::KILOCALORIES,
            Self::Sodium => units::MILLIGRAMS,
            Self::Carbohydrates
            | Self::Fat
            | Self::Fiber
            | Self::Proteins
            | Self::SaturatedFat
            | Self::Sugars => units::GRAMS,
        }
    }
}

impl fmt::Display for NutrientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-100g (or per-100ml) nutrient values of a product
///
/// Field names follow the food database's `<nutrient>_100g` / `<nutrient>_unit`
/// keys. Every field is optional and decoded leniently: a missing, null, or
/// mistyped value becomes `None` without failing the surrounding record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutriments {
    /// Carbohydrates (g)
    #[serde(
        rename = "carbohydrates_100g",
        default,
        deserialize_with = "lenient::finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub carbohydrates_100g: Option<f64>,
    /// Carbohydrates unit label
    #[serde(
        rename = "carbohydrates_unit",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub carbohydrates_unit: Option<String>,

    /// Energy (kcal)
    #[serde(
        rename = "energy-kcal_100g",
        default,
        deserialize_with = "lenient::finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_kcal_100g: Option<f64>,
    /// Energy unit label
    #[serde(
        rename = "energy-kcal_unit",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_kcal_unit: Option<String>,

    /// Fat (g)
    #[serde(
        rename = "fat_100g",
        default,
        deserialize_with = "lenient::finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub fat_100g: Option<f64>,
    /// Fat unit label
    #[serde(
        rename = "fat_unit",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fat_unit: Option<String>,

    /// Fiber (g)
    #[serde(
        rename = "fiber_100g",
        default,
        deserialize_with = "lenient::finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub fiber_100g: Option<f64>,
    /// Fiber unit label
    #[serde(
        rename = "fiber_unit",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fiber_unit: Option<String>,

    /// Proteins (g)
    #[serde(
        rename = "proteins_100g",
        default,
        deserialize_with = "lenient::finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub proteins_100g: Option<f64>,
    /// Proteins unit label
    #[serde(
        rename = "proteins_unit",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub proteins_unit: Option<String>,

    /// Saturated fat (g)
    #[serde(
        rename = "saturated-fat_100g",
        default,
        deserialize_with = "lenient::finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub saturated_fat_100g: Option<f64>,
    /// Saturated fat unit label
    #[serde(
        rename = "saturated-fat_unit",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub saturated_fat_unit: Option<String>,

    /// Sodium, in grams as reported by the food database
    #[serde(
        rename = "sodium_100g",
        default,
        deserialize_with = "lenient::finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub sodium_100g: Option<f64>,
    /// Sodium unit label
    #[serde(
        rename = "sodium_unit",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub sodium_unit: Option<String>,

    /// Sugars (g)
    #[serde(
        rename = "sugars_100g",
        default,
        deserialize_with = "lenient::finite_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub sugars_100g: Option<f64>,
    /// Sugars unit label
    #[serde(
        rename = "sugars_unit",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub sugars_unit: Option<String>,
}

impl Nutriments {
    /// Per-100g value for `name`, or `None` when absent or not finite
    #[must_use]
    pub fn per_100g(&self, name: NutrientName) -> Option<f64> {
        let value = match name {
            NutrientName::Carbohydrates => self.carbohydrates_100g,
            NutrientName::EnergyKcal => self.energy_kcal_100g,
            NutrientName::Fat => self.fat_100g,
            NutrientName::Fiber => self.fiber_100g,
            NutrientName::Proteins => self.proteins_100g,
            NutrientName::SaturatedFat => self.saturated_fat_100g,
            NutrientName::Sodium => self.sodium_100g,
            NutrientName::Sugars => self.sugars_100g,
        };
        value.filter(|v| v.is_finite())
    }

    /// Unit label reported for `name`, if any
    #[must_use]
    pub fn unit(&self, name: NutrientName) -> Option<&str> {
        match name {
            NutrientName::Carbohydrates => self.carbohydrates_unit.as_deref(),
            NutrientName::EnergyKcal => self.energy_kcal_unit.as_deref(),
            NutrientName::Fat => self.fat_unit.as_deref(),
            NutrientName::Fiber => self.fiber_unit.as_deref(),
            NutrientName::Proteins => self.proteins_unit.as_deref(),
            NutrientName::SaturatedFat => self.saturated_fat_unit.as_deref(),
            NutrientName::Sodium => self.sodium_unit.as_deref(),
            NutrientName::Sugars => self.sugars_unit.as_deref(),
        }
    }

    /// Builder-style setter for a per-100g value
    #[must_use]
    pub fn with_value(mut self, name: NutrientName, value: f64) -> Self {
        let slot = match name {
            NutrientName::Carbohydrates => &mut self.carbohydrates_100g,
            NutrientName::EnergyKcal => &mut self.energy_kcal_100g,
            NutrientName::Fat => &mut self.fat_100g,
            NutrientName::Fiber => &mut self.fiber_100g,
            NutrientName::Proteins => &mut self.proteins_100g,
            NutrientName::SaturatedFat => &mut self.saturated_fat_100g,
            NutrientName::Sodium => &mut self.sodium_100g,
            NutrientName::Sugars => &mut self.sugars_100g,
        };
        *slot = Some(value);
        self
    }

    /// Number of nutrients with a usable per-100g value
    #[must_use]
    pub fn present_count(&self) -> usize {
        NutrientName::ALL
            .iter()
            .filter(|name| self.per_100g(**name).is_some())
            .count()
    }
}

/// One evaluated nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientReading {
    /// Which nutrient
    pub name: NutrientName,
    /// Full-precision value in `unit`, per 100g/100ml
    pub value: f64,
    /// Unit label, informational only
    pub unit: String,
}

impl NutrientReading {
    /// Create a reading
    #[must_use]
    pub fn new(name: NutrientName, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name,
            value,
            unit: unit.into(),
        }
    }
}

/// Result of evaluating one nutrition record
///
/// Each nutrient appears at most once across both lists. Both lists keep
/// [`NutrientName::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyClassification {
    /// Nutrients within the healthy range
    pub safe: Vec<NutrientReading>,
    /// Nutrients outside the healthy range
    pub not_safe: Vec<NutrientReading>,
}

impl SafetyClassification {
    /// True when no nutrient could be evaluated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.safe.is_empty() && self.not_safe.is_empty()
    }

    /// Number of evaluated nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.safe.len() + self.not_safe.len()
    }

    /// `Some(true)` if `name` was classified safe, `Some(false)` if not safe,
    /// `None` if it was skipped
    #[must_use]
    pub fn verdict_for(&self, name: NutrientName) -> Option<bool> {
        if self.safe.iter().any(|r| r.name == name) {
            Some(true)
        } else if self.not_safe.iter().any(|r| r.name == name) {
            Some(false)
        } else {
            None
        }
    }

    /// Whether `name` appears in either list
    #[must_use]
    pub fn contains(&self, name: NutrientName) -> bool {
        self.verdict_for(name).is_some()
    }

    /// Reading for `name` from whichever list holds it
    #[must_use]
    pub fn reading(&self, name: NutrientName) -> Option<&NutrientReading> {
        self.safe
            .iter()
            .chain(self.not_safe.iter())
            .find(|r| r.name == name)
    }
}
