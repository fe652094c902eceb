// ABOUTME: Display-path helpers: one-decimal rounding and report line formatting
// ABOUTME: Never used before threshold comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use fooddraft_core::models::{NutrientReading, SafetyClassification};
use serde::Serialize;

/// Round to one decimal place, halves away from zero
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounded value of a reading, for display only
#[must_use]
pub fn display_value(reading: &NutrientReading) -> f64 {
    round_one_decimal(reading.value)
}

/// `"Saturated fat: 1.2 g"`
#[must_use]
pub fn format_reading(reading: &NutrientReading) -> String {
    format!(
        "{}: {} {}",
        reading.name.label(),
        display_value(reading),
        reading.unit
    )
}

/// A reading prepared for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayReading {
    /// Nutrient identifier
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Value rounded to one decimal
    pub value: f64,
    /// Unit label
    pub unit: String,
}

impl From<&NutrientReading> for DisplayReading {
    fn from(reading: &NutrientReading) -> Self {
        Self {
            name: reading.name.as_str(),
            label: reading.name.label(),
            value: display_value(reading),
            unit: reading.unit.clone(),
        }
    }
}

/// Both lists of a classification prepared for presentation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayClassification {
    /// Safe readings, rounded
    pub safe: Vec<DisplayReading>,
    /// Not-safe readings, rounded
    pub not_safe: Vec<DisplayReading>,
}

impl From<&SafetyClassification> for DisplayClassification {
    fn from(classification: &SafetyClassification) -> Self {
        Self {
            safe: classification.safe.iter().map(DisplayReading::from).collect(),
            not_safe: classification
                .not_safe
                .iter()
                .map(DisplayReading::from)
                .collect(),
        }
    }
}
