// ABOUTME: Nutrient safety classifier bucketing per-100g values into safe / not safe
// ABOUTME: Total, pure function over optional nutrition records; absent values are omitted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

//! Nutrient Safety Classifier
//!
//! Walks the threshold table in evaluation order (carbohydrates, energy-kcal,
//! fat, fiber, proteins, saturated-fat, sodium, sugars). For each nutrient with
//! a finite per-100g value it appends a [`NutrientReading`] to either the safe
//! or the not-safe list. Nutrients without a usable value are skipped: no zero,
//! no placeholder, no error.
//!
//! Comparisons use full precision; rounding belongs to [`crate::display`].

use crate::thresholds::{NutrientThreshold, ThresholdTable};
use fooddraft_core::models::{
    NutrientReading, Nutriments, ProductData, SafetyClassification,
};
use tracing::debug;

/// Classify `nutriments` against the standard thresholds
///
/// `None` (no nutrition block at all) yields two empty lists.
#[must_use]
pub fn evaluate_nutrient_safety(nutriments: Option<&Nutriments>) -> SafetyClassification {
    ThresholdTable::standard().classify(nutriments)
}

/// Classify the nutrition block of a product lookup response
#[must_use]
pub fn evaluate_product(product: &ProductData) -> SafetyClassification {
    evaluate_nutrient_safety(product.nutriments())
}

impl ThresholdTable {
    /// Classify `nutriments` against this table
    #[must_use]
    pub fn classify(&self, nutriments: Option<&Nutriments>) -> SafetyClassification {
        let mut classification = SafetyClassification::default();
        let Some(nutriments) = nutriments else {
            debug!("No nutriments block; nothing to classify");
            return classification;
        };

        for threshold in self.entries() {
            let Some(reading) = normalize(threshold, nutriments) else {
                continue;
            };
            if threshold.range.contains(reading.value) {
                classification.safe.push(reading);
            } else {
                classification.not_safe.push(reading);
            }
        }

        debug!(
            safe = classification.safe.len(),
            not_safe = classification.not_safe.len(),
            "Classified nutriments"
        );
        classification
    }
}

/// Reading in the threshold's unit, or `None` when the source value is unusable
fn normalize(threshold: &NutrientThreshold, nutriments: &Nutriments) -> Option<NutrientReading> {
    let raw = nutriments.per_100g(threshold.name)?;
    let reading = match threshold.conversion {
        Some(factor) => NutrientReading::new(
            threshold.name,
            raw * factor,
            threshold.name.canonical_unit(),
        ),
        None => NutrientReading::new(
            threshold.name,
            raw,
            nutriments
                .unit(threshold.name)
                .unwrap_or_else(|| threshold.name.canonical_unit()),
        ),
    };
    // Conversion can overflow for absurd inputs
    reading.value.is_finite().then_some(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fooddraft_core::models::NutrientName;

    fn names(readings: &[NutrientReading]) -> Vec<NutrientName> {
        readings.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_missing_block_yields_empty_lists() {
        let result = evaluate_nutrient_safety(None);
        assert!(result.safe.is_empty());
        assert!(result.not_safe.is_empty());
    }

    #[test]
    fn test_empty_block_yields_empty_lists() {
        let result = evaluate_nutrient_safety(Some(&Nutriments::default()));
        assert!(result.is_empty());
    }

    #[test]
    fn test_sodium_converted_to_milligrams() {
        let nutriments = Nutriments::default().with_value(NutrientName::Sodium, 0.05);
        let result = evaluate_nutrient_safety(Some(&nutriments));

        assert_eq!(result.safe.len(), 1);
        let sodium = &result.safe[0];
        assert_eq!(sodium.name, NutrientName::Sodium);
        assert!((sodium.value - 50.0).abs() < 1e-9);
        assert_eq!(sodium.unit, "mg");
    }

    #[test]
    fn test_sodium_unit_is_mg_even_when_source_says_g() {
        let mut nutriments = Nutriments::default().with_value(NutrientName::Sodium, 0.5);
        nutriments.sodium_unit = Some("g".to_owned());
        let result = evaluate_nutrient_safety(Some(&nutriments));

        assert_eq!(result.not_safe[0].unit, "mg");
        assert!((result.not_safe[0].value - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_source_unit_is_carried_through() {
        let mut nutriments = Nutriments::default().with_value(NutrientName::Sugars, 2.0);
        nutriments.sugars_unit = Some("mg".to_owned());
        let result = evaluate_nutrient_safety(Some(&nutriments));

        // Unit is informational; 2.0 is still compared against the 5g limit
        assert_eq!(result.safe[0].unit, "mg");
    }

    #[test]
    fn test_missing_unit_falls_back_to_canonical() {
        let nutriments = Nutriments::default()
            .with_value(NutrientName::EnergyKcal, 250.0)
            .with_value(NutrientName::Fiber, 1.0);
        let result = evaluate_nutrient_safety(Some(&nutriments));

        assert_eq!(result.safe[0].unit, "kcal");
        assert_eq!(result.not_safe[0].unit, "g");
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        let nutriments = Nutriments::default()
            .with_value(NutrientName::Fat, f64::NAN)
            .with_value(NutrientName::Sugars, f64::INFINITY)
            .with_value(NutrientName::Proteins, f64::NEG_INFINITY)
            .with_value(NutrientName::Sodium, f64::MAX);
        let result = evaluate_nutrient_safety(Some(&nutriments));

        assert!(result.is_empty(), "{result:?}");
    }

    #[test]
    fn test_zero_and_negative_values_are_evaluated() {
        let nutriments = Nutriments::default()
            .with_value(NutrientName::Sugars, 0.0)
            .with_value(NutrientName::Proteins, 0.0)
            .with_value(NutrientName::Fat, -1.0);
        let result = evaluate_nutrient_safety(Some(&nutriments));

        assert_eq!(
            names(&result.safe),
            vec![NutrientName::Fat, NutrientName::Sugars]
        );
        assert_eq!(names(&result.not_safe), vec![NutrientName::Proteins]);
    }

    #[test]
    fn test_order_is_evaluation_order_not_insertion_order() {
        let nutriments = Nutriments::default()
            .with_value(NutrientName::Sugars, 40.0)
            .with_value(NutrientName::Carbohydrates, 90.0)
            .with_value(NutrientName::SaturatedFat, 9.0);
        let result = evaluate_nutrient_safety(Some(&nutriments));

        assert_eq!(
            names(&result.not_safe),
            vec![
                NutrientName::Carbohydrates,
                NutrientName::SaturatedFat,
                NutrientName::Sugars
            ]
        );
    }

    #[test]
    fn test_evaluate_product_without_product_body() {
        let product = ProductData::default();
        assert!(evaluate_product(&product).is_empty());
    }
}
