// ABOUTME: Integration tests for the nutrient safety classifier
// ABOUTME: Covers worked scenarios, inclusive boundaries, sodium conversion, ordering, and omission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft
//! Nutrient safety classifier tests
//!
//! - Worked scenarios (all safe, partial not-safe, no nutriments, exact boundary)
//! - Inclusive bounds for all eight nutrients
//! - Sodium gram to milligram conversion
//! - Omission, partition, and evaluation order properties

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{all_safe_nutriments, assert_partition, init_test_logging, names, single};
use fooddraft::intelligence::{
    evaluate_nutrient_safety, evaluate_product, ThresholdTable, STANDARD_THRESHOLDS,
};
use fooddraft::models::{NutrientName, Nutriments, ProductData};

// ============================================================================
// Worked scenarios
// ============================================================================

#[test]
fn test_scenario_all_nutrients_safe() {
    init_test_logging();
    let result = evaluate_nutrient_safety(Some(&all_safe_nutriments()));

    assert_eq!(names(&result.safe), NutrientName::ALL.to_vec());
    assert!(result.not_safe.is_empty());
}

#[test]
fn test_scenario_high_sugar_no_protein() {
    let nutriments = Nutriments::default()
        .with_value(NutrientName::Sugars, 40.0)
        .with_value(NutrientName::Proteins, 0.0);
    let result = evaluate_nutrient_safety(Some(&nutriments));

    assert!(result.safe.is_empty());
    assert_eq!(
        names(&result.not_safe),
        vec![NutrientName::Proteins, NutrientName::Sugars]
    );
    assert!((result.not_safe[0].value - 0.0).abs() < f64::EPSILON);
    assert!((result.not_safe[1].value - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_scenario_high_sugar_no_protein_ignores_document_key_order() {
    let nutriments: Nutriments =
        serde_json::from_str(r#"{"sugars_100g": 40, "proteins_100g": 0}"#).unwrap();
    let result = evaluate_nutrient_safety(Some(&nutriments));

    assert!(result.safe.is_empty());
    assert_eq!(
        names(&result.not_safe),
        vec![NutrientName::Proteins, NutrientName::Sugars]
    );
}

#[test]
fn test_scenario_no_nutriments_block() {
    let result = evaluate_nutrient_safety(None);
    assert!(result.safe.is_empty());
    assert!(result.not_safe.is_empty());

    let product = ProductData::default();
    assert!(evaluate_product(&product).is_empty());
}

#[test]
fn test_scenario_energy_at_lower_bound() {
    let result = evaluate_nutrient_safety(Some(&single(NutrientName::EnergyKcal, 100.0)));
    assert_eq!(result.verdict_for(NutrientName::EnergyKcal), Some(true));
    assert_eq!(result.len(), 1);
}

// ============================================================================
// Boundaries
// ============================================================================

fn verdict(name: NutrientName, value: f64) -> bool {
    evaluate_nutrient_safety(Some(&single(name, value)))
        .verdict_for(name)
        .unwrap()
}

#[test]
fn test_carbohydrate_bounds_are_inclusive() {
    assert!(verdict(NutrientName::Carbohydrates, 20.0));
    assert!(!verdict(NutrientName::Carbohydrates, 19.999));
    assert!(verdict(NutrientName::Carbohydrates, 60.0));
    assert!(!verdict(NutrientName::Carbohydrates, 60.001));
}

#[test]
fn test_energy_bounds_are_inclusive() {
    assert!(verdict(NutrientName::EnergyKcal, 100.0));
    assert!(!verdict(NutrientName::EnergyKcal, 99.99));
    assert!(verdict(NutrientName::EnergyKcal, 400.0));
    assert!(!verdict(NutrientName::EnergyKcal, 400.01));
}

#[test]
fn test_upper_limits_are_inclusive() {
    for (name, limit) in [
        (NutrientName::Fat, 17.0),
        (NutrientName::SaturatedFat, 1.5),
        (NutrientName::Sugars, 5.0),
    ] {
        assert!(verdict(name, limit), "{name} at {limit}");
        assert!(!verdict(name, limit + 0.001), "{name} above {limit}");
        assert!(verdict(name, 0.0), "{name} at zero");
    }
}

#[test]
fn test_lower_limits_are_inclusive() {
    for (name, limit) in [(NutrientName::Fiber, 3.0), (NutrientName::Proteins, 5.0)] {
        assert!(verdict(name, limit), "{name} at {limit}");
        assert!(!verdict(name, limit - 0.001), "{name} below {limit}");
    }
}

#[test]
fn test_sodium_limit_applies_after_conversion() {
    assert!(verdict(NutrientName::Sodium, 0.12));
    assert!(!verdict(NutrientName::Sodium, 0.120_01));
    assert!(verdict(NutrientName::Sodium, 0.0));
}

#[test]
fn test_negative_values_are_evaluated_normally() {
    assert!(verdict(NutrientName::Sugars, -1.0));
    assert!(!verdict(NutrientName::Proteins, -1.0));
    assert!(!verdict(NutrientName::Carbohydrates, -5.0));
}

// ============================================================================
// Sodium conversion
// ============================================================================

#[test]
fn test_sodium_reported_in_milligrams() {
    let nutriments = Nutriments {
        sodium_unit: Some("g".to_owned()),
        ..single(NutrientName::Sodium, 0.05)
    };
    let result = evaluate_nutrient_safety(Some(&nutriments));
    let reading = result.reading(NutrientName::Sodium).unwrap();

    assert_eq!(result.verdict_for(NutrientName::Sodium), Some(true));
    assert!((reading.value - 50.0).abs() < 1e-9);
    assert_eq!(reading.unit, "mg");
}

#[test]
fn test_units_are_carried_for_display_only() {
    let nutriments = Nutriments {
        fat_unit: Some("oz".to_owned()),
        ..single(NutrientName::Fat, 18.0)
    };
    let result = evaluate_nutrient_safety(Some(&nutriments));
    let reading = result.reading(NutrientName::Fat).unwrap();

    assert_eq!(result.verdict_for(NutrientName::Fat), Some(false));
    assert_eq!(reading.unit, "oz");
    assert!((reading.value - 18.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_unit_falls_back_to_canonical() {
    let result = evaluate_nutrient_safety(Some(&single(NutrientName::EnergyKcal, 250.0)));
    assert_eq!(result.reading(NutrientName::EnergyKcal).unwrap().unit, "kcal");
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_non_finite_values_are_omitted() {
    let nutriments = Nutriments::default()
        .with_value(NutrientName::Fat, f64::NAN)
        .with_value(NutrientName::Sugars, f64::INFINITY)
        .with_value(NutrientName::Proteins, 8.0);
    let result = evaluate_nutrient_safety(Some(&nutriments));

    assert!(!result.contains(NutrientName::Fat));
    assert!(!result.contains(NutrientName::Sugars));
    assert_eq!(names(&result.safe), vec![NutrientName::Proteins]);
}

#[test]
fn test_empty_record_yields_empty_lists() {
    let result = evaluate_nutrient_safety(Some(&Nutriments::default()));
    assert!(result.is_empty());
}

#[test]
fn test_every_present_nutrient_appears_exactly_once() {
    let mixed = Nutriments::default()
        .with_value(NutrientName::Carbohydrates, 70.0)
        .with_value(NutrientName::EnergyKcal, 250.0)
        .with_value(NutrientName::Fat, 30.0)
        .with_value(NutrientName::Fiber, 4.0)
        .with_value(NutrientName::Sodium, 1.0)
        .with_value(NutrientName::Sugars, 2.0);
    let result = evaluate_nutrient_safety(Some(&mixed));

    assert_partition(&result);
    assert_eq!(result.len(), mixed.present_count());
    assert!(!result.contains(NutrientName::Proteins));
    assert!(!result.contains(NutrientName::SaturatedFat));
}

#[test]
fn test_lists_keep_evaluation_order() {
    let mixed = Nutriments::default()
        .with_value(NutrientName::Sugars, 2.0)
        .with_value(NutrientName::Carbohydrates, 70.0)
        .with_value(NutrientName::SaturatedFat, 0.5)
        .with_value(NutrientName::EnergyKcal, 250.0)
        .with_value(NutrientName::Sodium, 1.0)
        .with_value(NutrientName::Fat, 30.0);
    let result = evaluate_nutrient_safety(Some(&mixed));

    assert_eq!(
        names(&result.safe),
        vec![
            NutrientName::EnergyKcal,
            NutrientName::SaturatedFat,
            NutrientName::Sugars
        ]
    );
    assert_eq!(
        names(&result.not_safe),
        vec![
            NutrientName::Carbohydrates,
            NutrientName::Fat,
            NutrientName::Sodium
        ]
    );
}

#[test]
fn test_classifier_is_deterministic() {
    let nutriments = all_safe_nutriments().with_value(NutrientName::Fat, 25.0);
    let first = evaluate_nutrient_safety(Some(&nutriments));
    let second = STANDARD_THRESHOLDS.classify(Some(&nutriments));
    assert_eq!(first, second);
    assert_eq!(first, ThresholdTable::standard().classify(Some(&nutriments)));
}

#[test]
fn test_classification_serializes_with_camel_case_lists() {
    let nutriments = single(NutrientName::Sugars, 40.0);
    let json = serde_json::to_value(evaluate_nutrient_safety(Some(&nutriments))).unwrap();

    assert_eq!(json["safe"], serde_json::json!([]));
    assert_eq!(json["notSafe"][0]["name"], "sugars");
    assert_eq!(json["notSafe"][0]["unit"], "g");
}
