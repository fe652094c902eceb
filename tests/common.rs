// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and nutrition record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fooddraft`

use fooddraft::models::{NutrientName, NutrientReading, Nutriments, SafetyClassification};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Nutriments with a single per-100g value set
pub fn single(name: NutrientName, value: f64) -> Nutriments {
    Nutriments::default().with_value(name, value)
}

/// Scenario A: every nutrient present and inside its safe range
pub fn all_safe_nutriments() -> Nutriments {
    Nutriments::default()
        .with_value(NutrientName::Carbohydrates, 30.0)
        .with_value(NutrientName::EnergyKcal, 250.0)
        .with_value(NutrientName::Fat, 10.0)
        .with_value(NutrientName::Fiber, 4.0)
        .with_value(NutrientName::Proteins, 8.0)
        .with_value(NutrientName::SaturatedFat, 1.0)
        .with_value(NutrientName::Sodium, 0.05)
        .with_value(NutrientName::Sugars, 3.0)
}

/// Names of `readings`, in order
pub fn names(readings: &[NutrientReading]) -> Vec<NutrientName> {
    readings.iter().map(|r| r.name).collect()
}

/// Assert each evaluated nutrient appears exactly once across both lists
pub fn assert_partition(classification: &SafetyClassification) {
    for name in NutrientName::ALL {
        let hits = classification
            .safe
            .iter()
            .chain(&classification.not_safe)
            .filter(|r| r.name == name)
            .count();
        assert!(hits <= 1, "{name} appears {hits} times");
    }
}
