// ABOUTME: Static per-100g safety thresholds for the eight evaluated nutrients
// ABOUTME: SafeRange bounds (inclusive) and the process-wide ThresholdTable constant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

//! Safety thresholds
//!
//! All bounds are per 100g (or 100ml) and inclusive. Sodium is compared in
//! milligrams; the food database reports it in grams, so readings are scaled
//! by [`units::MG_PER_GRAM`] before comparison.

use fooddraft_core::constants::units;
use fooddraft_core::models::NutrientName;
use serde::Serialize;
use std::fmt;

/// Safe interval for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SafeRange {
    /// Safe when `value >= min`
    AtLeast {
        /// Inclusive lower bound
        min: f64,
    },
    /// Safe when `value <= max`
    AtMost {
        /// Inclusive upper bound
        max: f64,
    },
    /// Safe when `min <= value <= max`
    Between {
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
}

impl SafeRange {
    /// Whether `value` falls inside the range
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        match self {
            Self::AtLeast { min } => value >= min,
            Self::AtMost { max } => value <= max,
            Self::Between { min, max } => value >= min && value <= max,
        }
    }
}

impl fmt::Display for SafeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast { min } => write!(f, ">= {min}"),
            Self::AtMost { max } => write!(f, "<= {max}"),
            Self::Between { min, max } => write!(f, "{min} - {max}"),
        }
    }
}

/// Threshold for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientThreshold {
    /// Nutrient the threshold applies to
    pub name: NutrientName,
    /// Safe interval, in `NutrientName::canonical_unit`
    pub range: SafeRange,
    /// Factor converting the source value into the canonical unit, when they differ
    pub conversion: Option<f64>,
}

/// Read-only mapping from nutrient to safe range, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdTable {
    entries: [NutrientThreshold; 8],
}

/// Thresholds applied by [`crate::nutrient_safety::evaluate_nutrient_safety`]
pub const STANDARD_THRESHOLDS: ThresholdTable = ThresholdTable {
    entries: [
        NutrientThreshold {
            name: NutrientName::Carbohydrates,
            range: SafeRange::Between {
                min: 20.0,
                max: 60.0,
            },
            conversion: None,
        },
        NutrientThreshold {
            name: NutrientName::EnergyKcal,
            range: SafeRange::Between {
                min: 100.0,
                max: 400.0,
            },
            conversion: None,
        },
        NutrientThreshold {
            name: NutrientName::Fat,
            range: SafeRange::AtMost { max: 17.0 },
            conversion: None,
        },
        NutrientThreshold {
            name: NutrientName::Fiber,
            range: SafeRange::AtLeast { min: 3.0 },
            conversion: None,
        },
        NutrientThreshold {
            name: NutrientName::Proteins,
            range: SafeRange::AtLeast { min: 5.0 },
            conversion: None,
        },
        NutrientThreshold {
            name: NutrientName::SaturatedFat,
            range: SafeRange::AtMost { max: 1.5 },
            conversion: None,
        },
        NutrientThreshold {
            name: NutrientName::Sodium,
            range: SafeRange::AtMost { max: 120.0 },
            conversion: Some(units::MG_PER_GRAM),
        },
        NutrientThreshold {
            name: NutrientName::Sugars,
            range: SafeRange::AtMost { max: 5.0 },
            conversion: None,
        },
    ],
};

impl ThresholdTable {
    /// The standard table
    #[must_use]
    pub const fn standard() -> &'static Self {
        &STANDARD_THRESHOLDS
    }

    /// Entries in evaluation order
    #[must_use]
    pub fn entries(&self) -> &[NutrientThreshold] {
        &self.entries
    }

    /// Threshold for `name`
    #[must_use]
    pub fn get(&self, name: NutrientName) -> Option<&NutrientThreshold> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_follow_evaluation_order() {
        let names: Vec<NutrientName> = STANDARD_THRESHOLDS
            .entries()
            .iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, NutrientName::ALL.to_vec());
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let between = SafeRange::Between {
            min: 20.0,
            max: 60.0,
        };
        assert!(between.contains(20.0));
        assert!(between.contains(60.0));
        assert!(!between.contains(19.999));
        assert!(!between.contains(60.001));

        assert!(SafeRange::AtLeast { min: 3.0 }.contains(3.0));
        assert!(SafeRange::AtMost { max: 1.5 }.contains(1.5));
    }

    #[test]
    fn test_only_sodium_is_converted() {
        for entry in STANDARD_THRESHOLDS.entries() {
            if entry.name == NutrientName::Sodium {
                assert_eq!(entry.conversion, Some(1000.0));
            } else {
                assert_eq!(entry.conversion, None, "{}", entry.name);
            }
        }
    }

    #[test]
    fn test_range_display() {
        let sodium = ThresholdTable::standard()
            .get(NutrientName::Sodium)
            .unwrap();
        assert_eq!(sodium.range.to_string(), "<= 120");
        let carbs = ThresholdTable::standard()
            .get(NutrientName::Carbohydrates)
            .unwrap();
        assert_eq!(carbs.range.to_string(), "20 - 60");
    }

    #[test]
    fn test_threshold_serialization() {
        let fiber = ThresholdTable::standard().get(NutrientName::Fiber).unwrap();
        let json = serde_json::to_value(fiber).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "fiber",
                "range": {"rule": "at_least", "min": 3.0},
                "conversion": null
            })
        );
    }
}
