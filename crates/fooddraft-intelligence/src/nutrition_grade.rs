// ABOUTME: Nutri-Score grade normalization from free-form grade strings and tag lists
// ABOUTME: Anything outside a-e collapses to Unknown, shown as "X"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutri-Score letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NutritionGrade {
    /// Best
    A,
    /// Good
    B,
    /// Average
    C,
    /// Poor
    D,
    /// Worst
    E,
    /// Missing, `"unknown"`, `"not-applicable"`, or garbage
    Unknown,
}

impl NutritionGrade {
    /// Parse a grade case-insensitively; surrounding whitespace is ignored
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "a" => Self::A,
            "b" => Self::B,
            "c" => Self::C,
            "d" => Self::D,
            "e" => Self::E,
            _ => Self::Unknown,
        }
    }

    /// Parse an optional grade
    #[must_use]
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map_or(Self::Unknown, Self::parse)
    }

    /// Grade carried by the first element of a tag list
    #[must_use]
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        Self::from_option(tags.first().map(AsRef::as_ref))
    }

    /// Single-letter display form
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::Unknown => 'X',
        }
    }
}

impl fmt::Display for NutritionGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
