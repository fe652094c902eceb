// ABOUTME: Configuration module for environment-driven settings
// ABOUTME: Exposes the Open Food Facts, bookmark, and aggregate application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{BookmarkConfig, FoodDraftConfig, OpenFoodFactsConfig};
