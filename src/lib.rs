// ABOUTME: Main library entry point for FoodDraft nutrition safety tooling
// ABOUTME: Wires product sources, bookmarks, configuration, and logging around the classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

#![deny(unsafe_code)]

//! # `FoodDraft`
//!
//! Looks packaged foods up by barcode and classifies their per-100g nutrient
//! values as safe or not safe against a fixed threshold table.
//!
//! ## Architecture
//!
//! - **`fooddraft-core`**: errors, constants, and data models
//! - **`fooddraft-intelligence`**: thresholds, the classifier, and display rounding
//! - **external**: product sources (Open Food Facts, in-memory mock)
//! - **bookmarks**: per-user bookmark storage
//! - **services**: product reports combining a source with the classifier
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fooddraft::config::FoodDraftConfig;
//! use fooddraft::external::OpenFoodFactsClient;
//! use fooddraft::services::ProductReportService;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> fooddraft::errors::AppResult<()> {
//!     let config = FoodDraftConfig::from_env()?;
//!     let client = Arc::new(OpenFoodFactsClient::new(config.openfoodfacts)?);
//!     let report = ProductReportService::new(client).report("3017624010701").await?;
//!     print!("{}", report.render_text());
//!     Ok(())
//! }
//! ```

/// Per-user bookmark storage
pub mod bookmarks;

/// Environment-based configuration
pub mod config;

/// Unified error handling, re-exported from `fooddraft-core`
pub mod errors;

/// External product sources
pub mod external;

/// Structured logging setup
pub mod logging;

/// Domain services
pub mod services;

pub use fooddraft_core::{constants, models};
pub use fooddraft_intelligence as intelligence;
