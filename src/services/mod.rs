// ABOUTME: Domain service layer combining product sources with the nutrition classifier
// ABOUTME: Provides front-end-agnostic services reused by the CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

//! Domain service layer

/// Product lookup and safety report
pub mod product_report;

pub use product_report::{parse_document, ProductReport, ProductReportService, ProductSummary};
