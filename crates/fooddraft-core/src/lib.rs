// ABOUTME: Core types and constants for the FoodDraft nutrition platform
// ABOUTME: Foundation crate with error handling, nutrition data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

#![deny(unsafe_code)]

//! # `FoodDraft` Core
//!
//! Foundation crate providing shared types and constants. It changes
//! infrequently so the classifier and service crates compile incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Units, endpoints, environment keys, and defaults
//! - **models**: Nutrition records, classifier output, and bookmarks

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Nutriments, `ProductData`, `SafetyClassification`, Bookmark)
pub mod models;
