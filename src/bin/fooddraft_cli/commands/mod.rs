// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft
// ABOUTME: Re-exports command modules for fooddraft-cli
// ABOUTME: Provides product and threshold commands

pub mod product;
pub mod thresholds;
