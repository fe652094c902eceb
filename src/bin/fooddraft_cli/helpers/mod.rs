// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft
// ABOUTME: Helper modules for fooddraft-cli
// ABOUTME: Provides output formatting

pub mod display;
