// ABOUTME: Re-exports the unified error system from fooddraft-core
// ABOUTME: Lets service modules and binaries use crate::errors::AppError directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

pub use fooddraft_core::errors::*;
