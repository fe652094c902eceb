// ABOUTME: Threshold table command for fooddraft-cli
// ABOUTME: Prints the safe range of every evaluated nutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use fooddraft::errors::AppResult;
use fooddraft::intelligence::ThresholdTable;

use crate::helpers::display::display_json;

/// Print the standard threshold table
pub fn show(json: bool) -> AppResult<()> {
    let table = ThresholdTable::standard();
    if json {
        return display_json(table.entries());
    }

    println!("{:<15} {:<12} UNIT", "NUTRIENT", "SAFE RANGE");
    for entry in table.entries() {
        println!(
            "{:<15} {:<12} {}",
            entry.name.label(),
            entry.range.to_string(),
            entry.name.canonical_unit()
        );
    }
    println!("\nValues are per 100g; bounds are inclusive.");
    Ok(())
}
