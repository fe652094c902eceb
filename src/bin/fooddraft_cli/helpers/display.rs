// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft
// ABOUTME: Output formatting helpers for fooddraft-cli
// ABOUTME: Provides JSON output and search result listings

use fooddraft::errors::AppResult;
use fooddraft::intelligence::NutritionGrade;
use fooddraft::models::ProductSearchPage;
use serde::Serialize;

/// Print `value` as pretty JSON on stdout
pub fn display_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print one page of category search results
pub fn display_search_page(category: &str, page: u32, results: &ProductSearchPage) {
    if results.products.is_empty() {
        println!("No products in '{category}' on page {page}");
        return;
    }

    let total = results
        .count
        .map_or_else(|| "?".to_owned(), |count| count.to_string());
    println!("Category '{category}', page {page} ({total} products)");
    println!("{}", "=".repeat(60));
    for listing in &results.products {
        println!(
            "{:<14} [{}] {}",
            listing.code.as_deref().unwrap_or("-"),
            NutritionGrade::from_tags(&listing.nutrition_grades_tags),
            listing.product_name.as_deref().unwrap_or("Unnamed product")
        );
    }

    if results.has_more() {
        println!("\nMore results: --page {}", page.saturating_add(1));
    }
}
