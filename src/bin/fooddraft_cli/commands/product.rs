// ABOUTME: Product commands for fooddraft-cli
// ABOUTME: Handles classify, lookup, and search operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

use fooddraft::errors::AppResult;
use fooddraft::external::{OpenFoodFactsClient, ProductSource};
use fooddraft::services::{parse_document, ProductReport, ProductReportService};
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::helpers::display::{display_json, display_search_page};

/// Classify a local product document
pub async fn classify(file: Option<&Path>, json: bool) -> AppResult<()> {
    let text = match file {
        Some(path) => {
            info!(path = %path.display(), "Reading product document");
            tokio::fs::read_to_string(path).await?
        }
        None => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            text
        }
    };

    let data = parse_document(&text)?;
    let barcode = data.code.clone().unwrap_or_default();
    let report = ProductReport::from_data(&barcode, &data);

    if json {
        match report.classification() {
            Some(classification) => display_json(classification)?,
            None => display_json(&report)?,
        }
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

/// Look a product up and print its report
pub async fn lookup<S: ProductSource + ?Sized>(
    source: Arc<S>,
    barcode: &str,
    json: bool,
) -> AppResult<()> {
    let report = ProductReportService::new(source).report(barcode).await?;
    if json {
        display_json(&report)?;
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

/// List one page of a category
pub async fn search(client: &OpenFoodFactsClient, category: &str, page: u32) -> AppResult<()> {
    let results = client.search_by_category(category, page).await?;
    display_search_page(category, page, &results);
    Ok(())
}
