// ABOUTME: FoodDraft CLI - classify product nutrition, look up barcodes, browse categories
// ABOUTME: Parses arguments, sets up logging and configuration, and dispatches commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft
//!
//! Usage:
//! ```bash
//! # Classify a local product document (lookup response, product, or bare nutriments)
//! fooddraft-cli classify --file product.json
//! cat nutriments.json | fooddraft-cli classify --json
//!
//! # Look a product up on Open Food Facts
//! fooddraft-cli lookup 3017624010701
//!
//! # Browse a category
//! fooddraft-cli search spreads --page 2
//!
//! # Show the threshold table
//! fooddraft-cli thresholds
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fooddraft::config::FoodDraftConfig;
use fooddraft::external::OpenFoodFactsClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fooddraft-cli",
    about = "FoodDraft nutrient safety CLI",
    long_about = "Classify per-100g nutrient values of packaged foods as safe or not safe."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify a product document read from a file or stdin
    Classify {
        /// JSON file to read (stdin when omitted)
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look a product up by barcode and classify it
    Lookup {
        /// EAN/UPC barcode (8 to 14 digits)
        barcode: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List products in a category
    Search {
        /// Category name, e.g. "spreads"
        category: String,

        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Print the safety threshold table
    Thresholds {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = FoodDraftConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging.init()?;
    config.log_summary();

    match cli.command {
        Command::Classify { file, json } => {
            commands::product::classify(file.as_deref(), json).await?;
        }
        Command::Lookup { barcode, json } => {
            let client = Arc::new(OpenFoodFactsClient::new(config.openfoodfacts)?);
            commands::product::lookup(client, &barcode, json).await?;
        }
        Command::Search { category, page } => {
            let client = OpenFoodFactsClient::new(config.openfoodfacts)?;
            commands::product::search(&client, &category, page).await?;
        }
        Command::Thresholds { json } => {
            commands::thresholds::show(json)?;
        }
    }

    debug!("Command finished");
    Ok(())
}
