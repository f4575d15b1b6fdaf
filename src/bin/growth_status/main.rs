// ABOUTME: growth-status CLI - classify measurements and check reference tables from the shell
// ABOUTME: Single records, JSON batches and table validation, with JSON on stdout and logs on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Classify one child
//! growth-status classify --age "2 years 3 months" --weight 12.1 --height 86 --muac 14.2 --gender female
//!
//! # Include parsed age and BMI in the output
//! growth-status classify --age "25 years" --weight 45 --height 160 --detailed
//!
//! # Classify a JSON array of measurement records
//! growth-status batch --input records.json --output statuses.json
//!
//! # Validate an external reference table document
//! growth-status validate-tables --path who_tables.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use growth_status::config::EngineConfig;
use growth_status::logging::LoggingConfig;
use growth_status::models::Gender;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "growth-status",
    about = "WHO growth and nutritional status classification",
    long_about = "Classifies weight-for-age, length/height-for-age, weight-for-height and MUAC status from anthropometric measurements."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reference table document override (defaults to GROWTH_REFERENCE_TABLES or the bundled tables)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Classify one set of measurements
    Classify {
        /// Age descriptor, e.g. "2 years 3 months"
        #[arg(long, default_value = "")]
        age: String,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Height or length in centimetres
        #[arg(long)]
        height: Option<f64>,

        /// Mid-upper-arm circumference in centimetres
        #[arg(long)]
        muac: Option<f64>,

        /// Gender (male or female)
        #[arg(long, default_value = "male")]
        gender: Gender,

        /// Include parsed age and BMI
        #[arg(long, short = 'd')]
        detailed: bool,
    },

    /// Classify a JSON array of measurement records
    Batch {
        /// Input file with a JSON array of records
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Load and validate a reference table document
    ValidateTables {
        /// Document to validate (the configured or bundled tables when omitted)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    let mut config = EngineConfig::load()?;
    if let Some(path) = cli.tables {
        config.reference_tables_path = Some(path);
    }
    debug!(?config, "Engine configuration");

    match cli.command {
        Command::Classify {
            age,
            weight,
            height,
            muac,
            gender,
            detailed,
        } => commands::classify::run(
            &config,
            commands::classify::ClassifyArgs {
                age,
                weight,
                height,
                muac,
                gender,
                detailed,
            },
        ),
        Command::Batch { input, output } => {
            commands::batch::run(&config, &input, output.as_deref())
        }
        Command::ValidateTables { path } => {
            commands::tables::validate(&config, path.as_deref())
        }
    }
}
