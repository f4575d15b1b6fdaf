// ABOUTME: Main library entry point for the growth and nutritional status classification engine
// ABOUTME: Exposes age parsing, WHO reference tables, indicator classifiers, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Growth Status
//!
//! WHO-style growth and nutritional status classification. Given weight,
//! height or length, a free-text age, mid-upper-arm circumference and gender,
//! the engine reports:
//!
//! - **WFA**: weight-for-age (tables to 71 months, BMI ladders above)
//! - **L/HFA**: length/height-for-age (tables, linear bands, N/A for adults)
//! - **WFH**: weight-for-height (tables for 65-120 cm, BMI fallback)
//! - **MUAC**: acute malnutrition status from arm circumference
//!
//! Classification is pure and total: missing measurements leave the dependent
//! indicators empty and never raise an error.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use growth_status::models::{Gender, MeasurementInput};
//!
//! let input = MeasurementInput::new("2 years 3 months")
//!     .with_weight(12.1)
//!     .with_height(86.0)
//!     .with_muac(14.2)
//!     .with_gender(Gender::Female);
//!
//! let status = growth_status::classify(&input);
//! println!("{}", serde_json::to_string(&status).unwrap_or_default());
//! ```

/// Age parsing, indicator classifiers and the classification engine
pub mod classification;

/// Environment-driven engine configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// WHO reference tables: lookup trait, loaders, validation and snapshots
pub mod reference;

pub use growth_core::{constants, errors, models};

pub use classification::{
    classify, classify_with, parse_age, AgeDetails, ClassificationEngine, ClassificationReport,
};
pub use reference::{ReferenceSource, ReferenceTables, SharedTables};
