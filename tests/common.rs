// ABOUTME: Shared test utilities and fixture reference tables for integration tests
// ABOUTME: Provides quiet logging setup, known table rows and measurement builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::expect_used,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `growth_status`
//!
//! Fixture tables hold only a handful of rows with the same cutoffs as the
//! bundled WHO document, so tests can also exercise table misses.

use growth_status::models::{Gender, MeasurementInput};
use growth_status::reference::{
    LengthHeightForAgeRow, ReferenceTables, WeightForAgeRow, WeightForHeightRow,
};
use growth_status::ClassificationEngine;
use serde_json::{json, Value};
use std::env;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Boys, 12 months
pub const WFA_MALE_12: WeightForAgeRow = WeightForAgeRow {
    severely_cutoff: 6.9,
    underweight_to: 7.6,
    overweight: 12.1,
};

/// Boys, 71 months
pub const WFA_MALE_71: WeightForAgeRow = WeightForAgeRow {
    severely_cutoff: 13.5,
    underweight_to: 15.2,
    overweight: 27.0,
};

/// Girls, 12 months
pub const WFA_FEMALE_12: WeightForAgeRow = WeightForAgeRow {
    severely_cutoff: 6.3,
    underweight_to: 6.9,
    overweight: 11.6,
};

/// Boys, 12 months
pub const LHFA_MALE_12: LengthHeightForAgeRow = LengthHeightForAgeRow {
    severely_cutoff: 68.6,
    stunted_to: 70.9,
    tall: 82.9,
};

/// Boys, 71 months
pub const LHFA_MALE_71: LengthHeightForAgeRow = LengthHeightForAgeRow {
    severely_cutoff: 100.7,
    stunted_to: 105.5,
    tall: 130.9,
};

/// Boys, 80.0 cm
pub const WFH_MALE_80: WeightForHeightRow = WeightForHeightRow {
    severely_cutoff: 8.4,
    wasted_to: 9.0,
    overweight_from: 12.7,
    overweight_to: 13.9,
    obese_from: 14.0,
};

/// Girls, 80.0 cm
pub const WFH_FEMALE_80: WeightForHeightRow = WeightForHeightRow {
    severely_cutoff: 8.1,
    wasted_to: 8.7,
    overweight_from: 12.2,
    overweight_to: 13.4,
    obese_from: 13.5,
};

/// Sparse tables: months 12 and 71, height 80.0 cm
pub fn fixture_tables() -> ReferenceTables {
    ReferenceTables::empty()
        .with_weight_for_age(Gender::Male, 12, WFA_MALE_12)
        .with_weight_for_age(Gender::Male, 71, WFA_MALE_71)
        .with_weight_for_age(Gender::Female, 12, WFA_FEMALE_12)
        .with_length_height_for_age(Gender::Male, 12, LHFA_MALE_12)
        .with_length_height_for_age(Gender::Male, 71, LHFA_MALE_71)
        .with_weight_for_height(Gender::Male, 80.0, WFH_MALE_80)
        .with_weight_for_height(Gender::Female, 80.0, WFH_FEMALE_80)
}

/// Engine over [`fixture_tables`]
pub fn fixture_engine() -> ClassificationEngine {
    init_test_logging();
    ClassificationEngine::new(Arc::new(fixture_tables()))
}

/// Engine over the bundled WHO tables
pub fn bundled_engine() -> ClassificationEngine {
    init_test_logging();
    ClassificationEngine::with_bundled_tables().expect("bundled tables load")
}

/// Measurement builder with every field optional
pub fn measurement(
    age: &str,
    weight: Option<f64>,
    height: Option<f64>,
    muac: Option<f64>,
    gender: Gender,
) -> MeasurementInput {
    MeasurementInput {
        weight,
        height,
        age: age.to_owned(),
        muac,
        gender,
    }
}

/// Smallest valid table document: one row per family and gender
pub fn minimal_document() -> Value {
    let wfa = json!([{ "month": 12, "severely_cutoff": 6.9, "underweight_to": 7.6, "overweight": 12.1 }]);
    let lhfa = json!([{ "month": 12, "severely_cutoff": 68.6, "stunted_to": 70.9, "tall": 82.9 }]);
    let wfh = json!([{
        "height_cm": 80.0,
        "severely_cutoff": 8.4,
        "wasted_to": 9.0,
        "overweight_from": 12.7,
        "overweight_to": 13.9,
        "obese_from": 14.0
    }]);
    json!({
        "standard": "test fixture",
        "version": 1,
        "weight_for_age": { "male": wfa, "female": wfa },
        "length_height_for_age": { "male": lhfa, "female": lhfa },
        "weight_for_height": { "male": wfh, "female": wfh }
    })
}
