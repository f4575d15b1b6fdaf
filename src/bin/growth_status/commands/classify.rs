// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Single-record classification command for growth-status
// ABOUTME: Builds a MeasurementInput from flags and prints the status or detailed report

use crate::helpers::output::print_json;
use anyhow::Result;
use growth_status::config::EngineConfig;
use growth_status::models::{Gender, MeasurementInput};
use growth_status::ClassificationEngine;

/// Flags of the `classify` subcommand
pub struct ClassifyArgs {
    pub age: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub muac: Option<f64>,
    pub gender: Gender,
    pub detailed: bool,
}

/// Classify one record and print it as JSON
pub fn run(config: &EngineConfig, args: ClassifyArgs) -> Result<()> {
    let engine = ClassificationEngine::from_config(config)?;
    let input = MeasurementInput {
        weight: args.weight,
        height: args.height,
        age: args.age,
        muac: args.muac,
        gender: args.gender,
    };

    if args.detailed {
        print_json(&engine.classify_detailed(&input))
    } else {
        print_json(&engine.classify(&input))
    }
}
