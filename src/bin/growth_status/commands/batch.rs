// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Batch classification command for growth-status
// ABOUTME: Reads a JSON array of records and writes statuses in the same order

use crate::helpers::output::{print_json, write_json};
use anyhow::{Context, Result};
use growth_status::config::EngineConfig;
use growth_status::models::MeasurementInput;
use growth_status::ClassificationEngine;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Classify every record in `input`, writing to `output` or stdout
pub fn run(config: &EngineConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let engine = ClassificationEngine::from_config(config)?;

    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let records: Vec<MeasurementInput> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of measurement records", input.display()))?;

    let started = Instant::now();
    let statuses = engine.classify_batch(&records);
    info!(
        records = records.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "Batch classified"
    );

    match output {
        Some(path) => write_json(path, &statuses),
        None => print_json(&statuses),
    }
}
