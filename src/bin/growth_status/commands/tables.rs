// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Reference table validation command for growth-status
// ABOUTME: Loads a table document with validation forced on and prints its coverage summary

use crate::helpers::output::print_json;
use anyhow::Result;
use growth_status::config::EngineConfig;
use growth_status::ReferenceTables;
use std::path::Path;
use tracing::info;

/// Validate a document and print per-table row counts
pub fn validate(config: &EngineConfig, path: Option<&Path>) -> Result<()> {
    let tables = match path.or(config.reference_tables_path.as_deref()) {
        Some(path) => ReferenceTables::from_path(path, true)?,
        None => ReferenceTables::bundled()?,
    };
    info!("Reference tables are valid");
    print_json(&tables.summary())
}
