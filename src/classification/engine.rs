// ABOUTME: Classification orchestrator turning one measurement set into a composite status
// ABOUTME: Parses age once, runs every indicator against one table snapshot, supports batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::age::{parse_age, AgeDetails};
use super::bmi::{body_mass_index, BmiLadder};
use super::height_for_age::classify_height_for_age;
use super::muac::classify_muac;
use super::weight_for_age::classify_weight_for_age;
use super::weight_for_height::classify_weight_for_height;
use super::IndicatorContext;
use crate::config::{EngineConfig, DEFAULT_PARALLEL_BATCH_MIN};
use crate::reference::{ReferenceSource, ReferenceTables, SharedTables, TableSnapshot};
use growth_core::errors::AppResult;
use growth_core::models::{MeasurementInput, NutritionalStatus};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info, warn};

/// Process-wide engine used by [`classify`]
static DEFAULT_ENGINE: OnceLock<ClassificationEngine> = OnceLock::new();

/// Status together with the intermediate values it was derived from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    /// Composite status
    pub status: NutritionalStatus,
    /// Parsed age
    pub age: AgeDetails,
    /// BMI (kg/m²) when weight and a positive height are known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Ladder that applies to this age
    pub bmi_ladder: BmiLadder,
}

/// Classify one measurement set against a table source
///
/// Total over its input: missing or unusable measurements only leave the
/// dependent indicators empty.
#[must_use]
pub fn classify_with(tables: &dyn ReferenceSource, input: &MeasurementInput) -> NutritionalStatus {
    let age = parse_age(&input.age);
    classify_parsed(tables, input, &age)
}

fn classify_parsed(
    tables: &dyn ReferenceSource,
    input: &MeasurementInput,
    age: &AgeDetails,
) -> NutritionalStatus {
    let ctx = IndicatorContext::new(input, age, tables);
    let status = NutritionalStatus {
        wfa: classify_weight_for_age(&ctx),
        lhfa: classify_height_for_age(&ctx),
        wfh: classify_weight_for_height(&ctx),
        muac: input.muac,
        muac_status: classify_muac(input.muac, age.years, input.gender),
    };
    debug!(
        age_months = age.months,
        age_years = age.years,
        gender = %input.gender,
        wfa = ?status.wfa,
        lhfa = ?status.lhfa,
        wfh = ?status.wfh,
        muac_status = ?status.muac_status,
        "Classified measurements"
    );
    status
}

/// Classification engine over a swappable reference table snapshot
#[derive(Debug)]
pub struct ClassificationEngine {
    tables: SharedTables,
    parallel_batch_min: usize,
}

impl ClassificationEngine {
    /// Engine over the given tables with the default batch threshold
    #[must_use]
    pub fn new(tables: TableSnapshot) -> Self {
        Self {
            tables: SharedTables::new(tables),
            parallel_batch_min: DEFAULT_PARALLEL_BATCH_MIN,
        }
    }

    /// Engine over the bundled WHO tables
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled document fails to load
    pub fn with_bundled_tables() -> AppResult<Self> {
        Ok(Self::new(Arc::new(ReferenceTables::bundled()?)))
    }

    /// Engine built from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured table document cannot be loaded or validated
    pub fn from_config(config: &EngineConfig) -> AppResult<Self> {
        let tables = ReferenceTables::load(config)?;
        info!(
            external = config.reference_tables_path.is_some(),
            validated = config.validate_tables,
            "Classification engine ready"
        );
        Ok(Self::new(Arc::new(tables)).with_parallel_batch_min(config.parallel_batch_min))
    }

    /// Set the smallest batch classified in parallel (at least 1)
    #[must_use]
    pub fn with_parallel_batch_min(mut self, parallel_batch_min: usize) -> Self {
        self.parallel_batch_min = parallel_batch_min.max(1);
        self
    }

    /// Smallest batch classified in parallel
    #[must_use]
    pub const fn parallel_batch_min(&self) -> usize {
        self.parallel_batch_min
    }

    /// Snapshot handle, for hot reload
    #[must_use]
    pub const fn tables(&self) -> &SharedTables {
        &self.tables
    }

    /// Swap in new tables; calls already running finish on the old snapshot
    #[must_use]
    pub fn replace_tables(&self, tables: TableSnapshot) -> TableSnapshot {
        self.tables.replace(tables)
    }

    /// Classify one measurement set
    #[must_use]
    pub fn classify(&self, input: &MeasurementInput) -> NutritionalStatus {
        let snapshot = self.tables.snapshot();
        classify_with(snapshot.as_ref(), input)
    }

    /// Classify and report the parsed age and BMI alongside the status
    #[must_use]
    pub fn classify_detailed(&self, input: &MeasurementInput) -> ClassificationReport {
        let snapshot = self.tables.snapshot();
        let age = parse_age(&input.age);
        let status = classify_parsed(snapshot.as_ref(), input, &age);
        let bmi = input
            .weight
            .zip(input.height)
            .and_then(|(weight, height)| body_mass_index(weight, height));
        let bmi_ladder = BmiLadder::for_age(age.years);
        debug!(?bmi, ladder = bmi_ladder.name(), "Detailed classification");

        ClassificationReport {
            status,
            age,
            bmi,
            bmi_ladder,
        }
    }

    /// Classify many measurement sets against one snapshot
    ///
    /// Output order matches input order. Batches of at least
    /// `parallel_batch_min` records run on the rayon pool.
    #[must_use]
    pub fn classify_batch(&self, inputs: &[MeasurementInput]) -> Vec<NutritionalStatus> {
        let snapshot = self.tables.snapshot();
        let tables = snapshot.as_ref();

        if inputs.len() >= self.parallel_batch_min {
            debug!(records = inputs.len(), "Classifying batch in parallel");
            inputs
                .par_iter()
                .map(|input| classify_with(tables, input))
                .collect()
        } else {
            debug!(records = inputs.len(), "Classifying batch sequentially");
            inputs
                .iter()
                .map(|input| classify_with(tables, input))
                .collect()
        }
    }
}

/// Process-wide engine, built on first use from [`EngineConfig::global`]
///
/// Falls back to the bundled tables when the configured document fails to
/// load, and to empty tables if even that fails.
#[must_use]
pub fn default_engine() -> &'static ClassificationEngine {
    DEFAULT_ENGINE.get_or_init(|| {
        let config = EngineConfig::global();
        ClassificationEngine::from_config(config).unwrap_or_else(|e| {
            warn!("Failed to load configured reference tables: {e}, using bundled tables");
            ClassificationEngine::with_bundled_tables()
                .unwrap_or_else(|e| {
                    error!("Failed to load bundled reference tables: {e}, table lookups disabled");
                    ClassificationEngine::new(Arc::new(ReferenceTables::empty()))
                })
                .with_parallel_batch_min(config.parallel_batch_min)
        })
    })
}

/// Classify one measurement set with the process-wide engine
#[must_use]
pub fn classify(input: &MeasurementInput) -> NutritionalStatus {
    default_engine().classify(input)
}
