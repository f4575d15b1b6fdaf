// ABOUTME: Benchmark fixtures generating deterministic anthropometric measurement sets
// ABOUTME: Spreads records across infant, school-age and adult bands for realistic routing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating measurement records.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use growth_status::models::{Gender, MeasurementInput};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RecordBatchSize {
    /// Small dataset (10 records), below the parallel threshold
    Small,
    /// Medium dataset (1000 records), a typical survey upload
    Medium,
    /// Large dataset (20000 records), a national survey round
    Large,
}

impl RecordBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 1000,
            Self::Large => 20_000,
        }
    }
}

/// Age descriptor cycling through every routing band
fn age_descriptor(index: usize) -> String {
    match index % 5 {
        0 => format!("{} months", index % 24),
        1 => format!("{} years {} months", 2 + index % 4, index % 12),
        2 => format!("{} years", 6 + index % 13),
        3 => format!("{} years", 19 + index % 60),
        _ => format!("{} weeks {} days", index % 8, index % 7),
    }
}

/// Generate one measurement record (internal use only)
#[allow(clippy::cast_precision_loss)]
fn generate_record(index: usize) -> MeasurementInput {
    let band = index % 5;
    let (weight, height) = match band {
        0 | 4 => (
            ((index * 7) % 60) as f64 / 10.0 + 4.0,
            ((index * 13) % 300) as f64 / 10.0 + 55.0,
        ),
        1 => (
            ((index * 7) % 100) as f64 / 10.0 + 9.0,
            ((index * 13) % 350) as f64 / 10.0 + 80.0,
        ),
        2 => (
            ((index * 7) % 400) as f64 / 10.0 + 18.0,
            ((index * 13) % 700) as f64 / 10.0 + 110.0,
        ),
        _ => (
            ((index * 7) % 700) as f64 / 10.0 + 40.0,
            ((index * 13) % 400) as f64 / 10.0 + 150.0,
        ),
    };

    MeasurementInput {
        weight: (index % 11 != 0).then_some(weight),
        height: (index % 13 != 0).then_some(height),
        age: age_descriptor(index),
        muac: (index % 3 == 0).then(|| ((index * 17) % 150) as f64 / 10.0 + 10.0),
        gender: if index % 2 == 0 {
            Gender::Male
        } else {
            Gender::Female
        },
    }
}

/// Generate a batch of measurement records for benchmarking
#[must_use]
pub fn generate_records(size: RecordBatchSize) -> Vec<MeasurementInput> {
    (0..size.count()).map(generate_record).collect()
}
