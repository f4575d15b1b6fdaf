// ABOUTME: Read-only reference table provider for WHO growth cutoffs
// ABOUTME: Defines the ReferenceSource lookup trait and re-exports rows, tables, loader and snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reference Tables
//!
//! Six tables back the table-driven indicators: weight-for-age and
//! length/height-for-age keyed by whole months (0-71), and weight-for-height
//! keyed by height at 0.5 cm resolution (65-120 cm), each split by gender.
//!
//! A lookup outside the covered domain returns `None`. Classifiers treat that
//! as "not applicable in this band" and never as an error.

mod loader;
mod rows;
mod snapshot;
mod tables;
mod validation;

pub use loader::{
    AgeKeyedEntry, GenderRows, HeightKeyedEntry, ReferenceDocument, BUNDLED_TABLES_JSON,
};
pub use rows::{
    HeightKey, LengthHeightForAgeRow, ReferenceRow, WeightForAgeRow, WeightForHeightRow,
};
pub use snapshot::{SharedTables, TableSnapshot};
pub use tables::{ReferenceTables, TableCount, TableSummary};
pub use validation::validate_document;

use growth_core::models::{Gender, TableFamily};

/// Lookup surface over the reference tables
///
/// Implementations are immutable once built; hot reload swaps a whole
/// source through [`SharedTables`].
pub trait ReferenceSource: Send + Sync {
    /// Weight-for-age row for a whole month of age
    fn weight_for_age(&self, gender: Gender, age_months: u32) -> Option<WeightForAgeRow>;

    /// Length/height-for-age row for a whole month of age
    fn length_height_for_age(
        &self,
        gender: Gender,
        age_months: u32,
    ) -> Option<LengthHeightForAgeRow>;

    /// Weight-for-height row, `height_cm` rounded to the nearest 0.5 cm
    fn weight_for_height(&self, gender: Gender, height_cm: f64) -> Option<WeightForHeightRow>;

    /// Family-generic lookup
    ///
    /// Age keys are floored to whole months; height keys are rounded to the
    /// nearest 0.5 cm. Negative or non-finite keys find nothing.
    fn lookup(&self, gender: Gender, family: TableFamily, key: f64) -> Option<ReferenceRow> {
        match family {
            TableFamily::WeightForAge => month_key(key)
                .and_then(|months| self.weight_for_age(gender, months))
                .map(ReferenceRow::WeightForAge),
            TableFamily::LengthHeightForAge => month_key(key)
                .and_then(|months| self.length_height_for_age(gender, months))
                .map(ReferenceRow::LengthHeightForAge),
            TableFamily::WeightForHeight => {
                if !key.is_finite() || key < 0.0 {
                    return None;
                }
                self.weight_for_height(gender, key)
                    .map(ReferenceRow::WeightForHeight)
            }
        }
    }
}

fn month_key(key: f64) -> Option<u32> {
    if key.is_finite() && key >= 0.0 && key <= f64::from(u32::MAX) {
        Some(key.floor() as u32)
    } else {
        None
    }
}
