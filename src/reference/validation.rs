// ABOUTME: Load-time validation of reference table documents
// ABOUTME: Checks row ordering, finite cutoffs, duplicate keys and the 0.5 cm height grid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::loader::{AgeKeyedEntry, HeightKeyedEntry, ReferenceDocument};
use super::rows::{HeightKey, LengthHeightForAgeRow, WeightForAgeRow, WeightForHeightRow};
use growth_core::errors::TableError;
use growth_core::models::{Gender, TableFamily};
use std::collections::BTreeSet;
use tracing::info;

/// Invariants every row type must satisfy
trait RowInvariants {
    const FAMILY: TableFamily;

    fn all_finite(&self) -> bool;

    /// Description of the first broken ordering constraint
    fn ordering_violation(&self) -> Option<&'static str>;
}

impl RowInvariants for WeightForAgeRow {
    const FAMILY: TableFamily = TableFamily::WeightForAge;

    fn all_finite(&self) -> bool {
        [self.severely_cutoff, self.underweight_to, self.overweight]
            .iter()
            .all(|value| value.is_finite())
    }

    fn ordering_violation(&self) -> Option<&'static str> {
        if self.severely_cutoff >= self.underweight_to {
            Some("severely_cutoff must be < underweight_to")
        } else if self.underweight_to >= self.overweight {
            Some("underweight_to must be < overweight")
        } else {
            None
        }
    }
}

impl RowInvariants for LengthHeightForAgeRow {
    const FAMILY: TableFamily = TableFamily::LengthHeightForAge;

    fn all_finite(&self) -> bool {
        [self.severely_cutoff, self.stunted_to, self.tall]
            .iter()
            .all(|value| value.is_finite())
    }

    fn ordering_violation(&self) -> Option<&'static str> {
        if self.severely_cutoff >= self.stunted_to {
            Some("severely_cutoff must be < stunted_to")
        } else if self.stunted_to >= self.tall {
            Some("stunted_to must be < tall")
        } else {
            None
        }
    }
}

impl RowInvariants for WeightForHeightRow {
    const FAMILY: TableFamily = TableFamily::WeightForHeight;

    fn all_finite(&self) -> bool {
        [
            self.severely_cutoff,
            self.wasted_to,
            self.overweight_from,
            self.overweight_to,
            self.obese_from,
        ]
        .iter()
        .all(|value| value.is_finite())
    }

    fn ordering_violation(&self) -> Option<&'static str> {
        if self.severely_cutoff >= self.wasted_to {
            Some("severely_cutoff must be < wasted_to")
        } else if self.wasted_to >= self.overweight_from {
            Some("wasted_to must be < overweight_from")
        } else if self.overweight_from > self.overweight_to {
            Some("overweight_from must be <= overweight_to")
        } else if self.overweight_to >= self.obese_from {
            Some("overweight_to must be < obese_from")
        } else {
            None
        }
    }
}

/// Validate every table in a document
///
/// # Errors
///
/// Returns the first violation found: an empty table, a non-finite cutoff,
/// out-of-order cutoffs, a duplicate key, or a height off the 0.5 cm grid
pub fn validate_document(document: &ReferenceDocument) -> Result<(), TableError> {
    let mut rows = 0;
    for gender in [Gender::Male, Gender::Female] {
        rows += validate_age_keyed(gender, document.weight_for_age.for_gender(gender))?;
        rows += validate_age_keyed(gender, document.length_height_for_age.for_gender(gender))?;
        rows += validate_height_keyed(gender, document.weight_for_height.for_gender(gender))?;
    }
    info!(rows, "Reference tables passed validation");
    Ok(())
}

fn validate_age_keyed<R: RowInvariants>(
    gender: Gender,
    entries: &[AgeKeyedEntry<R>],
) -> Result<usize, TableError> {
    let family = R::FAMILY;
    if entries.is_empty() {
        return Err(TableError::Empty { family, gender });
    }

    let mut seen = BTreeSet::new();
    for entry in entries {
        let key = f64::from(entry.month);
        check_row(family, gender, key, &entry.row)?;
        if !seen.insert(entry.month) {
            return Err(TableError::DuplicateKey {
                family,
                gender,
                key,
            });
        }
    }
    Ok(entries.len())
}

fn validate_height_keyed(
    gender: Gender,
    entries: &[HeightKeyedEntry<WeightForHeightRow>],
) -> Result<usize, TableError> {
    let family = TableFamily::WeightForHeight;
    if entries.is_empty() {
        return Err(TableError::Empty { family, gender });
    }

    let mut seen = BTreeSet::new();
    for entry in entries {
        let key = entry.height_cm;
        if !key.is_finite() {
            return Err(TableError::NonFinite {
                family,
                gender,
                key,
            });
        }
        check_row(family, gender, key, &entry.row)?;

        let grid_key = match HeightKey::from_cm(key) {
            Some(grid_key) if HeightKey::is_on_grid(key) => grid_key,
            _ => {
                return Err(TableError::OffGrid {
                    family,
                    gender,
                    key,
                })
            }
        };
        if !seen.insert(grid_key) {
            return Err(TableError::DuplicateKey {
                family,
                gender,
                key,
            });
        }
    }
    Ok(entries.len())
}

fn check_row<R: RowInvariants>(
    family: TableFamily,
    gender: Gender,
    key: f64,
    row: &R,
) -> Result<(), TableError> {
    if !row.all_finite() {
        return Err(TableError::NonFinite {
            family,
            gender,
            key,
        });
    }
    if let Some(detail) = row.ordering_violation() {
        return Err(TableError::NonMonotonic {
            family,
            gender,
            key,
            detail,
        });
    }
    Ok(())
}
