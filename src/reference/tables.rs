// ABOUTME: In-memory reference tables indexed by gender and key
// ABOUTME: BTreeMap-backed ReferenceSource implementation with builders and coverage summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::rows::{HeightKey, LengthHeightForAgeRow, WeightForAgeRow, WeightForHeightRow};
use super::ReferenceSource;
use growth_core::models::{Gender, TableFamily};
use serde::Serialize;
use std::collections::BTreeMap;

/// One value per gender
#[derive(Debug, Clone, Default)]
pub(super) struct ByGender<T> {
    pub(super) male: T,
    pub(super) female: T,
}

impl<T> ByGender<T> {
    pub(super) const fn get(&self, gender: Gender) -> &T {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    pub(super) fn get_mut(&mut self, gender: Gender) -> &mut T {
        match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
        }
    }
}

/// Immutable set of reference tables
///
/// Build one with [`ReferenceTables::bundled`], one of the loaders, or the
/// `with_*` builders, then share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub(super) standard: Option<String>,
    pub(super) weight_for_age: ByGender<BTreeMap<u32, WeightForAgeRow>>,
    pub(super) length_height_for_age: ByGender<BTreeMap<u32, LengthHeightForAgeRow>>,
    pub(super) weight_for_height: ByGender<BTreeMap<HeightKey, WeightForHeightRow>>,
}

impl ReferenceTables {
    /// Tables with no rows; every lookup misses
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add or replace a weight-for-age row
    #[must_use]
    pub fn with_weight_for_age(mut self, gender: Gender, month: u32, row: WeightForAgeRow) -> Self {
        self.weight_for_age.get_mut(gender).insert(month, row);
        self
    }

    /// Add or replace a length/height-for-age row
    #[must_use]
    pub fn with_length_height_for_age(
        mut self,
        gender: Gender,
        month: u32,
        row: LengthHeightForAgeRow,
    ) -> Self {
        self.length_height_for_age.get_mut(gender).insert(month, row);
        self
    }

    /// Add or replace a weight-for-height row; the height is snapped to the 0.5 cm grid
    #[must_use]
    pub fn with_weight_for_height(
        mut self,
        gender: Gender,
        height_cm: f64,
        row: WeightForHeightRow,
    ) -> Self {
        if let Some(key) = HeightKey::from_cm(height_cm) {
            self.weight_for_height.get_mut(gender).insert(key, row);
        }
        self
    }

    /// Name of the growth standard these tables come from, if recorded
    #[must_use]
    pub fn standard(&self) -> Option<&str> {
        self.standard.as_deref()
    }

    /// Number of rows in one family/gender table
    #[must_use]
    pub fn row_count(&self, family: TableFamily, gender: Gender) -> usize {
        match family {
            TableFamily::WeightForAge => self.weight_for_age.get(gender).len(),
            TableFamily::LengthHeightForAge => self.length_height_for_age.get(gender).len(),
            TableFamily::WeightForHeight => self.weight_for_height.get(gender).len(),
        }
    }

    /// True when no table holds any row
    #[must_use]
    pub fn is_empty(&self) -> bool {
        TableFamily::ALL.iter().all(|&family| {
            self.row_count(family, Gender::Male) == 0 && self.row_count(family, Gender::Female) == 0
        })
    }

    /// Per-table row counts and key ranges
    #[must_use]
    pub fn summary(&self) -> TableSummary {
        let mut tables = Vec::with_capacity(TableFamily::ALL.len() * 2);
        for family in TableFamily::ALL {
            for gender in [Gender::Male, Gender::Female] {
                let (first_key, last_key) = self.key_range(family, gender);
                tables.push(TableCount {
                    family,
                    gender,
                    rows: self.row_count(family, gender),
                    first_key,
                    last_key,
                });
            }
        }
        TableSummary {
            standard: self.standard.clone(),
            tables,
        }
    }

    fn key_range(&self, family: TableFamily, gender: Gender) -> (Option<f64>, Option<f64>) {
        match family {
            TableFamily::WeightForAge => age_key_range(self.weight_for_age.get(gender)),
            TableFamily::LengthHeightForAge => {
                age_key_range(self.length_height_for_age.get(gender))
            }
            TableFamily::WeightForHeight => {
                let rows = self.weight_for_height.get(gender);
                (
                    rows.keys().next().map(|key| key.cm()),
                    rows.keys().next_back().map(|key| key.cm()),
                )
            }
        }
    }
}

fn age_key_range<R>(rows: &BTreeMap<u32, R>) -> (Option<f64>, Option<f64>) {
    (
        rows.keys().next().map(|&month| f64::from(month)),
        rows.keys().next_back().map(|&month| f64::from(month)),
    )
}

impl ReferenceSource for ReferenceTables {
    fn weight_for_age(&self, gender: Gender, age_months: u32) -> Option<WeightForAgeRow> {
        self.weight_for_age.get(gender).get(&age_months).copied()
    }

    fn length_height_for_age(
        &self,
        gender: Gender,
        age_months: u32,
    ) -> Option<LengthHeightForAgeRow> {
        self.length_height_for_age.get(gender).get(&age_months).copied()
    }

    fn weight_for_height(&self, gender: Gender, height_cm: f64) -> Option<WeightForHeightRow> {
        let key = HeightKey::from_cm(height_cm)?;
        self.weight_for_height.get(gender).get(&key).copied()
    }
}

/// Coverage of a loaded table set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    /// Growth standard name from the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    /// One entry per family and gender
    pub tables: Vec<TableCount>,
}

/// Row count and key range of one family/gender table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCount {
    /// Table family
    pub family: TableFamily,
    /// Gender partition
    pub gender: Gender,
    /// Number of rows
    pub rows: usize,
    /// Smallest key (months or cm)
    pub first_key: Option<f64>,
    /// Largest key (months or cm)
    pub last_key: Option<f64>,
}
