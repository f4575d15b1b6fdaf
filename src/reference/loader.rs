// ABOUTME: JSON reference table documents and the loaders that turn them into ReferenceTables
// ABOUTME: Supports the bundled WHO cutoff document, JSON strings, files and config-driven loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::rows::{HeightKey, LengthHeightForAgeRow, WeightForAgeRow, WeightForHeightRow};
use super::tables::ReferenceTables;
use super::validation::validate_document;
use crate::config::EngineConfig;
use growth_core::errors::{AppResult, TableError};
use growth_core::models::{Gender, TableFamily};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reference document compiled into the crate
///
/// Cutoffs at -3 SD, -2 SD, +2 SD and +3 SD from the WHO Child Growth
/// Standards, one row per month (0-71) or per 0.5 cm (65-120).
pub const BUNDLED_TABLES_JSON: &str = include_str!("../../data/who_reference_tables.json");

/// Row keyed by whole months of age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeKeyedEntry<R> {
    /// Age in whole months
    pub month: u32,
    /// Cutoffs for this month
    #[serde(flatten)]
    pub row: R,
}

/// Row keyed by height in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightKeyedEntry<R> {
    /// Height in centimetres, on the 0.5 cm grid
    pub height_cm: f64,
    /// Cutoffs for this height
    #[serde(flatten)]
    pub row: R,
}

/// Rows of one family split by gender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GenderRows<T> {
    /// Rows for boys
    #[serde(default)]
    pub male: Vec<T>,
    /// Rows for girls
    #[serde(default)]
    pub female: Vec<T>,
}

impl<T> Default for GenderRows<T> {
    fn default() -> Self {
        Self {
            male: Vec::new(),
            female: Vec::new(),
        }
    }
}

impl<T> GenderRows<T> {
    /// Rows for one gender
    #[must_use]
    pub fn for_gender(&self, gender: Gender) -> &[T] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

/// Serialized form of a complete table set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDocument {
    /// Growth standard name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    /// Document format version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Weight-for-age rows
    #[serde(default)]
    pub weight_for_age: GenderRows<AgeKeyedEntry<WeightForAgeRow>>,
    /// Length/height-for-age rows
    #[serde(default)]
    pub length_height_for_age: GenderRows<AgeKeyedEntry<LengthHeightForAgeRow>>,
    /// Weight-for-height rows
    #[serde(default)]
    pub weight_for_height: GenderRows<HeightKeyedEntry<WeightForHeightRow>>,
}

impl ReferenceTables {
    /// Tables from the bundled WHO document
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled document fails to parse or validate
    pub fn bundled() -> AppResult<Self> {
        Self::from_json_str(BUNDLED_TABLES_JSON, true)
    }

    /// Tables from a JSON document held in memory
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON, or a reference data
    /// error when `validate` is set and a row breaks a table invariant
    pub fn from_json_str(json: &str, validate: bool) -> AppResult<Self> {
        let document: ReferenceDocument =
            serde_json::from_str(json).map_err(|e| TableError::Parse(e.to_string()))?;
        Ok(Self::from_document(document, validate)?)
    }

    /// Tables from a JSON document on disk
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, otherwise the same
    /// errors as [`ReferenceTables::from_json_str`]
    pub fn from_path(path: &Path, validate: bool) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| TableError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let tables = Self::from_json_str(&json, validate)?;
        info!(
            path = %path.display(),
            validated = validate,
            "Loaded reference tables from file"
        );
        Ok(tables)
    }

    /// Tables chosen by configuration: the external document when a path is
    /// set, the bundled document otherwise
    ///
    /// # Errors
    ///
    /// Returns the loader error for whichever document was selected
    pub fn load(config: &EngineConfig) -> AppResult<Self> {
        match &config.reference_tables_path {
            Some(path) => Self::from_path(path, config.validate_tables),
            None => {
                debug!("Using bundled reference tables");
                Self::from_json_str(BUNDLED_TABLES_JSON, config.validate_tables)
            }
        }
    }

    /// Build tables from a parsed document
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation when `validate` is set
    pub fn from_document(document: ReferenceDocument, validate: bool) -> Result<Self, TableError> {
        if validate {
            validate_document(&document)?;
        }

        let mut tables = Self {
            standard: document.standard,
            ..Self::default()
        };

        for gender in [Gender::Male, Gender::Female] {
            *tables.weight_for_age.get_mut(gender) = index_by_month(
                TableFamily::WeightForAge,
                gender,
                document.weight_for_age.for_gender(gender),
            );
            *tables.length_height_for_age.get_mut(gender) = index_by_month(
                TableFamily::LengthHeightForAge,
                gender,
                document.length_height_for_age.for_gender(gender),
            );
            *tables.weight_for_height.get_mut(gender) =
                index_by_height(gender, document.weight_for_height.for_gender(gender));
        }

        Ok(tables)
    }

    /// Serialize back to the document form
    #[must_use]
    pub fn to_document(&self) -> ReferenceDocument {
        let mut document = ReferenceDocument {
            standard: self.standard.clone(),
            version: Some(1),
            ..ReferenceDocument::default()
        };
        for gender in [Gender::Male, Gender::Female] {
            let wfa = self.weight_for_age.get(gender);
            let lhfa = self.length_height_for_age.get(gender);
            let wfh = self.weight_for_height.get(gender);
            let (wfa_rows, lhfa_rows, wfh_rows) = match gender {
                Gender::Male => (
                    &mut document.weight_for_age.male,
                    &mut document.length_height_for_age.male,
                    &mut document.weight_for_height.male,
                ),
                Gender::Female => (
                    &mut document.weight_for_age.female,
                    &mut document.length_height_for_age.female,
                    &mut document.weight_for_height.female,
                ),
            };
            wfa_rows.extend(wfa.iter().map(|(&month, &row)| AgeKeyedEntry { month, row }));
            lhfa_rows.extend(lhfa.iter().map(|(&month, &row)| AgeKeyedEntry { month, row }));
            wfh_rows.extend(wfh.iter().map(|(key, &row)| HeightKeyedEntry {
                height_cm: key.cm(),
                row,
            }));
        }
        document
    }
}

fn index_by_month<R: Copy>(
    family: TableFamily,
    gender: Gender,
    entries: &[AgeKeyedEntry<R>],
) -> BTreeMap<u32, R> {
    let mut rows = BTreeMap::new();
    for entry in entries {
        if rows.insert(entry.month, entry.row).is_some() {
            warn!(%family, %gender, month = entry.month, "Duplicate reference row, keeping the last one");
        }
    }
    rows
}

fn index_by_height(
    gender: Gender,
    entries: &[HeightKeyedEntry<WeightForHeightRow>],
) -> BTreeMap<HeightKey, WeightForHeightRow> {
    let mut rows = BTreeMap::new();
    for entry in entries {
        let Some(key) = HeightKey::from_cm(entry.height_cm) else {
            warn!(%gender, height_cm = entry.height_cm, "Skipping weight-for-height row with unusable height");
            continue;
        };
        if rows.insert(key, entry.row).is_some() {
            warn!(%gender, height_cm = key.cm(), "Duplicate reference row, keeping the last one");
        }
    }
    rows
}
