// ABOUTME: Reference table error types raised while loading and validating cutoff tables
// ABOUTME: Provides structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reference Table Error Types
//!
//! Table problems are detected once, when a table document is loaded, and
//! never during classification. Each variant names the table family and
//! gender it was found in so a broken document can be fixed quickly.

use super::{AppError, ErrorCode};
use crate::models::{Gender, TableFamily};
use serde_json::json;
use thiserror::Error;

/// Errors specific to reference table loading and validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// A family/gender table contains no rows
    #[error("{family} table for {gender} has no rows")]
    Empty {
        /// Table family
        family: TableFamily,
        /// Gender partition
        gender: Gender,
    },
    /// A cutoff is NaN or infinite
    #[error("{family} table for {gender} has a non-finite cutoff at key {key}")]
    NonFinite {
        /// Table family
        family: TableFamily,
        /// Gender partition
        gender: Gender,
        /// Row key (months or centimetres)
        key: f64,
    },
    /// Cutoffs within a row are not strictly ordered
    #[error("{family} table for {gender} is not monotonic at key {key}: {detail}")]
    NonMonotonic {
        /// Table family
        family: TableFamily,
        /// Gender partition
        gender: Gender,
        /// Row key (months or centimetres)
        key: f64,
        /// Which ordering constraint failed
        detail: &'static str,
    },
    /// Two rows share the same key
    #[error("{family} table for {gender} has duplicate key {key}")]
    DuplicateKey {
        /// Table family
        family: TableFamily,
        /// Gender partition
        gender: Gender,
        /// Duplicated key
        key: f64,
    },
    /// A height key does not sit on the 0.5 cm grid
    #[error("{family} table for {gender} has key {key} off the 0.5 cm grid")]
    OffGrid {
        /// Table family
        family: TableFamily,
        /// Gender partition
        gender: Gender,
        /// Offending key
        key: f64,
    },
    /// The document is not valid JSON for the expected schema
    #[error("failed to parse reference document: {0}")]
    Parse(String),
    /// The document could not be read
    #[error("failed to read reference document {path}: {reason}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying failure
        reason: String,
    },
}

impl TableError {
    /// Table family the error belongs to, if it is row-level
    #[must_use]
    pub const fn family(&self) -> Option<TableFamily> {
        match self {
            Self::Empty { family, .. }
            | Self::NonFinite { family, .. }
            | Self::NonMonotonic { family, .. }
            | Self::DuplicateKey { family, .. }
            | Self::OffGrid { family, .. } => Some(*family),
            Self::Parse(_) | Self::Io { .. } => None,
        }
    }

    /// Error code this table error maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Parse(_) => ErrorCode::SerializationError,
            Self::Io { .. } => ErrorCode::StorageError,
            _ => ErrorCode::ReferenceDataInvalid,
        }
    }
}

impl From<TableError> for AppError {
    fn from(error: TableError) -> Self {
        let mut app_error = Self::new(error.code(), error.to_string());
        if let TableError::Io { path, .. } = &error {
            app_error = app_error.with_resource_id(path.clone());
        } else if let Some(family) = error.family() {
            app_error = app_error
                .with_resource_id(family.name())
                .with_details(json!({ "family": family.name() }));
        }
        app_error.with_source(error)
    }
}
