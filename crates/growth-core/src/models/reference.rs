// ABOUTME: Reference table family identifiers for WHO growth cutoff tables
// ABOUTME: Names the length/height-for-age, weight-for-age and weight-for-height families
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference table family
///
/// Age-keyed families are indexed by whole months (0-71), the height-keyed
/// family by height rounded to the nearest 0.5 cm (65-120).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableFamily {
    /// Length/height-for-age, keyed by age in months
    LengthHeightForAge,
    /// Weight-for-age, keyed by age in months
    WeightForAge,
    /// Weight-for-height, keyed by height in centimetres
    WeightForHeight,
}

impl TableFamily {
    /// All families in document order
    pub const ALL: [Self; 3] = [
        Self::WeightForAge,
        Self::LengthHeightForAge,
        Self::WeightForHeight,
    ];

    /// Get family name for logging and table documents
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LengthHeightForAge => "length_height_for_age",
            Self::WeightForAge => "weight_for_age",
            Self::WeightForHeight => "weight_for_height",
        }
    }
}

impl fmt::Display for TableFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
