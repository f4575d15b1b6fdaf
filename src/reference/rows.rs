// ABOUTME: Reference table row types holding WHO cutoff values for one key
// ABOUTME: Weight-for-age, length/height-for-age and weight-for-height rows plus the half-cm height key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use growth_core::constants::weight_for_height::KEYS_PER_CM;
use growth_core::models::TableFamily;
use serde::{Deserialize, Serialize};

/// Weight-for-age cutoffs for one (gender, month) key, in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightForAgeRow {
    /// At or below: severely underweight
    pub severely_cutoff: f64,
    /// At or below: underweight
    pub underweight_to: f64,
    /// At or above: overweight
    pub overweight: f64,
}

/// Length/height-for-age cutoffs for one (gender, month) key, in centimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthHeightForAgeRow {
    /// At or below: severely stunted
    pub severely_cutoff: f64,
    /// At or below: stunted
    pub stunted_to: f64,
    /// At or above: tall
    pub tall: f64,
}

/// Weight-for-height cutoffs for one (gender, height) key, in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightForHeightRow {
    /// At or below: severely wasted
    pub severely_cutoff: f64,
    /// At or below: wasted
    pub wasted_to: f64,
    /// Lower bound of the overweight range (inclusive)
    pub overweight_from: f64,
    /// Upper bound of the overweight range (inclusive)
    pub overweight_to: f64,
    /// At or above: obese
    pub obese_from: f64,
}

/// A row from any table family
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceRow {
    /// Weight-for-age row
    WeightForAge(WeightForAgeRow),
    /// Length/height-for-age row
    LengthHeightForAge(LengthHeightForAgeRow),
    /// Weight-for-height row
    WeightForHeight(WeightForHeightRow),
}

impl ReferenceRow {
    /// Family this row belongs to
    #[must_use]
    pub const fn family(&self) -> TableFamily {
        match self {
            Self::WeightForAge(_) => TableFamily::WeightForAge,
            Self::LengthHeightForAge(_) => TableFamily::LengthHeightForAge,
            Self::WeightForHeight(_) => TableFamily::WeightForHeight,
        }
    }
}

/// Height key at 0.5 cm resolution, stored as a count of half centimetres
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeightKey(u32);

impl HeightKey {
    /// Round a height to the nearest 0.5 cm; `None` for negative or non-finite input
    #[must_use]
    pub fn from_cm(height_cm: f64) -> Option<Self> {
        if !height_cm.is_finite() || height_cm < 0.0 {
            return None;
        }
        Some(Self((height_cm * KEYS_PER_CM).round() as u32))
    }

    /// Whether a height already sits on the 0.5 cm grid
    #[must_use]
    pub fn is_on_grid(height_cm: f64) -> bool {
        let scaled = height_cm * KEYS_PER_CM;
        (scaled - scaled.round()).abs() < 1e-9
    }

    /// Height in centimetres this key stands for
    #[must_use]
    pub fn cm(self) -> f64 {
        f64::from(self.0) / KEYS_PER_CM
    }
}
