// ABOUTME: Measurement input model and gender enum consumed by the classification engine
// ABOUTME: All numeric measurements are optional; absence disables dependent indicators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used to select reference tables and gender-split cutoffs
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male (the default when unspecified)
    #[default]
    #[serde(alias = "male", alias = "MALE", alias = "M", alias = "m")]
    Male,
    /// Female
    #[serde(alias = "female", alias = "FEMALE", alias = "F", alias = "f")]
    Female,
}

impl Gender {
    /// Lowercase name used in table documents and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" => Ok(Self::Male),
            "female" | "f" | "girl" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// One set of anthropometric measurements
///
/// Weight is in kilograms, height/length and MUAC in centimetres. `age` is a
/// free-text descriptor such as `"2 years 3 months"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height or recumbent length (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Free-text age descriptor
    #[serde(default)]
    pub age: String,
    /// Mid-upper-arm circumference (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muac: Option<f64>,
    /// Gender, defaults to male
    #[serde(default)]
    pub gender: Gender,
}

impl MeasurementInput {
    /// Start a measurement set from an age descriptor
    #[must_use]
    pub fn new(age: impl Into<String>) -> Self {
        Self {
            age: age.into(),
            ..Self::default()
        }
    }

    /// Set the weight in kilograms
    #[must_use]
    pub const fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight = Some(weight_kg);
        self
    }

    /// Set the height or length in centimetres
    #[must_use]
    pub const fn with_height(mut self, height_cm: f64) -> Self {
        self.height = Some(height_cm);
        self
    }

    /// Set the mid-upper-arm circumference in centimetres
    #[must_use]
    pub const fn with_muac(mut self, muac_cm: f64) -> Self {
        self.muac = Some(muac_cm);
        self
    }

    /// Set the gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}
