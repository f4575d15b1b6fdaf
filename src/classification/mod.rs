// ABOUTME: Growth indicator classifiers and the orchestrating engine
// ABOUTME: Age parsing, BMI ladders, WFA, L/HFA, WFH and MUAC classifiers built on strategy chains
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Classification
//!
//! Every indicator is an ordered list of strategies, tried in turn:
//!
//! | Indicator | Chain |
//! |-----------|-------|
//! | WFA  | reference table (0-71 months) → BMI ladder |
//! | L/HFA | reference table (0-71 months) → linear growth bands (under 19) → N/A |
//! | WFH  | reference table (0-71 months, 65-120 cm) → BMI ladder |
//! | MUAC | age band cutoffs |
//!
//! A strategy that applies but cannot classify ends the chain with no
//! status; one that does not apply hands over to the next.

mod age;
mod bmi;
mod engine;
mod height_for_age;
mod muac;
mod strategy;
mod weight_for_age;
mod weight_for_height;

pub use age::{parse_age, AgeDetails};
pub use bmi::{adult_bmi_category, body_mass_index, pediatric_bmi_category, BmiLadder};
pub use engine::{classify, classify_with, default_engine, ClassificationEngine, ClassificationReport};
pub use height_for_age::{
    classify_height_for_age, linear_growth_band, HeightForAgeStrategy, HEIGHT_FOR_AGE_CHAIN,
};
pub use muac::{classify_muac, MuacBand, MuacCutoffs};
pub use strategy::{resolve, ClassificationStrategy, Outcome};
pub use weight_for_age::{classify_weight_for_age, WeightForAgeStrategy, WEIGHT_FOR_AGE_CHAIN};
pub use weight_for_height::{
    classify_weight_for_height, WeightForHeightStrategy, WEIGHT_FOR_HEIGHT_CHAIN,
};

use crate::reference::ReferenceSource;
use growth_core::constants::age::{ADULT_AGE_YEARS, TABLE_MAX_AGE_MONTHS};
use growth_core::models::{Gender, MeasurementInput, WeightCategory};

/// Inputs shared by every strategy for one classification call
///
/// Non-finite measurements are treated as absent.
#[derive(Clone, Copy)]
pub struct IndicatorContext<'a> {
    /// Weight (kg)
    pub weight: Option<f64>,
    /// Height or length (cm)
    pub height: Option<f64>,
    /// Gender
    pub gender: Gender,
    /// Age parsed once for the whole call
    pub age: &'a AgeDetails,
    /// Table snapshot for the whole call
    pub tables: &'a dyn ReferenceSource,
}

impl<'a> IndicatorContext<'a> {
    /// Build a context from raw input, an already parsed age and a table snapshot
    #[must_use]
    pub fn new(
        input: &MeasurementInput,
        age: &'a AgeDetails,
        tables: &'a dyn ReferenceSource,
    ) -> Self {
        Self {
            weight: input.weight.filter(|w| w.is_finite()),
            height: input.height.filter(|h| h.is_finite()),
            gender: input.gender,
            age,
            tables,
        }
    }

    /// Age falls inside the age-keyed reference tables (0-71 months)
    #[must_use]
    pub const fn within_table_ages(&self) -> bool {
        self.age.months <= TABLE_MAX_AGE_MONTHS
    }

    /// Adult by fractional years (19 and over)
    #[must_use]
    pub fn is_adult(&self) -> bool {
        self.age.years >= ADULT_AGE_YEARS
    }

    /// BMI ladder category, when weight and a positive height are known
    #[must_use]
    pub fn bmi_category(&self) -> Option<WeightCategory> {
        let bmi = body_mass_index(self.weight?, self.height?)?;
        Some(BmiLadder::for_age(self.age.years).classify(bmi))
    }
}
