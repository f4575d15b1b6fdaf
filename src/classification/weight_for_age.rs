// ABOUTME: Weight-for-age classifier with table lookup up to 71 months and BMI above
// ABOUTME: Ordered strategy chain: WHO weight-for-age table, then the age-appropriate BMI ladder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::strategy::{resolve, ClassificationStrategy, Outcome};
use super::IndicatorContext;
use crate::reference::WeightForAgeRow;
use growth_core::models::WeightCategory;

/// Weight-for-age strategies in the order they are tried
pub const WEIGHT_FOR_AGE_CHAIN: [WeightForAgeStrategy; 2] = [
    WeightForAgeStrategy::ReferenceTable,
    WeightForAgeStrategy::BodyMassIndex,
];

/// Weight-for-age classification strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightForAgeStrategy {
    /// WHO table row for the whole month of age, 0-71 months
    ReferenceTable,
    /// Pediatric or adult BMI ladder, above 71 months
    BodyMassIndex,
}

impl ClassificationStrategy for WeightForAgeStrategy {
    type Status = WeightCategory;

    fn name(self) -> &'static str {
        match self {
            Self::ReferenceTable => "weight_for_age_table",
            Self::BodyMassIndex => "bmi_ladder",
        }
    }

    fn apply(self, ctx: &IndicatorContext<'_>) -> Outcome<WeightCategory> {
        let Some(weight) = ctx.weight else {
            return Outcome::Unclassified;
        };

        match self {
            Self::ReferenceTable => {
                if !ctx.within_table_ages() {
                    return Outcome::Declined;
                }
                Outcome::from_option(
                    ctx.tables
                        .weight_for_age(ctx.gender, ctx.age.months)
                        .map(|row| classify_against_row(weight, &row)),
                )
            }
            Self::BodyMassIndex => Outcome::from_option(ctx.bmi_category()),
        }
    }
}

/// Category for a weight against one table row
///
/// Checks run in a fixed order and the first match wins; every bound is
/// inclusive.
#[must_use]
pub fn classify_against_row(weight_kg: f64, row: &WeightForAgeRow) -> WeightCategory {
    if weight_kg <= row.severely_cutoff {
        WeightCategory::SeverelyUnderweight
    } else if weight_kg <= row.underweight_to {
        WeightCategory::Underweight
    } else if weight_kg >= row.overweight {
        WeightCategory::Overweight
    } else {
        WeightCategory::Normal
    }
}

/// Weight-for-age status, `None` when weight (or height above 71 months) is missing
#[must_use]
pub fn classify_weight_for_age(ctx: &IndicatorContext<'_>) -> Option<WeightCategory> {
    resolve("wfa", &WEIGHT_FOR_AGE_CHAIN, ctx)
}
