// ABOUTME: Length/height-for-age classifier covering infants, school-age children and adults
// ABOUTME: Ordered strategy chain: WHO table to 71 months, linear growth bands under 19, then N/A
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::strategy::{resolve, ClassificationStrategy, Outcome};
use super::IndicatorContext;
use crate::reference::LengthHeightForAgeRow;
use growth_core::constants::height_for_age::{
    CM_PER_YEAR, FEMALE_LOWER_BASE_CM, FEMALE_UPPER_BASE_CM, MALE_LOWER_BASE_CM,
    MALE_UPPER_BASE_CM,
};
use growth_core::models::{Gender, HeightForAge};

/// Height-for-age strategies in the order they are tried
pub const HEIGHT_FOR_AGE_CHAIN: [HeightForAgeStrategy; 3] = [
    HeightForAgeStrategy::ReferenceTable,
    HeightForAgeStrategy::LinearGrowthBands,
    HeightForAgeStrategy::Adult,
];

/// Length/height-for-age classification strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightForAgeStrategy {
    /// WHO table row for the whole month of age, 0-71 months
    ReferenceTable,
    /// Linear bands on whole years, 72 months to under 19 years
    LinearGrowthBands,
    /// Not assessed from 19 years
    Adult,
}

impl ClassificationStrategy for HeightForAgeStrategy {
    type Status = HeightForAge;

    fn name(self) -> &'static str {
        match self {
            Self::ReferenceTable => "length_height_for_age_table",
            Self::LinearGrowthBands => "linear_growth_bands",
            Self::Adult => "adult_not_applicable",
        }
    }

    fn apply(self, ctx: &IndicatorContext<'_>) -> Outcome<HeightForAge> {
        let Some(height) = ctx.height else {
            return Outcome::Unclassified;
        };

        match self {
            Self::ReferenceTable => {
                if !ctx.within_table_ages() {
                    return Outcome::Declined;
                }
                Outcome::from_option(
                    ctx.tables
                        .length_height_for_age(ctx.gender, ctx.age.months)
                        .map(|row| classify_against_row(height, &row)),
                )
            }
            Self::LinearGrowthBands => {
                if ctx.is_adult() {
                    return Outcome::Declined;
                }
                let (lower, upper) = linear_growth_band(ctx.gender, ctx.age.whole_years());
                Outcome::Classified(if height < lower {
                    HeightForAge::Stunted
                } else if height > upper {
                    HeightForAge::Tall
                } else {
                    HeightForAge::Normal
                })
            }
            Self::Adult => Outcome::Classified(HeightForAge::NotApplicable),
        }
    }
}

/// Category for a height against one table row, inclusive bounds, first match wins
#[must_use]
pub fn classify_against_row(height_cm: f64, row: &LengthHeightForAgeRow) -> HeightForAge {
    if height_cm <= row.severely_cutoff {
        HeightForAge::SeverelyStunted
    } else if height_cm <= row.stunted_to {
        HeightForAge::Stunted
    } else if height_cm >= row.tall {
        HeightForAge::Tall
    } else {
        HeightForAge::Normal
    }
}

/// Normal height range `(lower, upper)` in cm for whole years of age
#[must_use]
pub fn linear_growth_band(gender: Gender, whole_years: f64) -> (f64, f64) {
    let (lower_base, upper_base) = match gender {
        Gender::Male => (MALE_LOWER_BASE_CM, MALE_UPPER_BASE_CM),
        Gender::Female => (FEMALE_LOWER_BASE_CM, FEMALE_UPPER_BASE_CM),
    };
    (
        whole_years.mul_add(CM_PER_YEAR, lower_base),
        whole_years.mul_add(CM_PER_YEAR, upper_base),
    )
}

/// Length/height-for-age status, `None` when height is missing
#[must_use]
pub fn classify_height_for_age(ctx: &IndicatorContext<'_>) -> Option<HeightForAge> {
    resolve("lhfa", &HEIGHT_FOR_AGE_CHAIN, ctx)
}
