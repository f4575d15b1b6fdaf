// ABOUTME: Weight-for-height classifier with WHO wasting table and BMI fallback
// ABOUTME: Table applies up to 71 months for heights 65-120 cm keyed at 0.5 cm, BMI ladders otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::strategy::{resolve, ClassificationStrategy, Outcome};
use super::IndicatorContext;
use crate::reference::WeightForHeightRow;
use growth_core::constants::weight_for_height::{MAX_HEIGHT_CM, MIN_HEIGHT_CM};
use growth_core::models::WeightForHeight;

/// Weight-for-height strategies in the order they are tried
pub const WEIGHT_FOR_HEIGHT_CHAIN: [WeightForHeightStrategy; 2] = [
    WeightForHeightStrategy::ReferenceTable,
    WeightForHeightStrategy::BodyMassIndex,
];

/// Weight-for-height classification strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightForHeightStrategy {
    /// WHO table row, 0-71 months and 65-120 cm
    ReferenceTable,
    /// BMI ladder when no table row applies
    BodyMassIndex,
}

impl ClassificationStrategy for WeightForHeightStrategy {
    type Status = WeightForHeight;

    fn name(self) -> &'static str {
        match self {
            Self::ReferenceTable => "weight_for_height_table",
            Self::BodyMassIndex => "bmi_ladder",
        }
    }

    fn apply(self, ctx: &IndicatorContext<'_>) -> Outcome<WeightForHeight> {
        let (Some(weight), Some(height)) = (ctx.weight, ctx.height) else {
            return Outcome::Unclassified;
        };

        match self {
            Self::ReferenceTable => {
                if !ctx.within_table_ages() || !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height)
                {
                    return Outcome::Declined;
                }
                // A missing row falls through to BMI
                ctx.tables
                    .weight_for_height(ctx.gender, height)
                    .map_or(Outcome::Declined, |row| {
                        Outcome::Classified(classify_against_row(weight, &row))
                    })
            }
            Self::BodyMassIndex => {
                Outcome::from_option(ctx.bmi_category().map(WeightForHeight::Bmi))
            }
        }
    }
}

/// Category for a weight against one table row
///
/// Wasting bounds are inclusive and checked first; the overweight range is
/// inclusive at both ends.
#[must_use]
pub fn classify_against_row(weight_kg: f64, row: &WeightForHeightRow) -> WeightForHeight {
    if weight_kg <= row.severely_cutoff {
        WeightForHeight::SeverelyWasted
    } else if weight_kg <= row.wasted_to {
        WeightForHeight::Wasted
    } else if (row.overweight_from..=row.overweight_to).contains(&weight_kg) {
        WeightForHeight::Overweight
    } else if weight_kg >= row.obese_from {
        WeightForHeight::Obese
    } else {
        WeightForHeight::Normal
    }
}

/// Weight-for-height status, `None` when weight or height is missing
#[must_use]
pub fn classify_weight_for_height(ctx: &IndicatorContext<'_>) -> Option<WeightForHeight> {
    resolve("wfh", &WEIGHT_FOR_HEIGHT_CHAIN, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: WeightForHeightRow = WeightForHeightRow {
        severely_cutoff: 8.4,
        wasted_to: 9.0,
        overweight_from: 12.7,
        overweight_to: 13.9,
        obese_from: 14.0,
    };

    #[test]
    fn test_gap_between_overweight_and_obese_is_normal() {
        assert_eq!(classify_against_row(13.95, &ROW), WeightForHeight::Normal);
        assert_eq!(classify_against_row(13.9, &ROW), WeightForHeight::Overweight);
        assert_eq!(classify_against_row(14.0, &ROW), WeightForHeight::Obese);
        assert_eq!(classify_against_row(9.0, &ROW), WeightForHeight::Wasted);
    }
}
