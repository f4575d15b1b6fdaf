// ABOUTME: Body mass index calculation and the pediatric and adult BMI category ladders
// ABOUTME: Shared by weight-for-age above 71 months and the weight-for-height fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use growth_core::constants::age::ADULT_AGE_YEARS;
use growth_core::constants::{adult_bmi, pediatric_bmi};
use growth_core::models::WeightCategory;
use serde::{Deserialize, Serialize};

/// BMI in kg/m² from weight (kg) and height (cm)
///
/// `None` when the height is zero, negative or either value is not finite.
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// BMI cutoff ladder
///
/// The two ladders use different cutoffs for similarly named categories
/// (underweight starts below 16 for children and below 17 for adults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiLadder {
    /// BMI-for-age bands for children under 19
    Pediatric,
    /// WHO adult bands with obese classes I-III
    Adult,
}

impl BmiLadder {
    /// Ladder for an age in fractional years
    #[must_use]
    pub fn for_age(age_years: f64) -> Self {
        if age_years < ADULT_AGE_YEARS {
            Self::Pediatric
        } else {
            Self::Adult
        }
    }

    /// Category for a BMI value
    #[must_use]
    pub fn classify(self, bmi: f64) -> WeightCategory {
        match self {
            Self::Pediatric => pediatric_bmi_category(bmi),
            Self::Adult => adult_bmi_category(bmi),
        }
    }

    /// Get ladder name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pediatric => "pediatric",
            Self::Adult => "adult",
        }
    }
}

/// Pediatric BMI-for-age category
#[must_use]
pub fn pediatric_bmi_category(bmi: f64) -> WeightCategory {
    if bmi < pediatric_bmi::SEVERELY_UNDERWEIGHT_BELOW {
        WeightCategory::SeverelyUnderweight
    } else if bmi < pediatric_bmi::UNDERWEIGHT_BELOW {
        WeightCategory::Underweight
    } else if bmi < pediatric_bmi::MILDLY_UNDERWEIGHT_BELOW {
        WeightCategory::MildlyUnderweight
    } else if bmi < pediatric_bmi::NORMAL_BELOW {
        WeightCategory::Normal
    } else if bmi < pediatric_bmi::OVERWEIGHT_BELOW {
        WeightCategory::Overweight
    } else {
        WeightCategory::Obese
    }
}

/// Adult BMI category
#[must_use]
pub fn adult_bmi_category(bmi: f64) -> WeightCategory {
    if bmi < adult_bmi::SEVERELY_UNDERWEIGHT_BELOW {
        WeightCategory::SeverelyUnderweight
    } else if bmi < adult_bmi::UNDERWEIGHT_BELOW {
        WeightCategory::Underweight
    } else if bmi < adult_bmi::MILDLY_UNDERWEIGHT_BELOW {
        WeightCategory::MildlyUnderweight
    } else if bmi < adult_bmi::NORMAL_BELOW {
        WeightCategory::Normal
    } else if bmi < adult_bmi::OVERWEIGHT_BELOW {
        WeightCategory::Overweight
    } else if bmi < adult_bmi::OBESE_CLASS_1_BELOW {
        WeightCategory::ObeseClass1
    } else if bmi < adult_bmi::OBESE_CLASS_2_BELOW {
        WeightCategory::ObeseClass2
    } else {
        WeightCategory::ObeseClass3
    }
}
