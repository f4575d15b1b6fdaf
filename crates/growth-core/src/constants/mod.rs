// ABOUTME: Clinical cutoff constants for growth and nutritional status classification
// ABOUTME: Age bands, pediatric and adult BMI ladders, height-for-age heuristics and MUAC cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Clinical constants
//!
//! These values define band boundaries and category cutoffs. Table-driven
//! cutoffs (WHO reference rows) live in the reference table documents, not
//! here.

/// Age arithmetic and band boundaries
pub mod age {
    /// Average days per month used for the total-days approximation
    pub const DAYS_PER_MONTH: f64 = 30.44;

    /// Days per week
    pub const DAYS_PER_WEEK: u32 = 7;

    /// Months per year
    pub const MONTHS_PER_YEAR: u32 = 12;

    /// Oldest age (months) covered by the age-keyed reference tables
    pub const TABLE_MAX_AGE_MONTHS: u32 = 71;

    /// Age (years) from which adult BMI cutoffs apply and height-for-age is N/A
    pub const ADULT_AGE_YEARS: f64 = 19.0;
}

/// Pediatric BMI-for-age ladder (strict upper bounds, kg/m²)
///
/// Used for children older than 71 months and younger than 19 years.
pub mod pediatric_bmi {
    /// Below this: severely underweight
    pub const SEVERELY_UNDERWEIGHT_BELOW: f64 = 14.0;
    /// Below this: underweight
    pub const UNDERWEIGHT_BELOW: f64 = 16.0;
    /// Below this: mildly underweight
    pub const MILDLY_UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this: normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this: overweight, otherwise obese
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}

/// Adult BMI ladder (strict upper bounds, kg/m²)
///
/// Reference: WHO Technical Report Series 894 (2000), Obesity: preventing and
/// managing the global epidemic.
pub mod adult_bmi {
    /// Below this: severely underweight (thinness grade 3)
    pub const SEVERELY_UNDERWEIGHT_BELOW: f64 = 16.0;
    /// Below this: underweight (thinness grade 2)
    pub const UNDERWEIGHT_BELOW: f64 = 17.0;
    /// Below this: mildly underweight (thinness grade 1)
    pub const MILDLY_UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this: normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this: overweight (pre-obese)
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
    /// Below this: obese class I
    pub const OBESE_CLASS_1_BELOW: f64 = 35.0;
    /// Below this: obese class II, otherwise class III
    pub const OBESE_CLASS_2_BELOW: f64 = 40.0;
}

/// Linear height-for-age bands for 72 months up to 19 years
///
/// Bounds are `years * CM_PER_YEAR + base` using whole years.
pub mod height_for_age {
    /// Expected growth per year of age (cm)
    pub const CM_PER_YEAR: f64 = 6.0;
    /// Male lower bound offset (cm)
    pub const MALE_LOWER_BASE_CM: f64 = 77.0;
    /// Male upper bound offset (cm)
    pub const MALE_UPPER_BASE_CM: f64 = 85.0;
    /// Female lower bound offset (cm)
    pub const FEMALE_LOWER_BASE_CM: f64 = 75.0;
    /// Female upper bound offset (cm)
    pub const FEMALE_UPPER_BASE_CM: f64 = 83.0;
}

/// Weight-for-height table coverage
pub mod weight_for_height {
    /// Shortest height covered by the tables (cm)
    pub const MIN_HEIGHT_CM: f64 = 65.0;
    /// Tallest height covered by the tables (cm)
    pub const MAX_HEIGHT_CM: f64 = 120.0;
    /// Lookup keys per centimetre (0.5 cm resolution)
    pub const KEYS_PER_CM: f64 = 2.0;
}

/// Mid-upper-arm circumference cutoffs (strict upper bounds, cm)
pub mod muac {
    /// Under 5 years: below this is SAM
    pub const UNDER_FIVE_SEVERE_BELOW: f64 = 11.5;
    /// Under 5 years: below this is MAM
    pub const UNDER_FIVE_MODERATE_BELOW: f64 = 12.5;

    /// 5 to under 10 years: below this is SAM
    pub const FIVE_TO_TEN_SEVERE_BELOW: f64 = 13.5;
    /// 5 to under 10 years: below this is MAM
    pub const FIVE_TO_TEN_MODERATE_BELOW: f64 = 14.5;

    /// 10 to under 15 years, male: below this is SAM
    pub const TEN_TO_FIFTEEN_MALE_SEVERE_BELOW: f64 = 15.5;
    /// 10 to under 15 years, male: below this is MAM
    pub const TEN_TO_FIFTEEN_MALE_MODERATE_BELOW: f64 = 16.5;
    /// 10 to under 15 years, female: below this is SAM
    pub const TEN_TO_FIFTEEN_FEMALE_SEVERE_BELOW: f64 = 16.5;
    /// 10 to under 15 years, female: below this is MAM
    pub const TEN_TO_FIFTEEN_FEMALE_MODERATE_BELOW: f64 = 17.5;

    /// 15 years and over, male: below this is SAM
    pub const ADULT_MALE_SEVERE_BELOW: f64 = 23.0;
    /// 15 years and over, male: below this is MAM
    pub const ADULT_MALE_MODERATE_BELOW: f64 = 25.0;
    /// 15 years and over, female: below this is SAM
    pub const ADULT_FEMALE_SEVERE_BELOW: f64 = 22.0;
    /// 15 years and over, female: below this is MAM
    pub const ADULT_FEMALE_MODERATE_BELOW: f64 = 24.0;

    /// Band boundary: 5 years
    pub const FIVE_YEARS: f64 = 5.0;
    /// Band boundary: 10 years
    pub const TEN_YEARS: f64 = 10.0;
    /// Band boundary: 15 years
    pub const FIFTEEN_YEARS: f64 = 15.0;
}
