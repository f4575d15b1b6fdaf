// ABOUTME: Mid-upper-arm circumference classifier for acute malnutrition
// ABOUTME: Age-banded SAM/MAM cutoffs, gender-split from 10 years
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use growth_core::constants::muac::{
    ADULT_FEMALE_MODERATE_BELOW, ADULT_FEMALE_SEVERE_BELOW, ADULT_MALE_MODERATE_BELOW,
    ADULT_MALE_SEVERE_BELOW, FIFTEEN_YEARS, FIVE_TO_TEN_MODERATE_BELOW, FIVE_TO_TEN_SEVERE_BELOW,
    FIVE_YEARS, TEN_TO_FIFTEEN_FEMALE_MODERATE_BELOW, TEN_TO_FIFTEEN_FEMALE_SEVERE_BELOW,
    TEN_TO_FIFTEEN_MALE_MODERATE_BELOW, TEN_TO_FIFTEEN_MALE_SEVERE_BELOW, TEN_YEARS,
    UNDER_FIVE_MODERATE_BELOW, UNDER_FIVE_SEVERE_BELOW,
};
use growth_core::models::{Gender, MuacStatus};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Age band with its own MUAC cutoffs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuacBand {
    /// Under 5 years
    UnderFive,
    /// 5 to under 10 years
    FiveToTen,
    /// 10 to under 15 years
    TenToFifteen,
    /// 15 years and over
    FifteenAndOver,
}

impl MuacBand {
    /// Band for an age in fractional years
    #[must_use]
    pub fn for_age(age_years: f64) -> Self {
        if age_years < FIVE_YEARS {
            Self::UnderFive
        } else if age_years < TEN_YEARS {
            Self::FiveToTen
        } else if age_years < FIFTEEN_YEARS {
            Self::TenToFifteen
        } else {
            Self::FifteenAndOver
        }
    }

    /// Cutoffs for this band; bands from 10 years differ by gender
    #[must_use]
    pub const fn cutoffs(self, gender: Gender) -> MuacCutoffs {
        let (severe_below, moderate_below) = match (self, gender) {
            (Self::UnderFive, _) => (UNDER_FIVE_SEVERE_BELOW, UNDER_FIVE_MODERATE_BELOW),
            (Self::FiveToTen, _) => (FIVE_TO_TEN_SEVERE_BELOW, FIVE_TO_TEN_MODERATE_BELOW),
            (Self::TenToFifteen, Gender::Male) => (
                TEN_TO_FIFTEEN_MALE_SEVERE_BELOW,
                TEN_TO_FIFTEEN_MALE_MODERATE_BELOW,
            ),
            (Self::TenToFifteen, Gender::Female) => (
                TEN_TO_FIFTEEN_FEMALE_SEVERE_BELOW,
                TEN_TO_FIFTEEN_FEMALE_MODERATE_BELOW,
            ),
            (Self::FifteenAndOver, Gender::Male) => {
                (ADULT_MALE_SEVERE_BELOW, ADULT_MALE_MODERATE_BELOW)
            }
            (Self::FifteenAndOver, Gender::Female) => {
                (ADULT_FEMALE_SEVERE_BELOW, ADULT_FEMALE_MODERATE_BELOW)
            }
        };
        MuacCutoffs {
            severe_below,
            moderate_below,
        }
    }

    /// Get band name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UnderFive => "under_five",
            Self::FiveToTen => "five_to_ten",
            Self::TenToFifteen => "ten_to_fifteen",
            Self::FifteenAndOver => "fifteen_and_over",
        }
    }
}

/// SAM and MAM cutoffs (strict upper bounds, cm)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuacCutoffs {
    /// Below this: severe acute malnutrition
    pub severe_below: f64,
    /// Below this: moderate acute malnutrition
    pub moderate_below: f64,
}

impl MuacCutoffs {
    /// Status for a MUAC value
    #[must_use]
    pub fn classify(self, muac_cm: f64) -> MuacStatus {
        if muac_cm < self.severe_below {
            MuacStatus::SevereAcuteMalnutrition
        } else if muac_cm < self.moderate_below {
            MuacStatus::ModerateAcuteMalnutrition
        } else {
            MuacStatus::Normal
        }
    }
}

/// MUAC status
///
/// Absent, zero and non-finite MUAC values are not classified. Negative
/// values are classified like any other reading and land in SAM.
#[must_use]
pub fn classify_muac(muac_cm: Option<f64>, age_years: f64, gender: Gender) -> Option<MuacStatus> {
    let muac = muac_cm.filter(|value| value.is_finite() && value.abs() > 0.0)?;
    let band = MuacBand::for_age(age_years);
    let status = band.cutoffs(gender).classify(muac);
    trace!(band = band.name(), muac, ?status, "classified MUAC");
    Some(status)
}
