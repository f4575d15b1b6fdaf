// ABOUTME: Closed status enums for each growth indicator and the composite NutritionalStatus
// ABOUTME: Statuses serialize to their short clinical codes; "not computed" serializes as ""
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short clinical code and human-readable label for a status value
pub trait StatusCode: Copy + Sized {
    /// Short code as exchanged with presenters (`"SUW"`, `"N/A"`, ...)
    fn code(self) -> &'static str;

    /// Glossary name (`"Severely Underweight"`, ...)
    fn label(self) -> &'static str;

    /// Parse a short code, `None` when unknown
    fn from_code(code: &str) -> Option<Self>;
}

/// Weight categories produced by the weight-for-age tables and by both BMI ladders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightCategory {
    /// SUW
    SeverelyUnderweight,
    /// UW
    Underweight,
    /// MUW (BMI ladders only)
    MildlyUnderweight,
    /// N
    Normal,
    /// OW
    Overweight,
    /// OB (pediatric BMI ladder)
    Obese,
    /// OB1 (adult BMI ladder)
    ObeseClass1,
    /// OB2 (adult BMI ladder)
    ObeseClass2,
    /// OB3 (adult BMI ladder)
    ObeseClass3,
}

impl StatusCode for WeightCategory {
    fn code(self) -> &'static str {
        match self {
            Self::SeverelyUnderweight => "SUW",
            Self::Underweight => "UW",
            Self::MildlyUnderweight => "MUW",
            Self::Normal => "N",
            Self::Overweight => "OW",
            Self::Obese => "OB",
            Self::ObeseClass1 => "OB1",
            Self::ObeseClass2 => "OB2",
            Self::ObeseClass3 => "OB3",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::SeverelyUnderweight => "Severely Underweight",
            Self::Underweight => "Underweight",
            Self::MildlyUnderweight => "Mildly Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
            Self::ObeseClass1 => "Obese Class I",
            Self::ObeseClass2 => "Obese Class II",
            Self::ObeseClass3 => "Obese Class III",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "SUW" => Some(Self::SeverelyUnderweight),
            "UW" => Some(Self::Underweight),
            "MUW" => Some(Self::MildlyUnderweight),
            "N" => Some(Self::Normal),
            "OW" => Some(Self::Overweight),
            "OB" => Some(Self::Obese),
            "OB1" => Some(Self::ObeseClass1),
            "OB2" => Some(Self::ObeseClass2),
            "OB3" => Some(Self::ObeseClass3),
            _ => None,
        }
    }
}

/// Length/height-for-age status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeightForAge {
    /// SST
    SeverelyStunted,
    /// ST
    Stunted,
    /// N
    Normal,
    /// T
    Tall,
    /// N/A, height-for-age is not assessed for adults
    NotApplicable,
}

impl StatusCode for HeightForAge {
    fn code(self) -> &'static str {
        match self {
            Self::SeverelyStunted => "SST",
            Self::Stunted => "ST",
            Self::Normal => "N",
            Self::Tall => "T",
            Self::NotApplicable => "N/A",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::SeverelyStunted => "Severely Stunted",
            Self::Stunted => "Stunted",
            Self::Normal => "Normal",
            Self::Tall => "Tall",
            Self::NotApplicable => "Not Applicable",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "SST" => Some(Self::SeverelyStunted),
            "ST" => Some(Self::Stunted),
            "N" => Some(Self::Normal),
            "T" => Some(Self::Tall),
            "N/A" => Some(Self::NotApplicable),
            _ => None,
        }
    }
}

/// Weight-for-height status
///
/// Table rows yield the wasting/overweight categories; when no row applies the
/// indicator falls back to a BMI ladder and carries that category instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightForHeight {
    /// SW
    SeverelyWasted,
    /// W
    Wasted,
    /// N
    Normal,
    /// OW
    Overweight,
    /// OB
    Obese,
    /// BMI ladder fallback
    Bmi(WeightCategory),
}

impl StatusCode for WeightForHeight {
    fn code(self) -> &'static str {
        match self {
            Self::SeverelyWasted => "SW",
            Self::Wasted => "W",
            Self::Normal => "N",
            Self::Overweight => "OW",
            Self::Obese => "OB",
            Self::Bmi(category) => category.code(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::SeverelyWasted => "Severely Wasted",
            Self::Wasted => "Wasted",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
            Self::Bmi(category) => category.label(),
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "SW" => Some(Self::SeverelyWasted),
            "W" => Some(Self::Wasted),
            "N" => Some(Self::Normal),
            "OW" => Some(Self::Overweight),
            "OB" => Some(Self::Obese),
            other => WeightCategory::from_code(other).map(Self::Bmi),
        }
    }
}

/// MUAC-based acute malnutrition status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuacStatus {
    /// SAM
    SevereAcuteMalnutrition,
    /// MAM
    ModerateAcuteMalnutrition,
    /// N
    Normal,
}

impl StatusCode for MuacStatus {
    fn code(self) -> &'static str {
        match self {
            Self::SevereAcuteMalnutrition => "SAM",
            Self::ModerateAcuteMalnutrition => "MAM",
            Self::Normal => "N",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::SevereAcuteMalnutrition => "Severe Acute Malnutrition",
            Self::ModerateAcuteMalnutrition => "Moderate Acute Malnutrition",
            Self::Normal => "Normal",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "SAM" => Some(Self::SevereAcuteMalnutrition),
            "MAM" => Some(Self::ModerateAcuteMalnutrition),
            "N" => Some(Self::Normal),
            _ => None,
        }
    }
}

/// Serde, `Display` and `FromStr` through the short status code
macro_rules! impl_status_code_traits {
    ($($status:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $status {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.code())
                }
            }

            impl FromStr for $status {
                type Err = AppError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::from_code(s.trim()).ok_or_else(|| {
                        AppError::invalid_input(format!(
                            "Unknown {} code '{s}'",
                            stringify!($status)
                        ))
                    })
                }
            }

            impl Serialize for $status {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.code())
                }
            }

            impl<'de> Deserialize<'de> for $status {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let raw = String::deserialize(deserializer)?;
                    Self::from_code(&raw)
                        .ok_or_else(|| de::Error::custom(format!("unknown status code '{raw}'")))
                }
            }
        )+
    };
}

impl_status_code_traits!(WeightCategory, HeightForAge, WeightForHeight, MuacStatus);

/// Composite classification result
///
/// `None` means the indicator was not computed (missing inputs or no
/// applicable strategy) and serializes as an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalStatus {
    /// Weight-for-age (or BMI above 71 months)
    #[serde(default, with = "optional_code")]
    pub wfa: Option<WeightCategory>,
    /// Length/height-for-age
    #[serde(default, with = "optional_code")]
    pub lhfa: Option<HeightForAge>,
    /// Weight-for-height (or BMI fallback)
    #[serde(default, with = "optional_code")]
    pub wfh: Option<WeightForHeight>,
    /// MUAC echoed from the input (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muac: Option<f64>,
    /// MUAC-based acute malnutrition status
    #[serde(default, with = "optional_code")]
    pub muac_status: Option<MuacStatus>,
}

impl NutritionalStatus {
    /// True when no indicator could be computed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.wfa.is_none()
            && self.lhfa.is_none()
            && self.wfh.is_none()
            && self.muac_status.is_none()
    }
}

/// `Option<status>` <-> `""` / code
mod optional_code {
    use super::StatusCode;
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::Deserialize;

    #[allow(clippy::ref_option)] // serde `with` passes the field by reference
    pub fn serialize<S: Serializer, T: StatusCode>(
        value: &Option<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map_or("", StatusCode::code))
    }

    pub fn deserialize<'de, D: Deserializer<'de>, T: StatusCode>(
        deserializer: D,
    ) -> Result<Option<T>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        T::from_code(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unknown status code '{raw}'")))
    }
}
