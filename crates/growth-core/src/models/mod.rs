// ABOUTME: Core data models for growth and nutritional status classification
// ABOUTME: Re-exports MeasurementInput, Gender, TableFamily and the indicator status enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `MeasurementInput`: one set of anthropometric measurements to classify
//! - `Gender`: selects the gender-specific reference tables and cutoffs
//! - `TableFamily`: the three WHO reference table families
//! - Status enums: one closed set of codes per indicator
//! - `NutritionalStatus`: the composite result, one field per indicator

mod measurement;
mod reference;
mod status;

pub use measurement::{Gender, MeasurementInput};
pub use reference::TableFamily;
pub use status::{
    HeightForAge, MuacStatus, NutritionalStatus, StatusCode, WeightCategory, WeightForHeight,
};
