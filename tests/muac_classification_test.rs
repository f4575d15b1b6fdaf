// ABOUTME: Integration tests for MUAC-based acute malnutrition classification
// ABOUTME: Covers every age band, gender-split cutoffs and unusable MUAC values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{fixture_engine, measurement};
use growth_status::classification::{classify_muac, MuacBand};
use growth_status::models::{Gender, MuacStatus};
use growth_status::parse_age;

fn muac(age: &str, value: f64, gender: Gender) -> Option<MuacStatus> {
    classify_muac(Some(value), parse_age(age).years, gender)
}

#[test]
fn test_under_five_cutoffs() {
    assert_eq!(
        muac("3 years", 11.4, Gender::Male),
        Some(MuacStatus::SevereAcuteMalnutrition)
    );
    assert_eq!(
        muac("3 years", 11.5, Gender::Male),
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
    assert_eq!(
        muac("3 years", 12.4, Gender::Female),
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
    assert_eq!(muac("3 years", 12.5, Gender::Female), Some(MuacStatus::Normal));
}

#[test]
fn test_band_changes_at_five_years() {
    assert_eq!(
        muac("4 years 11 months", 11.6, Gender::Male),
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
    assert_eq!(
        muac("5 years", 11.6, Gender::Male),
        Some(MuacStatus::SevereAcuteMalnutrition)
    );
    assert_eq!(
        muac("7 years", 13.5, Gender::Female),
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
    assert_eq!(muac("7 years", 14.5, Gender::Female), Some(MuacStatus::Normal));
}

#[test]
fn test_ten_to_fifteen_splits_by_gender() {
    assert_eq!(
        muac("12 years", 15.0, Gender::Male),
        Some(MuacStatus::SevereAcuteMalnutrition)
    );
    assert_eq!(
        muac("12 years", 15.0, Gender::Female),
        Some(MuacStatus::SevereAcuteMalnutrition)
    );
    assert_eq!(
        muac("12 years", 16.0, Gender::Male),
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
    assert_eq!(
        muac("12 years", 16.0, Gender::Female),
        Some(MuacStatus::SevereAcuteMalnutrition)
    );
    assert_eq!(muac("12 years", 16.5, Gender::Male), Some(MuacStatus::Normal));
    assert_eq!(
        muac("12 years", 17.0, Gender::Female),
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
}

#[test]
fn test_fifteen_and_over_splits_by_gender() {
    assert_eq!(
        muac("30 years", 22.9, Gender::Male),
        Some(MuacStatus::SevereAcuteMalnutrition)
    );
    assert_eq!(
        muac("30 years", 23.0, Gender::Male),
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
    assert_eq!(
        muac("30 years", 22.0, Gender::Female),
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
    assert_eq!(muac("15 years", 24.0, Gender::Female), Some(MuacStatus::Normal));
    assert_eq!(
        muac("15 years", 24.0, Gender::Male),
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
}

#[test]
fn test_cutoffs_by_band() {
    let cutoffs = MuacBand::TenToFifteen.cutoffs(Gender::Female);
    assert!((cutoffs.severe_below - 16.5).abs() < f64::EPSILON);
    assert!((cutoffs.moderate_below - 17.5).abs() < f64::EPSILON);
    assert_eq!(
        MuacBand::UnderFive.cutoffs(Gender::Male),
        MuacBand::UnderFive.cutoffs(Gender::Female)
    );
}

#[test]
fn test_unusable_values_are_not_classified() {
    assert_eq!(classify_muac(None, 2.0, Gender::Male), None);
    assert_eq!(muac("2 years", 0.0, Gender::Male), None);
    assert_eq!(muac("2 years", f64::INFINITY, Gender::Male), None);
}

#[test]
fn test_negative_values_are_classified_as_severe() {
    assert_eq!(
        muac("2 years", -11.0, Gender::Male),
        Some(MuacStatus::SevereAcuteMalnutrition)
    );
    assert_eq!(
        muac("20 years", -0.5, Gender::Female),
        Some(MuacStatus::SevereAcuteMalnutrition)
    );
}

#[test]
fn test_engine_echoes_muac_and_ignores_other_measurements() {
    let engine = fixture_engine();

    let status = engine.classify(&measurement("2 years", None, None, Some(12.0), Gender::Male));
    assert_eq!(status.muac, Some(12.0));
    assert_eq!(
        status.muac_status,
        Some(MuacStatus::ModerateAcuteMalnutrition)
    );
    assert_eq!(status.wfa, None);

    let status = engine.classify(&measurement("2 years", None, None, Some(0.0), Gender::Male));
    assert_eq!(status.muac, Some(0.0));
    assert_eq!(status.muac_status, None);
}
