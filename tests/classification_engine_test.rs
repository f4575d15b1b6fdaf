// ABOUTME: Integration tests for the classification engine orchestrator
// ABOUTME: Covers totality, 71/72 month routing, adults, table snapshots, batches and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{bundled_engine, fixture_engine, fixture_tables, measurement};
use growth_status::classification::BmiLadder;
use growth_status::models::{
    Gender, HeightForAge, MeasurementInput, MuacStatus, NutritionalStatus, WeightCategory,
    WeightForHeight,
};
use growth_status::reference::ReferenceTables;
use growth_status::{classify, classify_with, ClassificationEngine};
use std::sync::Arc;

#[test]
fn test_empty_input_yields_empty_status() {
    let engine = fixture_engine();
    let status = engine.classify(&MeasurementInput::default());

    assert!(status.is_empty());
    assert_eq!(status.muac, None);
}

#[test]
fn test_indicators_only_need_their_own_inputs() {
    let engine = fixture_engine();

    let weight_only =
        engine.classify(&measurement("12 months", Some(9.0), None, None, Gender::Male));
    assert_eq!(weight_only.wfa, Some(WeightCategory::Normal));
    assert_eq!(weight_only.lhfa, None);
    assert_eq!(weight_only.wfh, None);
    assert_eq!(weight_only.muac_status, None);

    let height_only =
        engine.classify(&measurement("12 months", None, Some(75.0), None, Gender::Male));
    assert_eq!(height_only.wfa, None);
    assert_eq!(height_only.lhfa, Some(HeightForAge::Normal));
    assert_eq!(height_only.wfh, None);
}

#[test]
fn test_non_finite_measurements_are_treated_as_absent() {
    let engine = fixture_engine();
    let status = engine.classify(&measurement(
        "12 months",
        Some(f64::NAN),
        Some(f64::INFINITY),
        None,
        Gender::Male,
    ));
    assert!(status.is_empty());
}

#[test]
fn test_classification_is_repeatable() {
    let engine = bundled_engine();
    let input = measurement("2 years 3 months", Some(12.1), Some(86.0), Some(14.2), Gender::Female);

    assert_eq!(engine.classify(&input), engine.classify(&input));
}

#[test]
fn test_71_months_uses_tables_and_72_months_uses_bmi() {
    let engine = fixture_engine();

    let at_71 =
        engine.classify(&measurement("71 months", Some(27.0), Some(110.0), None, Gender::Male));
    assert_eq!(at_71.wfa, Some(WeightCategory::Overweight));
    assert_eq!(at_71.lhfa, Some(HeightForAge::Normal));
    // no 110 cm row in the fixture tables
    assert_eq!(at_71.wfh, Some(WeightForHeight::Bmi(WeightCategory::Normal)));

    let at_72 =
        engine.classify(&measurement("72 months", Some(27.0), Some(110.0), None, Gender::Male));
    assert_eq!(at_72.wfa, Some(WeightCategory::Normal));
    assert_eq!(at_72.lhfa, Some(HeightForAge::Stunted));
    assert_eq!(at_72.wfh, Some(WeightForHeight::Bmi(WeightCategory::Normal)));
}

#[test]
fn test_adult_measurements() {
    let engine = fixture_engine();
    let status =
        engine.classify(&measurement("25 years", Some(45.0), Some(160.0), None, Gender::Male));

    assert_eq!(status.wfa, Some(WeightCategory::MildlyUnderweight));
    assert_eq!(status.lhfa, Some(HeightForAge::NotApplicable));
    assert_eq!(
        status.wfh,
        Some(WeightForHeight::Bmi(WeightCategory::MildlyUnderweight))
    );
    assert_eq!(status.muac_status, None);
}

#[test]
fn test_overflowing_age_stays_in_the_adult_band() {
    let engine = fixture_engine();
    let status = engine.classify(&measurement(
        "99999999999 years",
        Some(60.0),
        Some(150.0),
        None,
        Gender::Female,
    ));

    assert_eq!(status.wfa, Some(WeightCategory::Overweight));
    assert_eq!(status.lhfa, Some(HeightForAge::NotApplicable));
    assert_eq!(
        status.wfh,
        Some(WeightForHeight::Bmi(WeightCategory::Overweight))
    );
}

#[test]
fn test_unparseable_age_is_treated_as_newborn() {
    let input = measurement("", Some(10.0), Some(80.0), None, Gender::Male);

    // fixture tables have no month 0 rows
    let sparse = fixture_engine().classify(&input);
    assert_eq!(sparse.wfa, None);
    assert_eq!(sparse.lhfa, None);
    assert_eq!(sparse.wfh, Some(WeightForHeight::Normal));

    let full = bundled_engine().classify(&input);
    assert_eq!(full.wfa, Some(WeightCategory::Overweight));
    assert_eq!(full.lhfa, Some(HeightForAge::Tall));
}

#[test]
fn test_bundled_tables_classify_a_typical_toddler() {
    let engine = bundled_engine();
    let input = measurement("2 years 3 months", Some(12.1), Some(86.0), Some(14.2), Gender::Female);

    assert_eq!(
        engine.classify(&input),
        NutritionalStatus {
            wfa: Some(WeightCategory::Normal),
            lhfa: Some(HeightForAge::Normal),
            wfh: Some(WeightForHeight::Normal),
            muac: Some(14.2),
            muac_status: Some(MuacStatus::Normal),
        }
    );
}

#[test]
fn test_process_wide_classify_uses_bundled_tables() {
    let input = measurement("2 years 3 months", Some(12.1), Some(86.0), Some(14.2), Gender::Female);
    let tables = ReferenceTables::bundled().unwrap();

    assert_eq!(classify(&input), classify_with(&tables, &input));
}

#[test]
fn test_replacing_tables_affects_later_calls_only() {
    let engine = fixture_engine();
    let input = measurement("13 months", Some(9.0), Some(76.0), None, Gender::Male);
    assert_eq!(engine.classify(&input).wfa, None);

    let captured = engine.tables().snapshot();
    let previous = engine.replace_tables(Arc::new(ReferenceTables::bundled().unwrap()));
    assert!(engine.classify(&input).wfa.is_some());
    assert_eq!(classify_with(captured.as_ref(), &input).wfa, None);

    // the old snapshot is still usable by whoever holds it
    assert!(previous.weight_for_age(Gender::Male, 12).is_some());
    assert!(previous.weight_for_age(Gender::Male, 13).is_none());
}

#[test]
fn test_batch_preserves_order_on_both_paths() {
    let inputs: Vec<MeasurementInput> = (0..200)
        .map(|i| {
            let months = i % 90;
            measurement(
                &format!("{months} months"),
                Some(f64::from(i % 25).mul_add(0.5, 6.0)),
                Some(f64::from(i % 60).mul_add(1.0, 65.0)),
                Some(f64::from(i % 10).mul_add(0.5, 10.0)),
                if i % 2 == 0 { Gender::Male } else { Gender::Female },
            )
        })
        .collect();

    let sequential = ClassificationEngine::new(Arc::new(ReferenceTables::bundled().unwrap()))
        .with_parallel_batch_min(usize::MAX);
    let parallel = ClassificationEngine::new(Arc::new(ReferenceTables::bundled().unwrap()))
        .with_parallel_batch_min(1);

    let expected: Vec<NutritionalStatus> =
        inputs.iter().map(|input| sequential.classify(input)).collect();
    assert_eq!(sequential.classify_batch(&inputs), expected);
    assert_eq!(parallel.classify_batch(&inputs), expected);
    assert!(parallel.classify_batch(&[]).is_empty());
}

#[test]
fn test_batch_threshold_is_at_least_one() {
    let engine = fixture_engine().with_parallel_batch_min(0);
    assert_eq!(engine.parallel_batch_min(), 1);
}

#[test]
fn test_detailed_report_includes_bmi_and_ladder() {
    let engine = fixture_engine();
    let input = measurement("25 years", Some(45.0), Some(160.0), None, Gender::Female);
    let report = engine.classify_detailed(&input);

    assert!((report.bmi.unwrap() - 17.578).abs() < 1e-3);
    assert_eq!(report.bmi_ladder, BmiLadder::Adult);
    assert_eq!(report.age.months, 300);
    assert_eq!(report.status.wfa, Some(WeightCategory::MildlyUnderweight));

    let report =
        engine.classify_detailed(&measurement("3 years", Some(14.0), None, None, Gender::Male));
    assert_eq!(report.bmi, None);
    assert_eq!(report.bmi_ladder, BmiLadder::Pediatric);
}

#[test]
fn test_status_serializes_to_short_codes() {
    let engine = fixture_engine();
    let input = measurement("25 years", Some(45.0), Some(160.0), Some(21.0), Gender::Female);
    let status = engine.classify(&input);
    let json = serde_json::to_value(status).unwrap();

    assert_eq!(json["wfa"], "MUW");
    assert_eq!(json["lhfa"], "N/A");
    assert_eq!(json["wfh"], "MUW");
    assert_eq!(json["muac"], 21.0);
    assert_eq!(json["muac_status"], "SAM");

    let empty = serde_json::to_value(engine.classify(&MeasurementInput::new("3 years"))).unwrap();
    assert_eq!(empty["wfa"], "");
    assert_eq!(empty["muac_status"], "");
}

#[test]
fn test_engine_from_tables_snapshot() {
    let engine = ClassificationEngine::new(Arc::new(fixture_tables()));
    let status =
        engine.classify(&measurement("12 months", Some(14.0), Some(80.0), None, Gender::Male));
    assert_eq!(status.wfh, Some(WeightForHeight::Obese));
}
