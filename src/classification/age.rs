// ABOUTME: Free-text age descriptor parser producing the two-track AgeDetails value
// ABOUTME: Extracts year/month/week/day counts with case-insensitive regex patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Age parsing
//!
//! `"2 years 3 months"` becomes an [`AgeDetails`] with `months == 27` and
//! `years == 2.25`. Two representations are kept on purpose: `months` folds
//! years in and drives table lookups (0-71), while `years` is built from the
//! parsed year and month counts and drives BMI, MUAC and height band routing.

use growth_core::constants::age::{DAYS_PER_MONTH, DAYS_PER_WEEK, MONTHS_PER_YEAR};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Regex patterns for each age unit
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static YEARS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*year").ok());

static MONTHS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*month").ok());

static WEEKS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*week").ok());

static DAYS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*day").ok());

/// Structured age derived from a free-text descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeDetails {
    /// Days as written (not normalised)
    pub days: u32,
    /// Weeks as written (not normalised)
    pub weeks: u32,
    /// Total months: parsed months plus parsed years * 12
    pub months: u32,
    /// `days + weeks * 7 + months * 30.44`, rounded
    pub total_days: u32,
    /// Fractional years: parsed years plus parsed months / 12
    pub years: f64,
}

impl AgeDetails {
    /// Whole years, used by the linear height-for-age bands
    #[must_use]
    pub fn whole_years(&self) -> f64 {
        self.years.floor()
    }
}

/// Parse a free-text age descriptor
///
/// Takes the first integer in front of each of `year`, `month`, `week` and
/// `day` (case-insensitive, plural forms included). Missing or unparseable
/// units count as zero, so the function never fails.
#[must_use]
pub fn parse_age(text: &str) -> AgeDetails {
    let years = first_count(&YEARS_PATTERN, text);
    let months = first_count(&MONTHS_PATTERN, text);
    let weeks = first_count(&WEEKS_PATTERN, text);
    let days = first_count(&DAYS_PATTERN, text);

    let total_months = months.saturating_add(years.saturating_mul(MONTHS_PER_YEAR));
    let total_days = f64::from(total_months).mul_add(
        DAYS_PER_MONTH,
        f64::from(days) + f64::from(weeks) * f64::from(DAYS_PER_WEEK),
    );

    AgeDetails {
        days,
        weeks,
        months: total_months,
        total_days: total_days.round() as u32,
        years: f64::from(years) + f64::from(months) / f64::from(MONTHS_PER_YEAR),
    }
}

/// First integer captured by `pattern`, zero when absent
///
/// Captures are all digits, so the only parse failure is overflow, which
/// saturates at `u32::MAX`.
fn first_count(pattern: &LazyLock<Option<Regex>>, text: &str) -> u32 {
    pattern
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map_or(0, |m| m.as_str().parse().unwrap_or(u32::MAX))
}
