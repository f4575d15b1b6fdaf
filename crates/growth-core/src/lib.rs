// ABOUTME: Core types and constants for the growth status classification engine
// ABOUTME: Foundation crate with error handling, domain models, and clinical cutoff constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Growth Core
//!
//! Foundation crate providing the shared types and constants for the growth and
//! nutritional status classification engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `TableError`
//! - **models**: Measurement input, gender, reference table families and status enums
//! - **constants**: Age bands, BMI ladders, MUAC and height-for-age cutoffs

/// Unified error handling system with standard error codes
pub mod errors;

/// Clinical cutoff constants organized by indicator
pub mod constants;

/// Core data models (`MeasurementInput`, `Gender`, status enums, `NutritionalStatus`)
pub mod models;
