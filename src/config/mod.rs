// ABOUTME: Configuration module for the classification engine
// ABOUTME: Environment-driven engine settings and their error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration
//!
//! Settings come from environment variables only:
//!
//! - `GROWTH_REFERENCE_TABLES`: path to an external table document
//! - `GROWTH_VALIDATE_TABLES`: validate tables at load time (default `true`)
//! - `GROWTH_PARALLEL_BATCH_MIN`: smallest batch classified in parallel (default 64)
//!
//! Logging has its own settings, see [`crate::logging::LoggingConfig`].

/// Engine settings and environment variable names
pub mod engine;
/// Configuration error type
pub mod error;

pub use engine::{
    EngineConfig, DEFAULT_PARALLEL_BATCH_MIN, PARALLEL_BATCH_MIN_ENV, REFERENCE_TABLES_ENV,
    VALIDATE_TABLES_ENV,
};
pub use error::ConfigError;
