// ABOUTME: Configuration error types for engine settings loaded from the environment
// ABOUTME: Converts into AppError with configuration error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use growth_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value lies outside its accepted range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A required setting was left empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Reading an environment variable failed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::MissingField(_) => ErrorCode::ConfigMissing,
            ConfigError::InvalidRange(_) | ConfigError::Parse(_) => ErrorCode::ConfigInvalid,
            ConfigError::EnvVar(_) => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
