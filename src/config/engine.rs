// ABOUTME: Engine configuration loaded from environment variables
// ABOUTME: Reference table source, load-time validation switch and batch parallelism threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Path to an external reference table document
pub const REFERENCE_TABLES_ENV: &str = "GROWTH_REFERENCE_TABLES";
/// Whether reference tables are validated when loaded
pub const VALIDATE_TABLES_ENV: &str = "GROWTH_VALIDATE_TABLES";
/// Smallest batch classified in parallel
pub const PARALLEL_BATCH_MIN_ENV: &str = "GROWTH_PARALLEL_BATCH_MIN";

/// Default smallest batch classified in parallel
pub const DEFAULT_PARALLEL_BATCH_MIN: usize = 64;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Classification engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// External table document; the bundled WHO tables are used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_tables_path: Option<PathBuf>,
    /// Reject documents whose rows break table invariants
    #[serde(default = "default_validate_tables")]
    pub validate_tables: bool,
    /// Batches at least this large are classified with rayon
    #[serde(default = "default_parallel_batch_min")]
    pub parallel_batch_min: usize,
}

const fn default_validate_tables() -> bool {
    true
}

const fn default_parallel_batch_min() -> usize {
    DEFAULT_PARALLEL_BATCH_MIN
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_tables_path: None,
            validate_tables: default_validate_tables(),
            parallel_batch_min: default_parallel_batch_min(),
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables are not valid UTF-8, contain
    /// invalid values, or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the batch threshold is zero or the table path is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel_batch_min == 0 {
            return Err(ConfigError::InvalidRange(
                "parallel_batch_min must be at least 1",
            ));
        }

        if self
            .reference_tables_path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(ConfigError::MissingField("reference_tables_path"));
        }

        Ok(())
    }

    /// Read an environment variable; unset is `None`, non-UTF-8 is an error
    fn read_env(env_var_name: &str) -> Result<Option<String>, ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => Ok(Some(val)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Some(val) = Self::read_env(env_var_name)? {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(path) = Self::read_env(REFERENCE_TABLES_ENV)? {
            let path = path.trim();
            self.reference_tables_path = (!path.is_empty()).then(|| PathBuf::from(path));
        }

        if let Some(raw) = Self::read_env(VALIDATE_TABLES_ENV)? {
            self.validate_tables = parse_flag(&raw)
                .ok_or_else(|| ConfigError::Parse(format!("Invalid {VALIDATE_TABLES_ENV}")))?;
        }

        Self::apply_env_var(PARALLEL_BATCH_MIN_ENV, &mut self.parallel_batch_min)?;

        Ok(self)
    }
}

/// Accepts `true/false`, `1/0`, `yes/no` and `on/off`, case-insensitively
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.validate_tables);
        assert_eq!(config.parallel_batch_min, DEFAULT_PARALLEL_BATCH_MIN);
    }

    #[test]
    fn test_flag_spellings() {
        assert_eq!(parse_flag(" Yes "), Some(true));
        assert_eq!(parse_flag("OFF"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
