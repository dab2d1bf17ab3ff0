//! Top-level LinkMind configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, PolicyConfig, StorageConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LINKMIND_*`)
/// 2. Config file (`linkmind.toml` or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LinkMindConfig {
    pub policy: PolicyConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl LinkMindConfig {
    /// Load configuration from a TOML file, then apply environment overrides
    /// and validate. A missing file yields the compiled defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Apply environment variable overrides through `lookup`.
    /// Unparseable values are ignored and the lower layer wins.
    pub fn apply_env_overrides<F>(config: &mut Self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LINKMIND_PROBATION_DAYS").and_then(|s| s.parse::<u32>().ok()) {
            config.policy.probation_days = v;
        }
        if let Some(v) = lookup("LINKMIND_SAFETY_MARGIN").and_then(|s| s.parse::<f64>().ok()) {
            config.policy.safety_margin = v;
        }
        if let Some(v) = lookup("LINKMIND_DB_PATH") {
            config.storage.db_path = v;
        }
        if let Some(v) = lookup("LINKMIND_LOG") {
            config.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &Self) -> Result<(), ConfigError> {
        let policy = &config.policy;
        if policy.probation_days == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.probation_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !policy.safety_margin.is_finite() || policy.safety_margin <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.safety_margin".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }
        let costs = [
            ("policy.costs.license_mbps", policy.costs.license_mbps),
            ("policy.costs.bw_mhz", policy.costs.bw_mhz),
            (
                "policy.costs.zombie_power_savings",
                policy.costs.zombie_power_savings,
            ),
        ];
        for (field, value) in costs {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a non-negative finite number".to_string(),
                });
            }
        }
        if config.storage.db_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "storage.db_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
