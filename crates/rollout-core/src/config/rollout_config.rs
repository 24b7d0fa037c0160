//! Top-level rollout configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{LimitedConfig, ObservabilityConfig, TraversalConfig, TraversalOrder};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ROLLOUT_*`)
/// 2. Project config (`rollout.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RolloutConfig {
    pub traversal: TraversalConfig,
    pub limited: LimitedConfig,
    pub observability: ObservabilityConfig,
}

impl RolloutConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limited.max_rounds == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "limited.max_rounds".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(filter) = &self.observability.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RolloutConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: RolloutConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. Optional values override only when set.
    fn merge(base: &mut RolloutConfig, other: &RolloutConfig) {
        if other.traversal.order != TraversalOrder::default() {
            base.traversal.order = other.traversal.order;
        }
        if other.limited.max_rounds.is_some() {
            base.limited.max_rounds = other.limited.max_rounds;
        }
        if other.observability.log_filter.is_some() {
            base.observability.log_filter = other.observability.log_filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are logged and ignored.
    fn apply_env_overrides(config: &mut RolloutConfig) {
        if let Ok(val) = std::env::var("ROLLOUT_TRAVERSAL_ORDER") {
            match val.parse::<TraversalOrder>() {
                Ok(order) => config.traversal.order = order,
                Err(reason) => warn!(%reason, "ignoring ROLLOUT_TRAVERSAL_ORDER"),
            }
        }
        if let Ok(val) = std::env::var("ROLLOUT_LIMITED_MAX_ROUNDS") {
            match val.parse::<u32>() {
                Ok(v) => config.limited.max_rounds = Some(v),
                Err(e) => warn!(error = %e, "ignoring ROLLOUT_LIMITED_MAX_ROUNDS"),
            }
        }
        if let Ok(val) = std::env::var("ROLLOUT_LOG_FILTER") {
            config.observability.log_filter = Some(val);
        }
    }
}
