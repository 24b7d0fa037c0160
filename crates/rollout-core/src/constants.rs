//! Workspace-wide constants.

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "ROLLOUT_LOG";

/// Filter used when neither `ROLLOUT_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "rollout=info";

/// Project-level configuration file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "rollout.toml";
