//! Configuration system for rollout.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod limited_config;
pub mod observability_config;
pub mod rollout_config;
pub mod traversal_config;

pub use limited_config::LimitedConfig;
pub use observability_config::ObservabilityConfig;
pub use rollout_config::RolloutConfig;
pub use traversal_config::{TraversalConfig, TraversalOrder};
