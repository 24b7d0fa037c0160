//! Error handling for rollout.
//! One error enum per subsystem, `thiserror` only.
//!
//! Graph mutations and propagation report failure through boolean returns and
//! silent no-ops; only configuration loading has a real error path.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::RolloutErrorCode;
