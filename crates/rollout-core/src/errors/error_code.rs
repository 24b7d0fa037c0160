//! RolloutErrorCode trait: stable machine-readable error codes.

/// Trait for mapping rollout errors to a stable code string.
pub trait RolloutErrorCode {
    /// Returns the error code string (e.g., "CONFIG_PARSE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
