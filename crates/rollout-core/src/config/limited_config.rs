//! Limited-infection configuration.

use serde::{Deserialize, Serialize};

/// Configuration for limited infection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitedConfig {
    /// Upper bound on heuristic-selected rounds after the starting class.
    /// Unset means the loop runs until the target is met or no teacher is eligible.
    pub max_rounds: Option<u32>,
}

impl LimitedConfig {
    /// Returns the effective round cap, `u32::MAX` when unset.
    pub fn effective_max_rounds(&self) -> u32 {
        self.max_rounds.unwrap_or(u32::MAX)
    }
}
