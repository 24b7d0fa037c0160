//! # rollout-core
//!
//! Foundation crate for the rollout engine.
//! Defines the person model, configuration, errors, events, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{RolloutConfig, TraversalOrder};
pub use errors::{ConfigError, RolloutErrorCode};
pub use events::{EventDispatcher, InfectionEventHandler, SelectionKind};
pub use models::{Person, PersonId};
