//! Observability for rollout.
//! `tracing` crate with `EnvFilter` and named spans per propagation policy.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
