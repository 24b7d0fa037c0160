//! Data model shared across the workspace.

pub mod person;

pub use person::{Person, PersonId};
