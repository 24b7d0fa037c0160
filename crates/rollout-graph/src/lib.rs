//! # rollout-graph
//!
//! In-memory population graph. Persons live in an arena ([`Population`]);
//! teachers own ordered classes ([`ClassGraph`]); a symmetric adjacency
//! ([`ConnectionIndex`]) is kept in lockstep for reachability queries.
//! [`UserGraph`] ties the three together and is the population API.

pub mod class_graph;
pub mod connections;
pub mod population;
pub mod render;
pub mod snapshot;
pub mod user_graph;

pub use class_graph::{Class, ClassGraph};
pub use connections::{ConnectionGraph, ConnectionIndex};
pub use population::Population;
pub use snapshot::GraphSnapshot;
pub use user_graph::UserGraph;
