//! Symmetric adjacency derived from class membership.

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Undirected;
use rollout_core::PersonId;
use rustc_hash::FxHashMap;

/// The underlying undirected graph type. Node weights are person handles.
pub type ConnectionGraph = StableGraph<PersonId, (), Undirected>;

/// Undirected "one relationship hop" index: teacher–student and
/// classmate–classmate.
///
/// Edges are undirected, so symmetry holds by construction. Parallel edges
/// and self-loops are never stored.
#[derive(Debug, Clone, Default)]
pub struct ConnectionIndex {
    graph: ConnectionGraph,
    node_index: FxHashMap<PersonId, NodeIndex>,
}

impl ConnectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for `person`.
    pub fn ensure_member(&mut self, person: PersonId) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&person) {
            return idx;
        }
        let idx = self.graph.add_node(person);
        self.node_index.insert(person, idx);
        idx
    }

    /// Connect two people. Returns `true` if a new edge was added.
    pub fn connect(&mut self, a: PersonId, b: PersonId) -> bool {
        let a_idx = self.ensure_member(a);
        let b_idx = self.ensure_member(b);
        if a_idx == b_idx || self.graph.find_edge(a_idx, b_idx).is_some() {
            return false;
        }
        self.graph.add_edge(a_idx, b_idx, ());
        true
    }

    /// Add the edges implied by one class: teacher to every student, and
    /// every pair of distinct students. Returns the number of new edges.
    pub fn connect_class(&mut self, teacher: PersonId, students: &[PersonId]) -> usize {
        self.ensure_member(teacher);
        let mut added = 0;
        for (i, &student) in students.iter().enumerate() {
            if self.connect(teacher, student) {
                added += 1;
            }
            for &classmate in &students[i + 1..] {
                if self.connect(student, classmate) {
                    added += 1;
                }
            }
        }
        added
    }

    pub fn contains(&self, person: PersonId) -> bool {
        self.node_index.contains_key(&person)
    }

    pub fn node(&self, person: PersonId) -> Option<NodeIndex> {
        self.node_index.get(&person).copied()
    }

    /// Direct neighbors of `person` in ascending handle order.
    pub fn neighbors(&self, person: PersonId) -> Vec<PersonId> {
        let Some(idx) = self.node(person) else {
            return Vec::new();
        };
        let mut neighbors: Vec<PersonId> = self
            .graph
            .neighbors(idx)
            .filter_map(|n| self.graph.node_weight(n).copied())
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    pub fn are_neighbors(&self, a: PersonId, b: PersonId) -> bool {
        match (self.node(a), self.node(b)) {
            (Some(a_idx), Some(b_idx)) => self.graph.find_edge(a_idx, b_idx).is_some(),
            _ => false,
        }
    }

    /// Members in the order they joined the index.
    pub fn members(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx).copied())
    }

    pub fn member_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Read access for traversals.
    pub fn graph(&self) -> &ConnectionGraph {
        &self.graph
    }
}
