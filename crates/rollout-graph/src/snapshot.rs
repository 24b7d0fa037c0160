//! Serializable view of a [`UserGraph`] for diagnostics.

use serde::{Deserialize, Serialize};

use crate::user_graph::UserGraph;

/// One teacher and their classes, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherEntry {
    pub teacher: String,
    pub classes: Vec<Vec<String>>,
}

/// One connection index member and its neighbors, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEntry {
    pub person: String,
    pub neighbors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub person: String,
    pub infected: bool,
}

/// Point-in-time copy of the graph.
///
/// Teachers appear in registration order, members in the order they joined
/// the connection index, neighbors in ascending handle order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub teachers: Vec<TeacherEntry>,
    pub connections: Vec<ConnectionEntry>,
    pub versions: Vec<VersionEntry>,
    pub infected_count: usize,
}

impl GraphSnapshot {
    pub fn capture(graph: &UserGraph) -> Self {
        let people = graph.population();
        let classes = graph.class_graph();
        let connections = graph.connections();

        let teachers = classes
            .teachers()
            .iter()
            .map(|&teacher| TeacherEntry {
                teacher: people.name_of(teacher),
                classes: classes
                    .classes(teacher)
                    .iter()
                    .map(|class| class.iter().map(|&s| people.name_of(s)).collect())
                    .collect(),
            })
            .collect();

        let connection_entries = connections
            .members()
            .map(|person| ConnectionEntry {
                person: people.name_of(person),
                neighbors: connections
                    .neighbors(person)
                    .into_iter()
                    .map(|n| people.name_of(n))
                    .collect(),
            })
            .collect();

        let versions = connections
            .members()
            .map(|person| VersionEntry {
                person: people.name_of(person),
                infected: people.is_infected(person),
            })
            .collect();

        Self {
            teachers,
            connections: connection_entries,
            versions,
            infected_count: graph.count_infected(),
        }
    }
}
