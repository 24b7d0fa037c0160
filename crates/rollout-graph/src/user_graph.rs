//! UserGraph: owns the population, the class graph, and the connection index.

use rollout_core::{Person, PersonId};
use tracing::debug;

use crate::class_graph::{Class, ClassGraph};
use crate::connections::ConnectionIndex;
use crate::population::Population;
use crate::snapshot::GraphSnapshot;

/// The population graph callers build and the infection engine mutates.
///
/// Every mutation keeps [`ClassGraph`] and [`ConnectionIndex`] in lockstep.
#[derive(Debug, Clone, Default)]
pub struct UserGraph {
    population: Population,
    classes: ClassGraph,
    connections: ConnectionIndex,
}

impl UserGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a person on the old version. The person joins the connection
    /// index once registered as a teacher or placed in a class.
    pub fn add_person(&mut self, name: impl Into<String>, id: impl Into<String>) -> PersonId {
        self.population.add(Person::new(name, id))
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.population.get(id)
    }

    /// Register `teacher` with an empty class list.
    ///
    /// Returns `true` iff the teacher was newly added; unknown handles are
    /// rejected.
    pub fn register_teacher(&mut self, teacher: PersonId) -> bool {
        if !self.population.contains(teacher) || !self.classes.register_teacher(teacher) {
            return false;
        }
        self.connections.ensure_member(teacher);
        debug!(teacher = %teacher, "teacher registered");
        true
    }

    /// Append a class under `teacher` and connect its members.
    ///
    /// Returns `false` with no mutation at all when the teacher is not
    /// registered or any student handle is unknown.
    pub fn add_class(&mut self, teacher: PersonId, students: impl Into<Class>) -> bool {
        let students = students.into();
        if !self.classes.is_teacher(teacher)
            || !students.iter().all(|&s| self.population.contains(s))
        {
            debug!(teacher = %teacher, "class rejected");
            return false;
        }
        let new_edges = self.connections.connect_class(teacher, &students);
        debug!(
            teacher = %teacher,
            students = students.len(),
            new_edges,
            "class added"
        );
        self.classes.add_class(teacher, students)
    }

    pub fn is_teacher(&self, person: PersonId) -> bool {
        self.classes.is_teacher(person)
    }

    pub fn is_infected(&self, person: PersonId) -> bool {
        self.population.is_infected(person)
    }

    /// Set one person's flag. Returns `true` only if it flipped.
    pub fn infect(&mut self, person: PersonId) -> bool {
        self.population.infect(person)
    }

    /// Number of infected people among the connection index members
    /// (registered teachers and every student placed in a class).
    pub fn count_infected(&self) -> usize {
        self.connections
            .members()
            .filter(|&p| self.population.is_infected(p))
            .count()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn class_graph(&self) -> &ClassGraph {
        &self.classes
    }

    pub fn connections(&self) -> &ConnectionIndex {
        &self.connections
    }

    /// Read the structure while mutating flags.
    pub fn parts_mut(&mut self) -> (&ClassGraph, &ConnectionIndex, &mut Population) {
        (&self.classes, &self.connections, &mut self.population)
    }

    /// Capture the current structure and flags for diagnostics.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::capture(self)
    }
}
