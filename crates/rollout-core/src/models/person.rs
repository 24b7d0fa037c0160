//! A person in the population and the handle used to address it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a person stored in a population arena.
///
/// Identity is the handle: two persons created with the same name and id are
/// still two distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(u32);

impl PersonId {
    /// Wrap an arena slot index.
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// The arena slot this handle points at.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A user of the site: a teacher, a student, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    id: String,
    /// Whether this person has been moved to the new version.
    infected: bool,
}

impl Person {
    /// Create a person on the old version.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            infected: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// External identifier label (not used for identity).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_infected(&self) -> bool {
        self.infected
    }

    /// Move this person to the new version.
    ///
    /// Returns `true` if the flag flipped, `false` if it was already set.
    /// The flag is never reset.
    pub fn infect(&mut self) -> bool {
        let newly = !self.infected;
        self.infected = true;
        newly
    }
}
