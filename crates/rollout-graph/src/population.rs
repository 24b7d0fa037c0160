//! Arena of persons addressed by [`PersonId`].

use rollout_core::{Person, PersonId};

/// Owns every person created for a graph. Slots are never removed, so a
/// handle stays valid for the life of the population.
#[derive(Debug, Clone, Default)]
pub struct Population {
    people: Vec<Person>,
}

impl Population {
    pub fn new() -> Self {
        Self { people: Vec::new() }
    }

    /// Store a person and return its handle.
    pub fn add(&mut self, person: Person) -> PersonId {
        let id = PersonId::new(self.people.len());
        self.people.push(person);
        id
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.index())
    }

    pub fn contains(&self, id: PersonId) -> bool {
        id.index() < self.people.len()
    }

    /// Unknown handles read as uninfected.
    pub fn is_infected(&self, id: PersonId) -> bool {
        self.get(id).is_some_and(Person::is_infected)
    }

    /// Set the flag. Returns `true` only if it flipped.
    pub fn infect(&mut self, id: PersonId) -> bool {
        self.people
            .get_mut(id.index())
            .is_some_and(|person| person.infect())
    }

    /// First person created with the given external id label.
    pub fn find_by_id(&self, external_id: &str) -> Option<PersonId> {
        self.people
            .iter()
            .position(|p| p.id() == external_id)
            .map(PersonId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> + '_ {
        self.people
            .iter()
            .enumerate()
            .map(|(index, person)| (PersonId::new(index), person))
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Display name, or the handle itself for unknown ids.
    pub fn name_of(&self, id: PersonId) -> String {
        self.get(id)
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}
