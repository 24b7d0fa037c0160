//! Directed teacher → classes structure.

use rollout_core::PersonId;
use rustc_hash::FxHashMap;

/// An ordered group of students. Duplicates are kept as given.
pub type Class = Vec<PersonId>;

/// Maps each registered teacher to the classes they teach.
///
/// Teachers are enumerated in registration order, which makes every
/// order-dependent decision over teachers reproducible.
#[derive(Debug, Clone, Default)]
pub struct ClassGraph {
    /// Registration order.
    teachers: Vec<PersonId>,
    classes: FxHashMap<PersonId, Vec<Class>>,
}

impl ClassGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a teacher with no classes. Returns `true` if newly added.
    pub fn register_teacher(&mut self, teacher: PersonId) -> bool {
        if self.classes.contains_key(&teacher) {
            return false;
        }
        self.classes.insert(teacher, Vec::new());
        self.teachers.push(teacher);
        true
    }

    pub fn is_teacher(&self, person: PersonId) -> bool {
        self.classes.contains_key(&person)
    }

    /// Append a class under `teacher`. Returns `false` without mutating
    /// anything if the teacher is not registered.
    pub fn add_class(&mut self, teacher: PersonId, students: Class) -> bool {
        match self.classes.get_mut(&teacher) {
            Some(classes) => {
                classes.push(students);
                true
            }
            None => false,
        }
    }

    /// Classes taught by `teacher`; empty for non-teachers.
    pub fn classes(&self, teacher: PersonId) -> &[Class] {
        self.classes.get(&teacher).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every student seat across all of `teacher`'s classes, in order.
    pub fn students(&self, teacher: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.classes(teacher).iter().flatten().copied()
    }

    /// Registered teachers in registration order.
    pub fn teachers(&self) -> &[PersonId] {
        &self.teachers
    }

    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    pub fn class_count(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }
}
