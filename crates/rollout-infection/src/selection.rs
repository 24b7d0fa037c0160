//! Greedy choice of the next teacher for limited infection.
//!
//! Prefer the teacher whose classes already hold the most infected students,
//! skipping teachers whose infection would change nothing. When no teacher
//! shows any overlap, fall back to the last teacher (in registration order)
//! that still has uninfected surface. This is a local heuristic, not an
//! optimal cover.

use rollout_core::{PersonId, SelectionKind};
use rollout_graph::UserGraph;

/// Per-teacher counts the heuristic compares. Student counts are per seat,
/// so a student listed twice counts twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeacherTally {
    pub teacher: PersonId,
    pub teacher_infected: bool,
    pub infected_students: usize,
    pub total_students: usize,
}

impl TeacherTally {
    pub fn compute(graph: &UserGraph, teacher: PersonId) -> Self {
        let mut infected_students = 0;
        let mut total_students = 0;
        for student in graph.class_graph().students(teacher) {
            total_students += 1;
            if graph.is_infected(student) {
                infected_students += 1;
            }
        }
        Self {
            teacher,
            teacher_infected: graph.is_infected(teacher),
            infected_students,
            total_students,
        }
    }

    /// Infecting this teacher's classes would flip at least one flag.
    pub fn has_remaining_work(&self) -> bool {
        !self.teacher_infected || self.infected_students < self.total_students
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeacherSelection {
    pub tally: TeacherTally,
    pub kind: SelectionKind,
}

impl TeacherSelection {
    pub fn teacher(&self) -> PersonId {
        self.tally.teacher
    }
}

/// Pick the next teacher, or `None` when every teacher is exhausted.
pub fn pick_best_teacher(graph: &UserGraph) -> Option<TeacherSelection> {
    let mut best: Option<TeacherTally> = None;
    let mut backup: Option<TeacherTally> = None;
    let mut max_infected = 0;

    for &teacher in graph.class_graph().teachers() {
        let tally = TeacherTally::compute(graph, teacher);
        if tally.infected_students > max_infected && tally.has_remaining_work() {
            max_infected = tally.infected_students;
            best = Some(tally);
        } else if best.is_none() && tally.has_remaining_work() {
            // No early exit: the last qualifying teacher wins.
            backup = Some(tally);
        }
    }

    best.map(|tally| TeacherSelection {
        tally,
        kind: SelectionKind::Best,
    })
    .or_else(|| {
        backup.map(|tally| TeacherSelection {
            tally,
            kind: SelectionKind::Backup,
        })
    })
}
