//! Shared graph builders for tests and benchmarks.

use rollout_core::PersonId;
use rollout_graph::UserGraph;

/// Create one person per name; the name doubles as the id label.
pub fn people(graph: &mut UserGraph, names: &[&str]) -> Vec<PersonId> {
    names.iter().map(|&name| graph.add_person(name, name)).collect()
}

/// Register `teacher` if needed and give them one class.
pub fn teach(graph: &mut UserGraph, teacher: PersonId, students: &[PersonId]) {
    graph.register_teacher(teacher);
    assert!(
        graph.add_class(teacher, students.to_vec()),
        "fixture class rejected"
    );
}

/// T1 teaching one class {S1, S2}.
pub struct SingleClass {
    pub graph: UserGraph,
    pub teacher: PersonId,
    pub students: [PersonId; 2],
}

pub fn single_class() -> SingleClass {
    let mut graph = UserGraph::new();
    let p = people(&mut graph, &["T1", "S1", "S2"]);
    teach(&mut graph, p[0], &[p[1], p[2]]);
    SingleClass {
        graph,
        teacher: p[0],
        students: [p[1], p[2]],
    }
}

/// Two disjoint teacher + two student components.
pub struct TwoComponents {
    pub graph: UserGraph,
    /// `[teacher, student, student]`
    pub first: [PersonId; 3],
    pub second: [PersonId; 3],
}

pub fn two_components() -> TwoComponents {
    let mut graph = UserGraph::new();
    let p = people(&mut graph, &["TA", "A1", "A2", "TB", "B1", "B2"]);
    teach(&mut graph, p[0], &[p[1], p[2]]);
    teach(&mut graph, p[3], &[p[4], p[5]]);
    TwoComponents {
        graph,
        first: [p[0], p[1], p[2]],
        second: [p[3], p[4], p[5]],
    }
}

/// T1 {S1, S2}; T2 {S1, S3} shares S1; T3 {S4, S5} is unrelated.
/// T3 registers before T2 so a "first seen" rule would pick the wrong one.
pub struct SharedStudent {
    pub graph: UserGraph,
    pub t1: PersonId,
    pub t2: PersonId,
    pub t3: PersonId,
    pub shared: PersonId,
}

pub fn shared_student() -> SharedStudent {
    let mut graph = UserGraph::new();
    let p = people(&mut graph, &["T1", "T2", "T3", "S1", "S2", "S3", "S4", "S5"]);
    let (t1, t2, t3) = (p[0], p[1], p[2]);
    graph.register_teacher(t1);
    graph.register_teacher(t3);
    graph.register_teacher(t2);
    teach(&mut graph, t1, &[p[3], p[4]]);
    teach(&mut graph, t3, &[p[6], p[7]]);
    teach(&mut graph, t2, &[p[3], p[5]]);
    SharedStudent {
        graph,
        t1,
        t2,
        t3,
        shared: p[3],
    }
}

/// A school of `teachers` teachers, each with `classes_per_teacher` classes of
/// `class_size` students. Consecutive teachers share one student per class so
/// the whole school is one component.
pub fn school(teachers: usize, classes_per_teacher: usize, class_size: usize) -> (UserGraph, Vec<PersonId>) {
    let mut graph = UserGraph::new();
    let mut teacher_ids = Vec::with_capacity(teachers);
    let mut carried: Option<PersonId> = None;

    for t in 0..teachers {
        let teacher = graph.add_person(format!("teacher_{t}"), format!("t{t}"));
        graph.register_teacher(teacher);
        teacher_ids.push(teacher);
        for c in 0..classes_per_teacher {
            let mut class: Vec<PersonId> = (0..class_size)
                .map(|s| graph.add_person(format!("student_{t}_{c}_{s}"), format!("s{t}.{c}.{s}")))
                .collect();
            if let Some(shared) = carried {
                class.push(shared);
            }
            carried = class.first().copied();
            graph.add_class(teacher, class);
        }
    }
    (graph, teacher_ids)
}

/// Build a graph from an index layout: `people` anonymous persons
/// (`p0`, `p1`, ...) and `(teacher, classes)` entries of indices into them.
/// Out-of-range indices are dropped.
pub fn from_layout(people: usize, layout: &[(usize, Vec<Vec<usize>>)]) -> (UserGraph, Vec<PersonId>) {
    let mut graph = UserGraph::new();
    let ids: Vec<PersonId> = (0..people)
        .map(|i| graph.add_person(format!("p{i}"), format!("p{i}")))
        .collect();
    for (teacher, classes) in layout {
        let Some(&teacher) = ids.get(*teacher) else {
            continue;
        };
        graph.register_teacher(teacher);
        for class in classes {
            let students: Vec<PersonId> = class.iter().filter_map(|&i| ids.get(i).copied()).collect();
            graph.add_class(teacher, students);
        }
    }
    (graph, ids)
}
