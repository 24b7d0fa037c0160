//! Plain-text dumps of a [`GraphSnapshot`].

use crate::snapshot::GraphSnapshot;

/// `teacher\n\tstudent, student, \n` per teacher and class.
pub fn classes(snapshot: &GraphSnapshot) -> String {
    let mut out = String::new();
    for entry in &snapshot.teachers {
        out.push_str(&entry.teacher);
        out.push('\n');
        for class in &entry.classes {
            out.push('\t');
            for student in class {
                out.push_str(student);
                out.push_str(", ");
            }
            out.push('\n');
        }
    }
    out
}

/// `person: neighbor, neighbor, \n` per connection index member.
pub fn connections(snapshot: &GraphSnapshot) -> String {
    let mut out = String::new();
    for entry in &snapshot.connections {
        out.push_str(&entry.person);
        out.push_str(": ");
        for neighbor in &entry.neighbors {
            out.push_str(neighbor);
            out.push_str(", ");
        }
        out.push('\n');
    }
    out
}

/// `person true|false\n` per connection index member.
pub fn versions(snapshot: &GraphSnapshot) -> String {
    snapshot
        .versions
        .iter()
        .map(|entry| format!("{} {}\n", entry.person, entry.infected))
        .collect()
}
