//! Free-text search over student records.

use studentdesk_models::{Student, StudentField};

/// True when the lower-cased query is a substring of any searchable field.
///
/// Empty fields never match. Callers treat a blank query as "no filter"
/// rather than calling this, see [`filter_students`].
pub fn matches(student: &Student, query: &str) -> bool {
    let needle = query.to_lowercase();
    StudentField::ALL.iter().any(|&field| {
        let value = student.field(field);
        !value.is_empty() && value.to_lowercase().contains(&needle)
    })
}

/// Records passing [`matches`], in their original order.
///
/// A blank or whitespace-only query returns every record.
pub fn filter_students(students: &[Student], query: &str) -> Vec<Student> {
    if is_blank(query) {
        return students.to_vec();
    }
    students
        .iter()
        .filter(|s| matches(s, query))
        .cloned()
        .collect()
}

pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}
