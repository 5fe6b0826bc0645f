//! Ordering of student records.

use std::cmp::Ordering;
use studentdesk_core::dates::date_timestamp;
use studentdesk_models::{SortConfig, Student, StudentField};

/// Returns a sorted copy of `students`; the input is left untouched.
///
/// Text fields use [`locale_cmp`]. The admission date compares by its
/// timestamp, with missing or unparseable dates treated as the epoch.
pub fn sort_students(students: &[Student], config: SortConfig) -> Vec<Student> {
    let mut sorted = students.to_vec();
    sorted.sort_by(|a, b| config.order.apply(compare_by(a, b, config.field)));
    sorted
}

pub fn compare_by(a: &Student, b: &Student, field: StudentField) -> Ordering {
    match field {
        StudentField::DateAdmission => {
            date_timestamp(&a.date_admission).cmp(&date_timestamp(&b.date_admission))
        }
        _ => locale_cmp(a.field(field), b.field(field)),
    }
}

/// Collation close to a user-facing dictionary order.
///
/// Letters compare case-insensitively first; when two strings only differ
/// in case, the lower-case variant sorts first. Remaining ties fall back to
/// code-point order so the result is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use studentdesk_models::{SortOrder, StudentId};

    fn named(id: &str, name: &str, date: &str) -> Student {
        Student {
            id: StudentId::new(id),
            name: name.to_string(),
            email: format!("{}@x.com", id),
            phone_num: String::new(),
            enroll_num: String::new(),
            date_admission: date.to_string(),
            avatar: None,
        }
    }

    fn names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name() {
        let input = vec![named("1", "Bob", ""), named("2", "Alice", "")];
        let asc = sort_students(&input, SortConfig::default());
        assert_eq!(names(&asc), ["Alice", "Bob"]);

        let desc = sort_students(
            &input,
            SortConfig::new(StudentField::Name, SortOrder::Desc),
        );
        assert_eq!(names(&desc), ["Bob", "Alice"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let input = vec![named("1", "Bob", ""), named("2", "Alice", "")];
        let before = input.clone();
        let first = sort_students(&input, SortConfig::default());
        let second = sort_students(&input, SortConfig::default());
        assert_eq!(input, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("alice", "Bob"), Ordering::Less);
        assert_eq!(locale_cmp("Zed", "adam"), Ordering::Greater);
        assert_eq!(locale_cmp("anna", "Anna"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
        assert_eq!(locale_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_date_missing_first() {
        let input = vec![
            named("1", "C", "8-Dec, 2021"),
            named("2", "A", ""),
            named("3", "B", "2020-01-15"),
            named("4", "D", "not a date"),
        ];
        let sorted = sort_students(
            &input,
            SortConfig::new(StudentField::DateAdmission, SortOrder::Asc),
        );
        assert_eq!(names(&sorted), ["A", "D", "B", "C"]);
    }

    #[test]
    fn test_date_desc_is_reverse_of_asc_for_distinct_dates() {
        let input = vec![
            named("1", "x", "3-Mar, 2019"),
            named("2", "y", "2021-07-01"),
            named("3", "z", "1-Jan, 2020"),
        ];
        let asc = sort_students(
            &input,
            SortConfig::new(StudentField::DateAdmission, SortOrder::Asc),
        );
        let mut desc = sort_students(
            &input,
            SortConfig::new(StudentField::DateAdmission, SortOrder::Desc),
        );
        desc.reverse();
        assert_eq!(asc, desc);
    }
}
