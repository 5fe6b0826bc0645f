mod common;

use chrono::NaiveDate;
use common::numbered_students;
use studentdesk::modules::students::validation::messages;
use studentdesk::modules::students::{validate_student, validate_student_at};
use studentdesk_models::{StudentDraft, StudentField, StudentId};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn test_blank_draft_reports_required_not_format() {
    let result = validate_student_at(&StudentDraft::blank(), None, today());

    assert_eq!(result.error(StudentField::Name), Some(messages::NAME_REQUIRED));
    assert_eq!(result.error(StudentField::Email), Some(messages::EMAIL_REQUIRED));
    assert_eq!(result.error(StudentField::PhoneNum), Some(messages::PHONE_REQUIRED));
    assert_eq!(
        result.error(StudentField::DateAdmission),
        Some(messages::DATE_REQUIRED)
    );
    // Not present on a new-record draft.
    assert!(result.error(StudentField::EnrollNum).is_none());
}

#[test]
fn test_whitespace_only_counts_as_missing() {
    let draft = StudentDraft::single(StudentField::Name, "   ", None);
    let result = validate_student_at(&draft, None, today());
    assert_eq!(result.error(StudentField::Name), Some(messages::NAME_REQUIRED));
}

#[test]
fn test_only_present_fields_are_checked() {
    let draft = StudentDraft::single(StudentField::PhoneNum, "+44 20 7946 0958", None);
    let result = validate_student_at(&draft, None, today());
    assert!(result.is_valid());
}

#[test]
fn test_uniqueness_excludes_record_being_edited() {
    let existing = numbered_students(3);
    let own = &existing[0];

    let mut draft = StudentDraft::from(own);
    let result = validate_student_at(&draft, Some(&existing), today());
    assert!(result.is_valid(), "{:?}", result.errors);

    draft.set(StudentField::Email, existing[1].email.clone());
    draft.set(StudentField::EnrollNum, existing[2].enroll_num.clone());
    let result = validate_student_at(&draft, Some(&existing), today());
    assert_eq!(result.error(StudentField::Email), Some(messages::EMAIL_TAKEN));
    assert_eq!(
        result.error(StudentField::EnrollNum),
        Some(messages::ENROLL_TAKEN)
    );
}

#[test]
fn test_numbered_fixture_records_are_valid() {
    let existing = numbered_students(30);
    for record in &existing {
        let draft = StudentDraft::from(record);
        let result = validate_student_at(&draft, Some(&existing), today());
        assert!(result.is_valid(), "{}: {:?}", record.name, result.errors);
    }
}

#[test]
fn test_new_record_email_collides_with_any_record() {
    let existing = numbered_students(3);
    let draft = StudentDraft::single(StudentField::Email, "student2@example.com", None);
    let result = validate_student(&draft, Some(&existing));
    assert_eq!(result.error(StudentField::Email), Some(messages::EMAIL_TAKEN));

    // Without the collection, uniqueness is not checked.
    assert!(validate_student(&draft, None).is_valid());
}

#[test]
fn test_admission_date_bounds() {
    let date = |value: &str| {
        let draft = StudentDraft::single(StudentField::DateAdmission, value, None);
        validate_student_at(&draft, None, today())
            .error(StudentField::DateAdmission)
            .map(str::to_string)
    };

    assert_eq!(date("2024-06-01"), None);
    assert_eq!(date("1-Jun, 2024"), None);
    assert_eq!(date("2024-06-02").as_deref(), Some(messages::DATE_IN_FUTURE));
    assert_eq!(date("yesterday").as_deref(), Some(messages::DATE_INVALID));
}

#[test]
fn test_enrollment_number_checked_on_edit() {
    let draft = StudentDraft::single(
        StudentField::EnrollNum,
        "en1234567",
        Some(StudentId::new("1")),
    );
    let result = validate_student_at(&draft, None, today());
    assert_eq!(
        result.error(StudentField::EnrollNum),
        Some(messages::ENROLL_INVALID)
    );
}
