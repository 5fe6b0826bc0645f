//! Field and record validation for student forms.
//!
//! Validation never fails with an `Err`: problems come back as a
//! [`ValidationResult`] mapping each offending field to one message. Rules
//! for a field run in order and stop at the first failure, so a missing
//! value is only ever reported as required.
//!
//! Uniqueness of email and enrollment number is checked against a list of
//! existing records supplied by the caller; the record being edited (same
//! id) is skipped.

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use studentdesk_core::dates::parse_display_date;
use studentdesk_models::{EnrollmentNumber, Student, StudentDraft, StudentField, StudentId};
use validator::ValidateEmail;

pub const NAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 50;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s'\-]+$").expect("valid name regex"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("valid phone regex"));

pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const NAME_TOO_LONG: &str = "Name must be at most 50 characters";
    pub const NAME_INVALID: &str = "Name can only contain letters, spaces, hyphens and apostrophes";

    pub const EMAIL_REQUIRED: &str = "Email is required";
    pub const EMAIL_TOO_LONG: &str = "Email must be at most 50 characters";
    pub const EMAIL_INVALID: &str = "Please enter a valid email address";
    pub const EMAIL_TAKEN: &str = "This email is already registered";

    pub const PHONE_REQUIRED: &str = "Phone number is required";
    pub const PHONE_INVALID: &str =
        "Please enter a valid phone number (10-15 digits, optional + country code)";

    pub const ENROLL_REQUIRED: &str = "Enrollment number is required";
    pub const ENROLL_INVALID: &str =
        "Enrollment number must be 2 uppercase letters followed by 7 digits";
    pub const ENROLL_TAKEN: &str = "This enrollment number is already in use";

    pub const DATE_REQUIRED: &str = "Admission date is required";
    pub const DATE_INVALID: &str = "Please enter a valid date";
    pub const DATE_IN_FUTURE: &str = "Admission date cannot be in the future";
}

/// Field errors of a draft; an absent key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: BTreeMap<StudentField, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: StudentField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Replaces the outcome for a single field, clearing it on `None`.
    pub fn set(&mut self, field: StudentField, message: Option<String>) {
        match message {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// What a single field is validated against.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Id of the record being edited, `None` for a new record.
    pub record_id: Option<&'a StudentId>,
    /// Persisted records for the uniqueness checks. Skipped when `None`.
    pub existing: Option<&'a [Student]>,
    /// Latest admission date accepted.
    pub today: NaiveDate,
}

impl<'a> ValidationContext<'a> {
    pub fn new(record_id: Option<&'a StudentId>, existing: Option<&'a [Student]>) -> Self {
        Self {
            record_id,
            existing,
            today: Local::now().date_naive(),
        }
    }

    pub fn at(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn is_taken(&self, value: &str, field: StudentField) -> bool {
        self.existing.is_some_and(|records| {
            records
                .iter()
                .filter(|s| Some(&s.id) != self.record_id)
                .any(|s| s.field(field) == value)
        })
    }
}

/// Validates one field, returning the first failing rule's message.
pub fn validate_field(
    field: StudentField,
    value: &str,
    ctx: &ValidationContext<'_>,
) -> Option<String> {
    let value = value.trim();
    let message = match field {
        StudentField::Name => check_name(value),
        StudentField::Email => check_email(value, ctx),
        StudentField::PhoneNum => check_phone(value),
        // Generated for new records, only checked on edits.
        StudentField::EnrollNum if ctx.record_id.is_none() => None,
        StudentField::EnrollNum => check_enroll_num(value, ctx),
        StudentField::DateAdmission => check_date(value, ctx.today),
    };
    message.map(str::to_string)
}

fn check_name(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(messages::NAME_REQUIRED)
    } else if value.chars().count() > NAME_MAX_LEN {
        Some(messages::NAME_TOO_LONG)
    } else if !NAME_PATTERN.is_match(value) {
        Some(messages::NAME_INVALID)
    } else {
        None
    }
}

fn check_email(value: &str, ctx: &ValidationContext<'_>) -> Option<&'static str> {
    if value.is_empty() {
        Some(messages::EMAIL_REQUIRED)
    } else if value.chars().count() > EMAIL_MAX_LEN {
        Some(messages::EMAIL_TOO_LONG)
    } else if !is_valid_email(value) {
        Some(messages::EMAIL_INVALID)
    } else if ctx.is_taken(value, StudentField::Email) {
        Some(messages::EMAIL_TAKEN)
    } else {
        None
    }
}

/// Email grammar plus a dotted domain ending in an alphabetic TLD.
fn is_valid_email(value: &str) -> bool {
    if !value.validate_email() {
        return false;
    }
    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

fn check_phone(value: &str) -> Option<&'static str> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        Some(messages::PHONE_REQUIRED)
    } else if !PHONE_PATTERN.is_match(&compact) {
        Some(messages::PHONE_INVALID)
    } else {
        None
    }
}

fn check_enroll_num(value: &str, ctx: &ValidationContext<'_>) -> Option<&'static str> {
    if value.is_empty() {
        Some(messages::ENROLL_REQUIRED)
    } else if !EnrollmentNumber::is_valid_format(value) {
        Some(messages::ENROLL_INVALID)
    } else if ctx.is_taken(value, StudentField::EnrollNum) {
        Some(messages::ENROLL_TAKEN)
    } else {
        None
    }
}

fn check_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    if value.is_empty() {
        return Some(messages::DATE_REQUIRED);
    }
    match parse_display_date(value) {
        None => Some(messages::DATE_INVALID),
        Some(date) if date > today => Some(messages::DATE_IN_FUTURE),
        Some(_) => None,
    }
}

/// Runs every rule for the fields present on `draft`, against today's date.
pub fn validate_student(draft: &StudentDraft, existing: Option<&[Student]>) -> ValidationResult {
    validate_student_at(draft, existing, Local::now().date_naive())
}

pub fn validate_student_at(
    draft: &StudentDraft,
    existing: Option<&[Student]>,
    today: NaiveDate,
) -> ValidationResult {
    let ctx = ValidationContext::new(draft.id.as_ref(), existing).at(today);
    let errors = StudentField::ALL
        .into_iter()
        .filter_map(|field| {
            let value = draft.get(field)?;
            validate_field(field, value, &ctx).map(|message| (field, message))
        })
        .collect();

    ValidationResult { errors }
}
