//! Student domain models.
//!
//! [`Student`] is the persisted record as exchanged with the data service
//! (camelCase JSON). [`StudentDraft`] is the partial record a form works
//! on: every field is optional, and only the fields present on a draft are
//! validated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use studentdesk_core::serde::{deserialize_lenient_string, deserialize_optional_string};

use crate::ids::StudentId;

/// The searchable, sortable and validated fields of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StudentField {
    Name,
    Email,
    PhoneNum,
    EnrollNum,
    DateAdmission,
}

impl StudentField {
    pub const ALL: [StudentField; 5] = [
        StudentField::Name,
        StudentField::Email,
        StudentField::PhoneNum,
        StudentField::EnrollNum,
        StudentField::DateAdmission,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::PhoneNum => "phoneNum",
            Self::EnrollNum => "enrollNum",
            Self::DateAdmission => "dateAdmission",
        }
    }

    /// Human label used in prompts and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::PhoneNum => "Phone",
            Self::EnrollNum => "Enrollment Number",
            Self::DateAdmission => "Date of Admission",
        }
    }
}

impl fmt::Display for StudentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" | "phonenum" | "phonenumber" => Ok(Self::PhoneNum),
            "enroll" | "enrollnum" | "enrollmentnumber" => Ok(Self::EnrollNum),
            "date" | "dateadmission" | "admission" | "dateofadmission" => {
                Ok(Self::DateAdmission)
            }
            _ => Err(format!(
                "unknown field '{}' (expected name, email, phone, enroll or date)",
                s
            )),
        }
    }
}

/// A persisted student record.
///
/// Text fields missing from the service payload deserialize to an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub phone_num: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub enroll_num: String,
    /// Display string such as `8-Dec, 2021`.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub date_admission: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub avatar: Option<String>,
}

impl Student {
    pub fn field(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Email => &self.email,
            StudentField::PhoneNum => &self.phone_num,
            StudentField::EnrollNum => &self.enroll_num,
            StudentField::DateAdmission => &self.date_admission,
        }
    }
}

/// A partially filled student record.
///
/// `id` is set when editing an existing record; uniqueness checks skip the
/// record with the same id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StudentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_num: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enroll_num: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_admission: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl StudentDraft {
    /// An empty draft for a new record, with every form field present.
    pub fn blank() -> Self {
        Self {
            id: None,
            name: Some(String::new()),
            email: Some(String::new()),
            phone_num: Some(String::new()),
            enroll_num: None,
            date_admission: Some(String::new()),
            avatar: None,
        }
    }

    /// A draft holding a single field, plus the id when editing.
    pub fn single(field: StudentField, value: impl Into<String>, id: Option<StudentId>) -> Self {
        let mut draft = Self {
            id,
            ..Self::default()
        };
        draft.set(field, value);
        draft
    }

    pub fn get(&self, field: StudentField) -> Option<&str> {
        match field {
            StudentField::Name => self.name.as_deref(),
            StudentField::Email => self.email.as_deref(),
            StudentField::PhoneNum => self.phone_num.as_deref(),
            StudentField::EnrollNum => self.enroll_num.as_deref(),
            StudentField::DateAdmission => self.date_admission.as_deref(),
        }
    }

    pub fn set(&mut self, field: StudentField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            StudentField::Name => self.name = value,
            StudentField::Email => self.email = value,
            StudentField::PhoneNum => self.phone_num = value,
            StudentField::EnrollNum => self.enroll_num = value,
            StudentField::DateAdmission => self.date_admission = value,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Builds the persisted record, trimming text fields.
    ///
    /// Missing fields become empty strings; the caller validates first.
    pub fn into_student(self, id: StudentId) -> Student {
        let text = |v: Option<String>| v.map(|s| s.trim().to_string()).unwrap_or_default();
        Student {
            id,
            name: text(self.name),
            email: text(self.email),
            phone_num: text(self.phone_num),
            enroll_num: text(self.enroll_num),
            date_admission: text(self.date_admission),
            avatar: self.avatar.filter(|a| !a.trim().is_empty()),
        }
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            id: Some(student.id.clone()),
            name: Some(student.name.clone()),
            email: Some(student.email.clone()),
            phone_num: Some(student.phone_num.clone()),
            enroll_num: Some(student.enroll_num.clone()),
            date_admission: Some(student.date_admission.clone()),
            avatar: student.avatar.clone(),
        }
    }
}
