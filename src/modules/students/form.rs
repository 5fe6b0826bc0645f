//! Add/edit form orchestration.
//!
//! Input changes are validated one field at a time for immediate feedback.
//! On submit the whole record is validated against a fresh copy of the
//! collection; that result is authoritative. Failures leave the form open
//! with its input intact.

use anyhow::anyhow;
use serde::Serialize;
use studentdesk_client::ImageUpload;
use studentdesk_core::AppError;
use studentdesk_core::dates::{format_display_date, format_iso_date, parse_display_date};
use studentdesk_models::{Student, StudentDraft, StudentField, StudentId};
use tracing::{debug, instrument};

use super::service::StudentService;
use super::validation::{ValidationResult, validate_student};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
}

/// Result of a submit that reached the validation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(Student),
    Invalid(ValidationResult),
}

#[derive(Debug, Clone)]
pub struct StudentForm {
    draft: StudentDraft,
    errors: ValidationResult,
    /// Record being edited, used by [`StudentForm::reset`].
    original: Option<Student>,
    /// Id the record will be created with; fixed for the life of the form.
    pending_id: StudentId,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self::create()
    }
}

impl StudentForm {
    /// An empty form for a new record.
    pub fn create() -> Self {
        Self {
            draft: StudentDraft::blank(),
            errors: ValidationResult::default(),
            original: None,
            pending_id: StudentId::generate(),
        }
    }

    /// A form prefilled from `student`, with the date in ISO form.
    pub fn edit(student: &Student) -> Self {
        let mut draft = StudentDraft::from(student);
        if let Some(date) = parse_display_date(&student.date_admission) {
            draft.date_admission = Some(format_iso_date(date));
        }
        Self {
            draft,
            errors: ValidationResult::default(),
            original: Some(student.clone()),
            pending_id: student.id.clone(),
        }
    }

    pub fn mode(&self) -> FormMode {
        if self.draft.is_edit() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn draft(&self) -> &StudentDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn value(&self, field: StudentField) -> &str {
        self.draft.get(field).unwrap_or_default()
    }

    /// Fields the operator fills in; the enrollment number is generated
    /// for new records.
    pub fn editable_fields(&self) -> Vec<StudentField> {
        StudentField::ALL
            .into_iter()
            .filter(|f| *f != StudentField::EnrollNum || self.draft.is_edit())
            .collect()
    }

    /// Stores `value` and validates that field alone.
    ///
    /// Returns the field's error, if any. `existing` enables the
    /// uniqueness checks.
    pub fn set_field(
        &mut self,
        field: StudentField,
        value: impl Into<String>,
        existing: Option<&[Student]>,
    ) -> Option<&str> {
        let value = value.into();
        let single = StudentDraft::single(field, value.as_str(), self.draft.id.clone());
        let mut result = validate_student(&single, existing);

        self.draft.set(field, value);
        self.errors.set(field, result.errors.remove(&field));
        self.errors.error(field)
    }

    /// Restores the initial values and clears every error.
    pub fn reset(&mut self) {
        let fresh = match &self.original {
            Some(student) => Self::edit(student),
            None => Self::create(),
        };
        *self = fresh;
    }

    /// Uploads an avatar and stores its URL on the draft.
    pub async fn attach_avatar(
        &mut self,
        state: &AppState,
        image: &ImageUpload,
    ) -> Result<String, AppError> {
        match StudentService::upload_avatar(state, image).await {
            Ok(url) => {
                self.draft.avatar = Some(url.clone());
                state.notifier.success("Avatar uploaded");
                Ok(url)
            }
            Err(err) => {
                state.notifier.report(&err);
                Err(err)
            }
        }
    }

    pub fn remove_avatar(&mut self) {
        self.draft.avatar = None;
    }

    fn save_key(&self) -> String {
        self.pending_id.to_string()
    }

    /// Validates and saves the record.
    ///
    /// Validation problems come back as [`SubmitOutcome::Invalid`]; a
    /// rejected save is an `Err` and a notification. A second submit for
    /// the same record while one is in flight is refused with a conflict.
    #[instrument(skip_all, fields(mode = ?self.mode(), id = %self.pending_id))]
    pub async fn submit(&mut self, state: &AppState) -> Result<SubmitOutcome, AppError> {
        let Some(_in_flight) = state.saves.try_acquire(self.save_key()) else {
            return Err(AppError::conflict(anyhow!(
                "This record is already being saved"
            )));
        };
        let _loading = state.loading.start("save student");

        match self.save(state).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                state.notifier.report(&err);
                Err(err)
            }
        }
    }

    async fn save(&mut self, state: &AppState) -> Result<SubmitOutcome, AppError> {
        let existing = StudentService::get_all(state).await?;

        let result = validate_student(&self.draft, Some(&existing));
        self.errors = result.clone();
        if !result.is_valid() {
            debug!(errors = result.errors.len(), "Submit rejected by validation");
            state.notifier.warning("Please fix the highlighted fields");
            return Ok(SubmitOutcome::Invalid(result));
        }

        let student = self.build_record(&existing)?;
        let saved = match self.mode() {
            FormMode::Create => {
                let created = StudentService::create(state, &student).await?;
                state.notifier.success("Student added successfully");
                created
            }
            FormMode::Edit => {
                let updated = StudentService::update(state, &student).await?;
                state.notifier.success("Student updated successfully");
                updated
            }
        };

        self.original = self.original.as_ref().map(|_| saved.clone());
        self.reset();
        Ok(SubmitOutcome::Saved(saved))
    }

    /// Assembles the record to persist from a validated draft.
    fn build_record(&self, existing: &[Student]) -> Result<Student, AppError> {
        let mut draft = self.draft.clone();

        if let Some(date) = draft.date_admission.as_deref().and_then(parse_display_date) {
            draft.date_admission = Some(format_display_date(date));
        }

        if !draft.is_edit() {
            let number =
                StudentService::generate_enrollment_number(existing, &mut rand::thread_rng())?;
            draft.enroll_num = Some(number.into_inner());
        }

        Ok(draft.into_student(self.pending_id.clone()))
    }
}
