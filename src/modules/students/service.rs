use anyhow::anyhow;
use rand::Rng;
use studentdesk_client::ImageUpload;
use studentdesk_core::AppError;
use studentdesk_models::{EnrollmentNumber, Student, StudentId};
use tracing::{info, instrument, warn};

use super::controller::StudentListController;
use crate::state::AppState;
use crate::utils::errors::service_error;

/// Attempts at drawing an enrollment number not held by any record.
pub const MAX_ENROLLMENT_ATTEMPTS: usize = 100;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(state))]
    pub async fn get_all(state: &AppState) -> Result<Vec<Student>, AppError> {
        let _loading = state.loading.start("fetch students");
        state.students.get_all().await.map_err(service_error)
    }

    #[instrument(skip(state))]
    pub async fn get(state: &AppState, id: &StudentId) -> Result<Student, AppError> {
        let _loading = state.loading.start("fetch student");
        state.students.get_by_id(id).await.map_err(service_error)
    }

    #[instrument(skip(state, student), fields(id = %student.id))]
    pub async fn create(state: &AppState, student: &Student) -> Result<Student, AppError> {
        let created = state.students.create(student).await.map_err(service_error)?;
        info!("Student created");
        Ok(created)
    }

    #[instrument(skip(state, student), fields(id = %student.id))]
    pub async fn update(state: &AppState, student: &Student) -> Result<Student, AppError> {
        let updated = state.students.update(student).await.map_err(service_error)?;
        info!("Student updated");
        Ok(updated)
    }

    #[instrument(skip(state))]
    pub async fn delete(state: &AppState, id: &StudentId) -> Result<(), AppError> {
        let _loading = state.loading.start("delete student");
        state.students.delete(id).await.map_err(service_error)?;
        info!("Student deleted");
        Ok(())
    }

    /// Validates the image against the upload settings and stores it.
    #[instrument(skip(state, image), fields(file = %image.file_name, size = image.size()))]
    pub async fn upload_avatar(state: &AppState, image: &ImageUpload) -> Result<String, AppError> {
        image.validate(&state.config.upload).map_err(service_error)?;
        let _loading = state.loading.start("upload avatar");
        state.media.upload(image).await.map_err(service_error)
    }

    /// Reloads the collection into the controller.
    ///
    /// On failure the controller keeps its current page and an error
    /// notification is raised. Returns whether the load succeeded.
    pub async fn refresh(state: &AppState, controller: &mut StudentListController) -> bool {
        match Self::get_all(state).await {
            Ok(records) => {
                controller.on_records_loaded(records);
                true
            }
            Err(err) => {
                warn!(error = %err, "Failed to load students");
                controller.on_load_failed(&err, &state.notifier);
                false
            }
        }
    }

    /// Deletes a record, notifies the operator and reloads the list.
    pub async fn remove(
        state: &AppState,
        controller: &mut StudentListController,
        id: &StudentId,
    ) -> Result<(), AppError> {
        if let Err(err) = Self::delete(state, id).await {
            state.notifier.report(&err);
            return Err(err);
        }
        state.notifier.success("Student deleted successfully");
        Self::refresh(state, controller).await;
        Ok(())
    }

    /// Draws `EN` + 7 digits until the number differs from every record.
    pub fn generate_enrollment_number<R: Rng>(
        existing: &[Student],
        rng: &mut R,
    ) -> Result<EnrollmentNumber, AppError> {
        for _ in 0..MAX_ENROLLMENT_ATTEMPTS {
            let candidate = EnrollmentNumber::generate(rng);
            if !existing.iter().any(|s| s.enroll_num == candidate.as_str()) {
                return Ok(candidate);
            }
        }
        Err(AppError::conflict(anyhow!(
            "Could not generate a unique enrollment number"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn holding(enroll_num: String) -> Student {
        Student {
            id: StudentId::generate(),
            name: "Taken".to_string(),
            email: String::new(),
            phone_num: String::new(),
            enroll_num,
            date_admission: String::new(),
            avatar: None,
        }
    }

    #[test]
    fn test_generated_number_avoids_existing() {
        let first = EnrollmentNumber::generate(&mut StdRng::seed_from_u64(1)).into_inner();
        let existing = vec![holding(first.clone())];

        let generated =
            StudentService::generate_enrollment_number(&existing, &mut StdRng::seed_from_u64(1))
                .unwrap();
        assert_ne!(generated.as_str(), first);
        assert!(EnrollmentNumber::is_valid_format(generated.as_str()));
    }

    #[test]
    fn test_generation_gives_up_when_rng_repeats() {
        // An all-zero source draws the same candidate every time.
        struct Stuck;
        impl rand::RngCore for Stuck {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0);
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                dest.fill(0);
                Ok(())
            }
        }

        let taken = EnrollmentNumber::generate(&mut Stuck).into_inner();
        let err = StudentService::generate_enrollment_number(&[holding(taken)], &mut Stuck)
            .unwrap_err();
        assert_eq!(err.kind, studentdesk_core::ErrorKind::Conflict);
    }
}
