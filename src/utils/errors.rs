use studentdesk_client::ServiceError;
use studentdesk_core::{AppError, ErrorKind};

/// Classifies a collaborator failure.
///
/// Rejected uploads are the operator's to fix, a missing record is
/// `not_found`, everything else is a service failure.
pub fn service_error(err: ServiceError) -> AppError {
    let kind = match &err {
        ServiceError::NotFound | ServiceError::Status { status: 404, .. } => ErrorKind::NotFound,
        ServiceError::InvalidFileSize { .. } | ServiceError::InvalidMimeType { .. } => {
            ErrorKind::BadRequest
        }
        _ => ErrorKind::Service,
    };
    AppError::new(kind, err)
}
