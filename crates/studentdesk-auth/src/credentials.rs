use anyhow::anyhow;
use studentdesk_core::{AppError, verify_password};
use studentdesk_models::{LoginRequest, LoginUser, UserRecord};
use tracing::{instrument, warn};
use validator::{Validate, ValidationErrors};

/// Message shown for any credential mismatch, so the form does not reveal
/// which half was wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Joins validator messages into a single line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Field checks on the login form, before any lookup.
pub fn validate_request(request: &LoginRequest) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|e| AppError::bad_request(anyhow!("{}", format_validation_errors(&e))))
}

/// Checks `request` against the account found for its email, if any.
#[instrument(skip_all, fields(email = %request.email))]
pub fn verify_credentials(
    request: &LoginRequest,
    user: Option<&UserRecord>,
) -> Result<LoginUser, AppError> {
    validate_request(request)?;

    let Some(user) = user else {
        return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
    };

    let matches = verify_password(&request.password, &user.password).unwrap_or_else(|e| {
        warn!(user_id = %user.id, error = %e, "Stored password is not a valid hash");
        false
    });

    if !matches {
        return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
    }

    Ok(LoginUser::from(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use studentdesk_core::{ErrorKind, hash_password};
    use studentdesk_models::UserId;

    fn account(password: &str) -> UserRecord {
        UserRecord {
            id: UserId::new("1"),
            name: "Admin".to_string(),
            email: "admin@school.test".to_string(),
            password: hash_password(password).unwrap(),
        }
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_correct_password_signs_in() {
        let user = account("s3cret");
        let login = verify_credentials(&request("admin@school.test", "s3cret"), Some(&user))
            .unwrap();
        assert_eq!(login.email, "admin@school.test");
    }

    #[test]
    fn test_wrong_password_is_unauthorized() {
        let user = account("s3cret");
        let err = verify_credentials(&request("admin@school.test", "guess"), Some(&user))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.user_message(), INVALID_CREDENTIALS);
    }

    #[test]
    fn test_unknown_user_is_unauthorized() {
        let err = verify_credentials(&request("who@school.test", "x"), None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_plain_text_stored_password_never_matches() {
        let mut user = account("x");
        user.password = "s3cret".to_string();
        let err = verify_credentials(&request("admin@school.test", "s3cret"), Some(&user))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_malformed_request_is_bad_request() {
        let err = verify_credentials(&request("not-an-email", ""), None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadRequest);
        let message = err.user_message();
        assert!(message.contains("Please enter a valid email address"));
        assert!(message.contains("Password is required"));
    }
}
