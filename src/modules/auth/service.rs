use studentdesk_auth::{Session, validate_request, verify_credentials};
use studentdesk_core::AppError;
use studentdesk_models::LoginUser;
use tracing::{instrument, warn};

use super::model::LoginForm;
use crate::state::AppState;
use crate::utils::errors::service_error;

pub struct AuthService;

impl AuthService {
    /// Checks the form's credentials and signs the session in.
    ///
    /// On failure the form keeps the email, loses the password and carries
    /// the error message; a notification is raised as well.
    #[instrument(skip_all, fields(email = %form.email.trim()))]
    pub async fn login(
        state: &AppState,
        session: &mut Session,
        form: &mut LoginForm,
    ) -> Result<LoginUser, AppError> {
        let result = Self::authenticate(state, form).await;
        match result {
            Ok(user) => {
                form.error = None;
                form.password.clear();
                session.sign_in(user.clone());
                state
                    .notifier
                    .success(format!("Welcome back, {}", display_name(&user)));
                Ok(user)
            }
            Err(err) => {
                warn!(error = %err, "Login failed");
                form.fail(err.user_message());
                state.notifier.report(&err);
                Err(err)
            }
        }
    }

    async fn authenticate(state: &AppState, form: &LoginForm) -> Result<LoginUser, AppError> {
        let request = form.to_request();
        validate_request(&request)?;
        let _loading = state.loading.start("sign in");
        let user = state
            .users
            .find_by_email(&request.email)
            .await
            .map_err(service_error)?;
        verify_credentials(&request, user.as_ref())
    }

    pub fn logout(state: &AppState, session: &mut Session) {
        if session.is_authenticated() {
            session.sign_out();
            state.notifier.info("Signed out");
        }
    }
}

fn display_name(user: &LoginUser) -> &str {
    if user.name.trim().is_empty() {
        &user.email
    } else {
        &user.name
    }
}
