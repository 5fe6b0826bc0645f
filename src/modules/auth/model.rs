use serde::Serialize;
use studentdesk_models::LoginRequest;

/// The login prompt's state.
///
/// The password is cleared after every failed attempt.
#[derive(Clone, Default, Serialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub error: Option<String>,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"***")
            .field("error", &self.error)
            .finish()
    }
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            error: None,
        }
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.password.clear();
        self.error = Some(message.into());
    }
}
