use anyhow::anyhow;
use chrono::{DateTime, Utc};
use studentdesk_core::AppError;
use studentdesk_models::LoginUser;
use tracing::info;

/// The operator session.
///
/// There is no role model: a session is either authenticated or not.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<LoginUser>,
    signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&LoginUser> {
        self.user.as_ref()
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }

    pub fn sign_in(&mut self, user: LoginUser) {
        info!(user_id = %user.id, "Operator signed in");
        self.user = Some(user);
        self.signed_in_at = Some(Utc::now());
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "Operator signed out");
        }
        self.signed_in_at = None;
    }

    /// Returns the operator or an `unauthorized` error.
    pub fn require(&self) -> Result<&LoginUser, AppError> {
        self.user
            .as_ref()
            .ok_or_else(|| AppError::unauthorized(anyhow!("Please log in to continue")))
    }
}
