//! Operator accounts.

use reqwest::Client;
use std::sync::Arc;
use studentdesk_config::ApiConfig;
use studentdesk_models::UserRecord;
use tokio::sync::RwLock;

use crate::BoxFuture;
use crate::error::ServiceError;
use crate::http::{build_client, check};

/// Lookup and registration of operator accounts.
pub trait UserDirectory: Send + Sync {
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, Result<Option<UserRecord>, ServiceError>>;

    fn create<'a>(&'a self, user: &'a UserRecord)
    -> BoxFuture<'a, Result<UserRecord, ServiceError>>;
}

/// Emails are compared case-insensitively after trimming.
fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// [`UserDirectory`] backed by the `/users` resource of the data service.
#[derive(Clone, Debug)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: String,
}

impl HttpUserDirectory {
    pub fn new(config: &ApiConfig) -> Result<Self, ServiceError> {
        Ok(Self {
            client: build_client(config.timeout())?,
            base_url: config.url("users"),
        })
    }
}

impl UserDirectory for HttpUserDirectory {
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, Result<Option<UserRecord>, ServiceError>> {
        Box::pin(async move {
            let response = self
                .client
                .get(&self.base_url)
                .query(&[("email", email.trim())])
                .send()
                .await?;
            let users: Vec<UserRecord> = check(response).await?.json().await?;
            // The filter on the service side may be a substring match.
            Ok(users.into_iter().find(|u| same_email(&u.email, email)))
        })
    }

    fn create<'a>(
        &'a self,
        user: &'a UserRecord,
    ) -> BoxFuture<'a, Result<UserRecord, ServiceError>> {
        Box::pin(async move {
            let response = self.client.post(&self.base_url).json(user).send().await?;
            Ok(check(response).await?.json().await?)
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryUserDirectory {
    users: Arc<RwLock<Vec<UserRecord>>>,
}

impl MemoryUserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

impl UserDirectory for MemoryUserDirectory {
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, Result<Option<UserRecord>, ServiceError>> {
        Box::pin(async move {
            Ok(self
                .users
                .read()
                .await
                .iter()
                .find(|u| same_email(&u.email, email))
                .cloned())
        })
    }

    fn create<'a>(
        &'a self,
        user: &'a UserRecord,
    ) -> BoxFuture<'a, Result<UserRecord, ServiceError>> {
        Box::pin(async move {
            let mut users = self.users.write().await;
            if users.iter().any(|u| same_email(&u.email, &user.email)) {
                return Err(ServiceError::Status {
                    status: 409,
                    body: format!("User {} already exists", user.email),
                });
            }
            users.push(user.clone());
            Ok(user.clone())
        })
    }
}
