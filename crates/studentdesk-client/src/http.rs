use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

use crate::error::ServiceError;

pub(crate) fn build_client(timeout: Duration) -> Result<Client, ServiceError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ServiceError::from)
}

/// Passes successful responses through and turns everything else into a
/// [`ServiceError`].
pub(crate) async fn check(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ServiceError::NotFound);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status {
        status: status.as_u16(),
        body: body.chars().take(200).collect(),
    })
}
