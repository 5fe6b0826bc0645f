//! Operator accounts.

use studentdesk_client::UserDirectory;
use studentdesk_core::hash_password;
use studentdesk_models::{UserId, UserRecord};

/// Creates an operator account with a bcrypt-hashed password.
pub async fn create_admin(
    directory: &dyn UserDirectory,
    name: &str,
    email: &str,
    password: &str,
) -> Result<UserRecord, Box<dyn std::error::Error>> {
    let email = email.trim();
    if directory.find_by_email(email).await?.is_some() {
        return Err(format!("User with email {} already exists", email).into());
    }

    let password = hash_password(password).map_err(|e| e.error)?;
    let user = UserRecord {
        id: UserId::generate(),
        name: name.trim().to_string(),
        email: email.to_string(),
        password,
    };

    Ok(directory.create(&user).await?)
}
