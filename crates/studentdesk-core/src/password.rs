//! Password hashing for operator accounts.

use crate::errors::AppError;
use anyhow::Context;
use bcrypt::{DEFAULT_COST, hash, verify};

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .context("Failed to hash password")
        .map_err(AppError::internal)
}

/// Returns `Ok(false)` for a wrong password and `Err` when `hashed` is not a
/// bcrypt hash at all.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AppError> {
    verify(password, hashed)
        .context("Failed to verify password")
        .map_err(AppError::internal)
}
