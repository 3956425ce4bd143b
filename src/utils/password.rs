use bcrypt::{DEFAULT_COST, hash, verify};
use rand::{Rng, distributions::Alphanumeric, rngs::OsRng};

use crate::utils::errors::AppError;

/// Length of passwords generated for teacher accounts.
pub const GENERATED_PASSWORD_LENGTH: usize = 12;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}

/// Generates an alphanumeric password from the OS random source. This is a
/// credential, so a cryptographically secure generator is required.
pub fn generate_password() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}
