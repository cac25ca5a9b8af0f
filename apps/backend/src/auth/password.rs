//! Argon2id password hashing.
//!
//! Hashes are PHC strings that embed salt and parameters, so verification
//! always uses the parameters a hash was created with, not the current config.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as PasswordHashError, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

use super::error::AuthError;
use crate::state::security_config::PasswordHashing;

/// Hash `plaintext` with a fresh random salt.
pub fn hash_password(plaintext: &str, params: &PasswordHashing) -> Result<String, AuthError> {
    let params = Params::new(params.memory_kib, params.time_cost, params.parallelism, None)
        .map_err(|e| AuthError::Hashing(format!("invalid argon2 parameters: {e}")))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Check `plaintext` against a stored PHC hash.
///
/// A mismatch is `Ok(false)`. A stored value that does not parse is an
/// integrity failure, never a mismatch.
pub fn verify_password(plaintext: &str, stored: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| AuthError::IntegrityFailure(format!("stored password hash unreadable: {e}")))?;

    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(AuthError::IntegrityFailure(format!(
            "stored password hash unusable: {e}"
        ))),
    }
}
