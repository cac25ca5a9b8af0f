use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::config::{must_var, var_or};
use crate::error::AppError;

/// Argon2id cost parameters for newly created hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHashing {
    pub memory_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for PasswordHashing {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            time_cost: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordHashing {
    /// Minimum legal cost. Only for tests, where hashing speed matters more than strength.
    pub fn fast_for_tests() -> Self {
        Self {
            memory_kib: argon2::Params::MIN_M_COST,
            time_cost: 1,
            parallelism: 1,
        }
    }
}

/// Token signing and password hashing settings, immutable after startup.
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC secret for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    pub access_token_ttl: Duration,
    pub password_hashing: PasswordHashing,
}

const DEFAULT_TTL_MINUTES: u64 = 300;

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl: Duration::from_secs(DEFAULT_TTL_MINUTES * 60),
            password_hashing: PasswordHashing::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    pub fn with_password_hashing(mut self, params: PasswordHashing) -> Self {
        self.password_hashing = params;
        self
    }

    /// Random secret and the cheapest hashing parameters.
    pub fn for_tests() -> Self {
        Self::new(format!("test-secret-{}", uuid::Uuid::new_v4()))
            .with_password_hashing(PasswordHashing::fast_for_tests())
    }

    pub fn from_env() -> Result<Self, AppError> {
        let secret = must_var("POSTBOARD_JWT_SECRET")?;
        if secret.trim().is_empty() {
            return Err(AppError::config("POSTBOARD_JWT_SECRET must not be empty"));
        }

        let algorithm = parse_algorithm(&var_or(
            "POSTBOARD_JWT_ALGORITHM",
            "HS256".to_string(),
        )?)?;

        let ttl_minutes: u64 = var_or("POSTBOARD_TOKEN_TTL_MINUTES", DEFAULT_TTL_MINUTES)?;
        if ttl_minutes == 0 {
            return Err(AppError::config("POSTBOARD_TOKEN_TTL_MINUTES must be at least 1"));
        }
        // Token timestamps are signed seconds.
        let ttl_secs = ttl_minutes
            .checked_mul(60)
            .filter(|secs| i64::try_from(*secs).is_ok())
            .ok_or_else(|| AppError::config("POSTBOARD_TOKEN_TTL_MINUTES is too large"))?;

        let defaults = PasswordHashing::default();
        let hashing = PasswordHashing {
            memory_kib: var_or("POSTBOARD_ARGON2_MEMORY_KIB", defaults.memory_kib)?,
            time_cost: var_or("POSTBOARD_ARGON2_TIME_COST", defaults.time_cost)?,
            parallelism: var_or("POSTBOARD_ARGON2_PARALLELISM", defaults.parallelism)?,
        };
        argon2::Params::new(hashing.memory_kib, hashing.time_cost, hashing.parallelism, None)
            .map_err(|e| AppError::config(format!("invalid argon2 parameters: {e}")))?;

        Ok(Self::new(secret.into_bytes())
            .with_algorithm(algorithm)
            .with_ttl(Duration::from_secs(ttl_secs))
            .with_password_hashing(hashing))
    }
}

/// Only the HMAC family is usable with a shared secret.
fn parse_algorithm(raw: &str) -> Result<Algorithm, AppError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::config(format!(
            "unsupported JWT algorithm '{other}', expected HS256, HS384 or HS512"
        ))),
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl", &self.access_token_ttl)
            .field("password_hashing", &self.password_hashing)
            .finish()
    }
}
