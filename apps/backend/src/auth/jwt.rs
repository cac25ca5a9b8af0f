use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::{AuthError, TokenRejection};
use super::role::Role;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::security_config::SecurityConfig;

/// What the caller asks to be put in a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessClaims {
    /// Username of the token owner
    pub sub: String,
    pub role: Role,
}

/// Claims carried by our access tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Wire shape on decode. `role` is loose so a bad value is told apart from a bad token.
#[derive(Deserialize)]
struct RawClaims {
    sub: String,
    role: Option<String>,
    #[serde(default)]
    iat: i64,
    exp: i64,
}

/// Sign an access token valid from `now` for the configured TTL.
pub fn create_access_token(
    claims: AccessClaims,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal(ErrorCode::Internal, "Clock is before the unix epoch"))?
        .as_secs();
    let iat = i64::try_from(iat)
        .map_err(|_| AppError::internal(ErrorCode::Internal, "Clock is out of range"))?;
    let exp = i64::try_from(security.access_token_ttl.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or_else(|| AppError::internal(ErrorCode::Internal, "Token lifetime out of range"))?;

    let claims = Claims {
        sub: claims.sub,
        role: claims.role,
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(ErrorCode::Internal, format!("Failed to encode JWT: {e}")))
}

/// Verify signature, algorithm and expiry, then return the claims.
pub fn decode_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;

    let raw = decode::<RawClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        AuthError::rejected(match e.kind() {
            ErrorKind::ExpiredSignature => TokenRejection::Expired,
            ErrorKind::InvalidSignature => TokenRejection::BadSignature,
            _ => TokenRejection::Malformed,
        })
    })?;

    // The signature checked out, so a bad role means we minted something we can't read.
    let role = match raw.role.as_deref() {
        Some(r) => r
            .parse::<Role>()
            .map_err(|e| AuthError::IntegrityFailure(format!("signed token has {e}")))?,
        None => {
            return Err(AuthError::IntegrityFailure(
                "signed token has no role claim".to_string(),
            ))
        }
    };

    Ok(Claims {
        sub: raw.sub,
        role,
        iat: raw.iat,
        exp: raw.exp,
    })
}
