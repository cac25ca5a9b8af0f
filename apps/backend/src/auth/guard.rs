//! Access policy checks, independent of HTTP.
//!
//! A request moves from "token presented" to either a decoded `Claims`
//! (possibly then rejected for role) or an authentication failure. The
//! guard never turns a bad token into 403, nor a wrong role into 401.

use sea_orm::ConnectionTrait;
use tracing::debug;

use super::error::AuthError;
use super::jwt::{decode_access_token, Claims};
use super::role::Role;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User};
use crate::state::security_config::SecurityConfig;

/// Decode `token` and require that it carries `expected`.
pub fn require_role(
    token: &str,
    expected: Role,
    security: &SecurityConfig,
) -> Result<Claims, AuthError> {
    let claims = decode_access_token(token, security)?;
    if claims.role != expected {
        return Err(AuthError::AuthorizationDenied {
            required: expected,
            actual: claims.role,
        });
    }
    Ok(claims)
}

/// Decode `token` and load the user it names.
///
/// The returned user reflects current storage, so its role may differ from
/// the role stamped in the token.
pub async fn resolve_current_principal<C: ConnectionTrait + Send + Sync>(
    token: &str,
    conn: &C,
    security: &SecurityConfig,
) -> Result<User, AuthError> {
    let claims = decode_access_token(token, security)?;

    match users::find_user_by_username(conn, &claims.sub).await? {
        Some(user) => {
            debug!(user_id = user.id, "principal resolved");
            Ok(user)
        }
        None => {
            debug!(username = %Redacted(&claims.sub), "principal lookup missed");
            Err(AuthError::PrincipalNotFound {
                username: claims.sub,
            })
        }
    }
}
