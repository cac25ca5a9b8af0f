//! Credentials, tokens and the access policy guard.

pub mod error;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod role;

pub use error::{AuthError, TokenRejection};
pub use guard::{require_role, resolve_current_principal};
pub use jwt::{create_access_token, decode_access_token, AccessClaims, Claims};
pub use password::{hash_password, verify_password};
pub use role::Role;
