//! JWT token generation helpers for tests

use std::time::{Duration, SystemTime};

use postboard::auth::{create_access_token, AccessClaims, Role};
use postboard::state::security_config::SecurityConfig;

/// Mint a bearer token for `sub` with `role`, issued now.
pub fn mint_test_token(sub: &str, role: Role, sec: &SecurityConfig) -> String {
    create_access_token(
        AccessClaims {
            sub: sub.to_string(),
            role,
        },
        SystemTime::now(),
        sec,
    )
    .expect("should mint token successfully")
}

/// Full Authorization header value including the "Bearer " prefix.
pub fn bearer_header(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

/// Mint a token that expired well before now.
pub fn mint_expired_token(sub: &str, role: Role, sec: &SecurityConfig) -> String {
    let past_time = SystemTime::now()
        .checked_sub(sec.access_token_ttl + Duration::from_secs(3600))
        .unwrap();
    create_access_token(
        AccessClaims {
            sub: sub.to_string(),
            role,
        },
        past_time,
        sec,
    )
    .expect("should mint expired token successfully")
}
