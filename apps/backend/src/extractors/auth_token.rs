use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};

use crate::auth::{AuthError, TokenRejection};
use crate::error::AppError;

/// Bearer token taken verbatim from the Authorization header. Not yet verified.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    pub(crate) fn parse(req: &HttpRequest) -> Result<Self, AuthError> {
        let missing = || AuthError::rejected(TokenRejection::Missing);

        let auth_value = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(missing)?
            .to_str()
            .map_err(|_| missing())?;

        // Parse "Bearer <token>" format
        let mut parts = auth_value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("Bearer"), Some(token), None) => Ok(AuthToken {
                token: token.to_string(),
            }),
            _ => Err(missing()),
        }
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::parse(req).map_err(AppError::from))
    }
}
