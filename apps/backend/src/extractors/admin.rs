use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use super::auth_token::AuthToken;
use crate::auth::{require_role, Claims, Role};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

/// Claims of a token that carries the admin role. Checked without a database lookup.
#[derive(Debug, Clone)]
pub struct AdminClaims(pub Claims);

impl AdminClaims {
    fn check(req: &HttpRequest) -> Result<Self, AppError> {
        let token = AuthToken::parse(req)?;
        let app_state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal(ErrorCode::Internal, "AppState not available"))?;
        let claims = require_role(&token.token, Role::Admin, &app_state.security)?;
        Ok(AdminClaims(claims))
    }
}

impl FromRequest for AdminClaims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::check(req))
    }
}
