use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};

use super::auth_token::AuthToken;
use crate::auth::resolve_current_principal;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::middleware::ActingUser;
use crate::repos::users::User;
use crate::state::app_state::AppState;

/// The user the bearer token names, as currently stored.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = AuthToken::parse(&req)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal(ErrorCode::Internal, "AppState not available"))?;
            let db = require_db(app_state)?;

            let user = resolve_current_principal(&token.token, db, &app_state.security).await?;
            req.extensions_mut().insert(ActingUser(user.id));
            Ok(CurrentUser { user })
        })
    }
}
