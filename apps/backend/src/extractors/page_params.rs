use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::config::pagination::PaginationConfig;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::pagination::check_request;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct RawPageQuery {
    page: Option<u64>,
    size: Option<u64>,
}

/// `?page=&size=` with defaults applied and `size` clamped to the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub size: u64,
}

impl PageParams {
    fn resolve(
        page: Option<u64>,
        size: Option<u64>,
        cfg: &PaginationConfig,
    ) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let size = size.unwrap_or(cfg.default_size).min(cfg.max_size);
        check_request(page, size)?;
        Ok(Self { page, size })
    }
}

impl FromRequest for PageParams {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let cfg = req
            .app_data::<web::Data<AppState>>()
            .map(|s| s.pagination)
            .unwrap_or_default();

        let result = web::Query::<RawPageQuery>::from_query(req.query_string())
            .map_err(|e| {
                AppError::bad_request(
                    ErrorCode::InvalidPagination,
                    format!("Invalid page parameters: {e}"),
                )
            })
            .and_then(|q| Self::resolve(q.page, q.size, &cfg));
        ready(result)
    }
}
