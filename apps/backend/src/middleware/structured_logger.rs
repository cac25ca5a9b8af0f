use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::RequestId;

/// Id of the user a request acted as. Set by the `CurrentUser` extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser(pub i64);

/// One `request_completed` line per request, levelled by status class.
///
/// The path is the matched route pattern (`/api/v1/posts/{post_id}`) when
/// routing succeeded, so ids never end up in the log key.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

struct Completion {
    method: String,
    route: String,
    status: StatusCode,
    duration_us: u64,
    trace_id: String,
    user_id: Option<i64>,
}

impl Completion {
    fn emit(&self) {
        let status_code = self.status.as_u16();
        let (method, route, trace_id) = (&self.method, &self.route, &self.trace_id);
        let duration_us = self.duration_us;
        let user_id = self.user_id;

        if self.status.is_server_error() {
            error!(http.method = %method, http.route = %route, http.status_code = status_code, duration_us, trace_id = %trace_id, user_id, "request_completed");
        } else if self.status.is_client_error() {
            warn!(http.method = %method, http.route = %route, http.status_code = status_code, duration_us, trace_id = %trace_id, user_id, "request_completed");
        } else {
            info!(http.method = %method, http.route = %route, http.status_code = status_code, duration_us, trace_id = %trace_id, user_id, "request_completed");
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let raw_path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, route, user_id) = match &result {
                Ok(res) => {
                    let request = res.request();
                    let route = request.match_pattern().unwrap_or(raw_path);
                    let user_id = request.extensions().get::<ActingUser>().map(|u| u.0);
                    (res.status(), route, user_id)
                }
                Err(err) => (err.as_response_error().status_code(), raw_path, None),
            };

            Completion {
                method,
                route,
                status,
                duration_us: start.elapsed().as_micros() as u64,
                trace_id,
                user_id,
            }
            .emit();

            result
        })
    }
}
