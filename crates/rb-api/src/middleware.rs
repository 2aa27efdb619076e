//! rusty-bbs/crates/rb-api/src/middleware.rs Middleware
//!
//! Access logging, CORS headers, JSON extraction policy and the token-bucket
//! gate in front of post creation.

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderValue};
use actix_web::http::Method;
use actix_web::middleware::{DefaultHeaders, Logger, Next};
use actix_web::{web, Error, ResponseError};
use rb_core::{AppError, TokenBucket};

use crate::error::ApiError;

/// Access log: remote-ip "request-line" status-code response-size "referrer" "user-agent"
pub fn standard_middleware() -> Logger {
    Logger::default()
}

/// CORS headers for the posts resource, sent on every response regardless
/// of the request's `Origin`.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

/// Body extraction for `POST /posts`: any content type, bounded size, and
/// every failure reported as a decode error.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, req| {
            tracing::debug!(error = %err, path = %req.path(), "rejected request body");
            ApiError::from(AppError::Decode(err.to_string())).into()
        })
}

/// Takes one token per `POST`; other methods pass straight through.
pub async fn rate_limit(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    if req.method() == Method::POST {
        if let Some(bucket) = req.app_data::<web::Data<TokenBucket>>() {
            if !bucket.try_take() {
                let retry_after = bucket.wait_time().as_secs_f64().ceil().max(1.0) as u64;
                tracing::warn!(
                    peer = ?req.peer_addr(),
                    retry_after,
                    "rate limit exceeded"
                );
                let mut resp = ApiError(AppError::RateLimitExceeded).error_response();
                resp.headers_mut()
                    .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
                return Ok(req.into_response(resp));
            }
        }
    }

    Ok(next.call(req).await?.map_into_boxed_body())
}
