//! Maps domain errors onto HTTP responses.
//!
//! The body is always `{"error": "..."}` with a fixed, client-safe message;
//! the underlying detail only goes to the log.

use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use rb_core::AppError;
use serde::Serialize;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub AppError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    pub fn client_message(&self) -> &'static str {
        match self.0 {
            AppError::Decode(_) => "Invalid request body",
            AppError::Validation(_) => "Title and content are required",
            AppError::RateLimitExceeded => "Too many requests. Please try again later.",
            AppError::Storage(_) => "Internal server error",
            AppError::MethodNotAllowed => "Method not allowed",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::Decode(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, JSON_UTF8))
            .json(ErrorBody {
                error: self.client_message(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn statuses_follow_taxonomy() {
        let cases = [
            (AppError::Decode("eof".into()), 400),
            (AppError::Validation("empty".into()), 400),
            (AppError::RateLimitExceeded, 429),
            (AppError::Storage("io".into()), 500),
            (AppError::MethodNotAllowed, 405),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status_code().as_u16(), status);
        }
    }

    #[actix_web::test]
    async fn storage_detail_does_not_leak() {
        let resp = ApiError(AppError::Storage("UNIQUE constraint failed: posts.id".into()))
            .error_response();
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_UTF8
        );
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, r#"{"error":"Internal server error"}"#);
    }
}
