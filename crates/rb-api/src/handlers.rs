//! # rb-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the post
//! service. Handlers never touch storage directly.

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use rb_core::{AppError, NewPost, PostService};

use crate::error::{ApiError, JSON_UTF8};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Bulletin Board API! Please use the /posts endpoint.";

/// State shared across all actix-web workers.
#[derive(Clone)]
pub struct AppState {
    pub service: PostService,
}

/// `/` (any method): fixed plain-text greeting.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME_MESSAGE)
}

/// `OPTIONS /posts`: CORS preflight. Headers come from the resource
/// middleware; the body stays empty.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// `GET /posts`
pub async fn list_posts(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let posts = data.service.list_posts().await?;
    Ok(HttpResponse::Ok().content_type(JSON_UTF8).json(posts))
}

/// `POST /posts`
pub async fn create_post(
    data: web::Data<AppState>,
    body: web::Json<NewPost>,
) -> Result<HttpResponse, ApiError> {
    let NewPost { title, content } = body.into_inner();
    let post = data.service.create_post(&title, &content).await?;
    Ok(HttpResponse::Created().content_type(JSON_UTF8).json(post))
}

/// Any other verb on `/posts`.
pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(AppError::MethodNotAllowed.into())
}
