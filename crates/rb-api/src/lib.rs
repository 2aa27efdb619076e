//! # rb-api
//!
//! The web routing and orchestration layer for the bulletin board.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::http::Method;
use actix_web::middleware::from_fn;
use actix_web::web;

pub use error::ApiError;
pub use handlers::AppState;

/// Largest accepted `POST /posts` body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Configures the routes for the bulletin board.
///
/// The caller registers `web::Data<AppState>` and `web::Data<TokenBucket>`
/// on the `App`; without a bucket, `POST /posts` is not rate limited.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(middleware::json_config(MAX_BODY_BYTES))
        .service(
            web::resource("/posts")
                .route(web::get().to(handlers::list_posts))
                .route(web::post().to(handlers::create_post))
                .route(web::method(Method::OPTIONS).to(handlers::preflight))
                .default_service(web::to(handlers::method_not_allowed))
                // Last wrap runs first: even a 429 gets the CORS headers.
                .wrap(from_fn(middleware::rate_limit))
                .wrap(middleware::cors_headers()),
        )
        .service(web::resource("/").to(handlers::index))
        // Unknown paths get the welcome text as well.
        .default_service(web::to(handlers::index));
}
