//! Shared fixtures for the end-to-end tests.

use std::sync::Arc;

use actix_web::web;
use rb_api::AppState;
use rb_core::{PostRepo, PostService, TokenBucket};
use rb_db_sqlite::SqlitePostRepo;

/// A fresh single-connection in-memory SQLite store with the schema applied.
pub async fn sqlite_store() -> Arc<SqlitePostRepo> {
    Arc::new(
        SqlitePostRepo::connect("sqlite::memory:", 1)
            .await
            .expect("in-memory sqlite"),
    )
}

pub fn app_state(repo: Arc<dyn PostRepo>) -> web::Data<AppState> {
    web::Data::new(AppState {
        service: PostService::new(repo),
    })
}

/// The production bucket: 2 tokens/s, capacity 2.
pub fn production_bucket() -> web::Data<TokenBucket> {
    web::Data::new(TokenBucket::default())
}
