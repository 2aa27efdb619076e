//! # Rusty-BBS Binary
//!
//! The entry point that assembles the application: settings, logging, the
//! configured post store, and the HTTP server.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use configs::{DatabaseSettings, LogSettings, Settings, StoreBackend};
use rb_api::{configure_routes, middleware, AppState};
use rb_core::{PostRepo, PostService, TokenBucket};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "db-sqlite")]
use rb_db_sqlite::SqlitePostRepo;

#[cfg(feature = "db-memory")]
use rb_db_memory::MemoryPostRepo;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_file = configs::load_dotenv();
    let settings = Settings::load()?;
    init_tracing(&settings.log);
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    // 1. Storage. A schema failure ends the process here, before binding.
    let repo = build_store(&settings.database).await?;

    // 2. Shared state: one service, one process-wide token bucket.
    let state = web::Data::new(AppState {
        service: PostService::new(repo),
    });
    let bucket = web::Data::new(TokenBucket::default());

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::standard_middleware())
            .app_data(state.clone())
            .app_data(bucket.clone())
            .configure(configure_routes)
    });
    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    let (host, port) = settings.bind_address();
    let server = server
        .bind((host.as_str(), port))
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    tracing::info!("rusty-bbs listening on http://{host}:{port}");

    server.run().await.context("server error")?;
    tracing::info!("shut down");
    Ok(())
}

fn init_tracing(log: &LogSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn build_store(db: &DatabaseSettings) -> anyhow::Result<Arc<dyn PostRepo>> {
    match db.backend {
        #[cfg(feature = "db-sqlite")]
        StoreBackend::Sqlite => {
            let repo = SqlitePostRepo::connect(&db.url, db.max_connections)
                .await
                .context("failed to initialise sqlite store")?;
            tracing::info!(url = %db.url, "using sqlite post store");
            Ok(Arc::new(repo))
        }
        #[cfg(feature = "db-memory")]
        StoreBackend::Memory => {
            tracing::info!("using in-memory post store");
            Ok(Arc::new(MemoryPostRepo::new()))
        }
        #[allow(unreachable_patterns)]
        other => anyhow::bail!("store backend {other:?} was not compiled in"),
    }
}
