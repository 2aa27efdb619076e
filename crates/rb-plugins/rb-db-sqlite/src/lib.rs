//! # rb-db-sqlite Implementation
//!
//! Durable `PostRepo` backed by a single SQLite table. Row order is the
//! implicit `rowid`, so listing newest-first needs no timestamp column.

use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use rb_core::error::{AppError, Result};
use rb_core::models::Post;
use rb_core::traits::PostRepo;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

const CREATE_POSTS_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS posts (
    "id" TEXT NOT NULL PRIMARY KEY,
    "title" TEXT,
    "content" TEXT
)"#;

pub struct SqlitePostRepo {
    pool: SqlitePool,
}

impl SqlitePostRepo {
    /// Opens (creating if needed) the database at `url` and ensures the
    /// schema exists.
    ///
    /// An error here is a startup failure; the binary must not start
    /// serving when this returns `Err`.
    pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("invalid database url {url}"))?
            .create_if_missing(true);

        // An in-memory database lives and dies with its connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open database {url}"))?;

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, creating the schema idempotently.
    pub async fn from_pool(pool: SqlitePool) -> anyhow::Result<Self> {
        sqlx::query(CREATE_POSTS_TABLE)
            .execute(&pool)
            .await
            .context("failed to create posts table")?;
        Ok(Self { pool })
    }
}

fn storage_error(op: &str, err: sqlx::Error) -> AppError {
    tracing::error!(error = %err, "sqlite {op} failed");
    AppError::Storage(format!("{op} failed"))
}

#[async_trait]
impl PostRepo for SqlitePostRepo {
    /// Newest first (highest rowid first).
    async fn list(&self) -> Result<Vec<Post>> {
        let rows = sqlx::query("SELECT id, title, content FROM posts ORDER BY rowid DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("query posts", e))?;

        rows.into_iter()
            .map(|row| -> std::result::Result<Post, sqlx::Error> {
                Ok(Post {
                    id: row.try_get("id")?,
                    title: row.try_get::<Option<String>, _>("title")?.unwrap_or_default(),
                    content: row.try_get::<Option<String>, _>("content")?.unwrap_or_default(),
                })
            })
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| storage_error("scan post row", e))
    }

    async fn create(&self, post: &Post) -> Result<()> {
        sqlx::query("INSERT INTO posts (id, title, content) VALUES (?, ?, ?)")
            .bind(&post.id)
            .bind(&post.title)
            .bind(&post.content)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("insert post", e))?;
        Ok(())
    }
}
