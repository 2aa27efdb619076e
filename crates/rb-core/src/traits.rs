//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Post;

/// Data persistence contract for posts.
///
/// Implementations own their synchronization; callers share them behind an
/// `Arc` and never lock anything themselves.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PostRepo: Send + Sync {
    /// Returns every stored post. An empty store yields an empty `Vec`.
    async fn list(&self) -> Result<Vec<Post>>;

    /// Persists a fully formed post (id assigned, fields sanitized).
    async fn create(&self, post: &Post) -> Result<()>;
}
