//! # rb-db-memory
//!
//! Volatile `PostRepo`. Posts live for the life of the process and are
//! listed in the order they were appended.

use std::collections::HashSet;

use async_trait::async_trait;
use rb_core::error::{AppError, Result};
use rb_core::models::Post;
use rb_core::traits::PostRepo;
use tokio::sync::RwLock;

#[derive(Default)]
struct Posts {
    ordered: Vec<Post>,
    ids: HashSet<String>,
}

/// Readers share the lock; a create holds it exclusively.
#[derive(Default)]
pub struct MemoryPostRepo {
    posts: RwLock<Posts>,
}

impl MemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepo for MemoryPostRepo {
    async fn list(&self) -> Result<Vec<Post>> {
        Ok(self.posts.read().await.ordered.clone())
    }

    async fn create(&self, post: &Post) -> Result<()> {
        let mut posts = self.posts.write().await;
        if !posts.ids.insert(post.id.clone()) {
            return Err(AppError::Storage(format!("duplicate post id {}", post.id)));
        }
        posts.ordered.push(post.clone());
        Ok(())
    }
}
