//! # Post Service
//!
//! Business rules for creating and listing posts. Transport-agnostic: the
//! HTTP layer calls into this, and tests drive it directly.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::Post;
use crate::sanitize::sanitize;
use crate::traits::PostRepo;

/// Orchestrates post creation and listing over an injected store.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepo>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepo>) -> Self {
        Self { repo }
    }

    /// Lists every post in the store's natural order.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.repo.list().await
    }

    /// Creates a post from untrusted input.
    ///
    /// Both fields are HTML-escaped first; if either is empty afterwards the
    /// post is rejected with [`AppError::Validation`] and nothing is stored.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<Post> {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            title: sanitize(title),
            content: sanitize(content),
        };

        if post.title.is_empty() || post.content.is_empty() {
            return Err(AppError::Validation(
                "title and content are required".to_string(),
            ));
        }

        self.repo.create(&post).await?;
        tracing::debug!(post_id = %post.id, "post created");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockPostRepo;
    use std::collections::HashSet;

    fn service_with(repo: MockPostRepo) -> PostService {
        PostService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_post_assigns_id_and_sanitizes() {
        let mut repo = MockPostRepo::new();
        repo.expect_create()
            .withf(|p| p.title == "&lt;b&gt;Hi&lt;/b&gt;" && p.content == "body")
            .times(1)
            .returning(|_| Ok(()));

        let post = service_with(repo)
            .create_post("<b>Hi</b>", "body")
            .await
            .unwrap();

        assert!(!post.id.is_empty());
        assert!(Uuid::parse_str(&post.id).is_ok());
        assert_eq!(post.title, "&lt;b&gt;Hi&lt;/b&gt;");
    }

    #[tokio::test]
    async fn test_create_post_ids_are_unique() {
        let mut repo = MockPostRepo::new();
        repo.expect_create().times(50).returning(|_| Ok(()));
        let service = service_with(repo);

        let mut ids = HashSet::new();
        for _ in 0..50 {
            let post = service.create_post("t", "c").await.unwrap();
            assert!(ids.insert(post.id));
        }
    }

    #[tokio::test]
    async fn test_empty_fields_are_rejected_before_storage() {
        let mut repo = MockPostRepo::new();
        repo.expect_create().never();
        let service = service_with(repo);

        let err = service.create_post("", "content").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = service.create_post("title", "").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_unchanged() {
        let mut repo = MockPostRepo::new();
        repo.expect_create()
            .returning(|_| Err(AppError::Storage("disk full".into())));
        repo.expect_list()
            .returning(|| Err(AppError::Storage("locked".into())));
        let service = service_with(repo);

        assert_eq!(
            service.create_post("t", "c").await.unwrap_err(),
            AppError::Storage("disk full".into())
        );
        assert_eq!(
            service.list_posts().await.unwrap_err(),
            AppError::Storage("locked".into())
        );
    }

    #[tokio::test]
    async fn test_list_posts_delegates_to_store() {
        let mut repo = MockPostRepo::new();
        repo.expect_list().times(1).returning(|| {
            Ok(vec![Post {
                id: "1".into(),
                title: "T".into(),
                content: "C".into(),
            }])
        });

        let posts = service_with(repo).list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "T");
    }
}
