//! Service-level behaviour against both real stores, no HTTP involved.

use std::collections::HashSet;
use std::sync::Arc;

use integration_tests::sqlite_store;
use rb_core::{AppError, PostRepo, PostService};
use rb_db_memory::MemoryPostRepo;

async fn exercise(service: PostService) {
    assert!(service.list_posts().await.unwrap().is_empty());

    let mut ids = HashSet::new();
    for i in 0..10 {
        let post = service
            .create_post(&format!("title {i}"), "content")
            .await
            .unwrap();
        assert!(!post.id.is_empty());
        assert!(ids.insert(post.id));
    }
    assert_eq!(service.list_posts().await.unwrap().len(), 10);

    assert!(matches!(
        service.create_post("", "").await,
        Err(AppError::Validation(_))
    ));
    assert_eq!(service.list_posts().await.unwrap().len(), 10);
}

#[tokio::test]
async fn sqlite_backed_service() {
    let repo: Arc<dyn PostRepo> = sqlite_store().await;
    exercise(PostService::new(repo)).await;
}

#[tokio::test]
async fn memory_backed_service() {
    exercise(PostService::new(Arc::new(MemoryPostRepo::new()))).await;
}

#[tokio::test]
async fn sqlite_lists_newest_first_memory_in_append_order() {
    let sqlite = PostService::new(sqlite_store().await);
    let memory = PostService::new(Arc::new(MemoryPostRepo::new()));

    for service in [&sqlite, &memory] {
        service.create_post("first", "1").await.unwrap();
        service.create_post("second", "2").await.unwrap();
    }

    let titles = |posts: Vec<rb_core::Post>| posts.into_iter().map(|p| p.title).collect::<Vec<_>>();
    assert_eq!(titles(sqlite.list_posts().await.unwrap()), ["second", "first"]);
    assert_eq!(titles(memory.list_posts().await.unwrap()), ["first", "second"]);
}

#[tokio::test]
async fn stored_fields_are_escaped() {
    let repo = sqlite_store().await;
    let service = PostService::new(repo.clone());
    service
        .create_post("<img src=x onerror=alert(1)>", "\"quoted\" & <b>")
        .await
        .unwrap();

    let stored = repo.list().await.unwrap().remove(0);
    for field in [&stored.title, &stored.content] {
        assert!(!field.contains('<'));
        assert!(!field.contains('>'));
        assert!(!field.contains('"'));
    }
}
