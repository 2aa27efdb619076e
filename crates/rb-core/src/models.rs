//! # Domain Models
//!
//! A bulletin board has exactly one entity: the post.

use serde::{Deserialize, Serialize};

/// A single bulletin-board entry.
///
/// `id` is assigned by the server on creation and never changes; `title`
/// and `content` are stored already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Body of `POST /posts`.
///
/// Both fields are required strings. Anything else the client sends
/// (including an `id`) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_serializes_to_flat_object() {
        let post = Post {
            id: "abc".into(),
            title: "T".into(),
            content: "C".into(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": "abc", "title": "T", "content": "C" })
        );
    }

    #[test]
    fn test_new_post_ignores_client_id() {
        let req: NewPost =
            serde_json::from_str(r#"{"id":"mine","title":"T","content":"C"}"#).unwrap();
        assert_eq!(req.title, "T");
        assert_eq!(req.content, "C");
    }

    #[test]
    fn test_new_post_rejects_missing_or_mistyped_fields() {
        assert!(serde_json::from_str::<NewPost>(r#"{"title":"T"}"#).is_err());
        assert!(serde_json::from_str::<NewPost>(r#"{"title":1,"content":"C"}"#).is_err());
        assert!(serde_json::from_str::<NewPost>("not json").is_err());
    }
}
