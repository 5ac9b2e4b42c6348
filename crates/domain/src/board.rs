//! Board service payloads
//!
//! Wire shapes for the board API this client talks to. Field names follow
//! the server's JSON (`_id`, `createdAt`), mapped to Rust naming here.

use serde::{Deserialize, Serialize};

/// Standard `{ ok, item }` response envelope of the board API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEnvelope<T> {
    /// 1 on success, 0 on failure.
    #[serde(default)]
    pub ok: u8,
    /// The payload.
    pub item: T,
}

/// A post or reply author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Server-side user id.
    #[serde(rename = "_id")]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Profile image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A board post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Server-side post id.
    #[serde(rename = "_id")]
    pub id: i64,
    /// Board the post belongs to (e.g. `free`, `info`, `qna`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub board_type: Option<String>,
    /// Post title.
    pub title: String,
    /// Post body.
    #[serde(default)]
    pub content: String,
    /// View counter.
    #[serde(default)]
    pub views: i64,
    /// Author, when the server expands it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Author>,
    /// Creation timestamp, as formatted by the server.
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A reply on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Server-side reply id.
    #[serde(rename = "_id")]
    pub id: i64,
    /// Reply body.
    pub content: String,
    /// Author, when the server expands it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Author>,
    /// Creation timestamp, as formatted by the server.
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    /// Target board.
    #[serde(rename = "type")]
    pub board_type: String,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

impl NewPost {
    /// Creates a new post input.
    #[must_use]
    pub fn new(
        board_type: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            board_type: board_type.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_post_decodes_server_field_names() {
        let json = r#"{
            "_id": 1,
            "type": "free",
            "title": "hello",
            "content": "first post",
            "views": 12,
            "user": { "_id": 4, "name": "yong" },
            "createdAt": "2024.12.05 10:00:00"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.board_type.as_deref(), Some("free"));
        assert_eq!(post.user.unwrap().name, "yong");
    }

    #[test]
    fn test_post_tolerates_sparse_payloads() {
        let post: Post = serde_json::from_str(r#"{"_id": 2, "title": "t"}"#).unwrap();
        assert_eq!(post.views, 0);
        assert!(post.user.is_none());
        assert!(post.created_at.is_none());
    }

    #[test]
    fn test_envelope_wraps_item_lists() {
        let json = r#"{"ok": 1, "item": [{"_id": 5, "content": "nice"}]}"#;
        let envelope: ItemEnvelope<Vec<Reply>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.ok, 1);
        assert_eq!(envelope.item.len(), 1);
        assert_eq!(envelope.item[0].content, "nice");
    }

    #[test]
    fn test_new_post_serializes_board_type_as_type() {
        let new_post = NewPost::new("qna", "question", "how?");
        let json = serde_json::to_string(&new_post).unwrap();
        assert!(json.contains(r#""type":"qna""#));
    }
}
