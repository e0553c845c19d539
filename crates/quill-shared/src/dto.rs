//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Post, PostFields};

/// Request to sign in to the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response carrying a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Body of create and update requests.
///
/// Missing keys deserialize as empty strings so validation can name them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: Option<String>,
    pub meta_description: String,
}

impl From<PostPayload> for PostFields {
    fn from(payload: PostPayload) -> Self {
        Self {
            title: payload.title,
            content: payload.content,
            author: payload.author,
            image_url: payload.image_url,
            meta_description: payload.meta_description,
        }
    }
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub meta_description: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            image_url: post.image_url,
            meta_description: post.meta_description,
            slug: post.slug,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_uses_camel_case_and_defaults() {
        let payload: PostPayload =
            serde_json::from_str(r#"{"title":"T","metaDescription":"M"}"#).unwrap();

        assert_eq!(payload.title, "T");
        assert_eq!(payload.meta_description, "M");
        assert!(payload.author.is_empty());
        assert!(payload.image_url.is_none());
    }

    #[test]
    fn test_response_omits_absent_update_time() {
        let post = Post {
            id: Uuid::nil(),
            title: "T".to_string(),
            content: "C".to_string(),
            author: "A".to_string(),
            image_url: None,
            meta_description: "M".to_string(),
            slug: "t".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let json = serde_json::to_value(PostResponse::from(post)).unwrap();

        assert!(json.get("updatedAt").is_none());
        assert!(json.get("imageUrl").is_none());
        assert_eq!(json["slug"], "t");
    }
}
