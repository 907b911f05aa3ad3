//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{Post, PostChanges, PostDraft};

/// A post as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub slug: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            tags: post.tags,
            created_at: post.created_at,
            updated_at: post.updated_at,
            slug: post.slug,
        }
    }
}

/// Request to create a post.
///
/// Missing fields deserialize as empty so they are reported by validation
/// instead of failing as malformed JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl From<CreatePostRequest> for PostDraft {
    fn from(req: CreatePostRequest) -> Self {
        PostDraft::new(req.title, req.content, req.author, req.tags)
    }
}

impl From<PostDraft> for CreatePostRequest {
    fn from(draft: PostDraft) -> Self {
        Self {
            title: draft.title,
            content: draft.content,
            author: draft.author,
            tags: draft.tags,
        }
    }
}

/// Request to update a post. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<UpdatePostRequest> for PostChanges {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            author: req.author,
            tags: req.tags,
        }
    }
}

impl From<PostDraft> for UpdatePostRequest {
    fn from(draft: PostDraft) -> Self {
        Self {
            title: Some(draft.title),
            content: Some(draft.content),
            author: Some(draft.author),
            tags: Some(draft.tags),
        }
    }
}

/// Response for `GET /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
}

/// Response for `DELETE /api/posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub message: String,
    pub post: PostResponse,
}

/// Response for `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
