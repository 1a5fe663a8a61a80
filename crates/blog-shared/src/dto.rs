//! Data Transfer Objects - request/response types for the API.
//!
//! Wire field names are camelCase and timestamps are UTC ISO-8601.

use blog_core::domain::BlogPost;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a blog post.
///
/// Missing fields default to empty strings so that they surface as field-level
/// validation errors instead of a deserialization failure. Any client-supplied
/// id or timestamps are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Request to replace the mutable fields of a blog post.
///
/// The body id must match the path id; `id` defaults to 0 when absent, which
/// the server rejects as a mismatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
}

/// A blog post as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Paged envelope for list queries.
///
/// `total` counts every row matching the filters, not just this page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub items: Vec<T>,
}
