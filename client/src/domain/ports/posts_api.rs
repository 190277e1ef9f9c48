//! Posts API port trait
//!
//! Defines the interface to the remote posts service, one method per
//! endpoint. Content strings are forwarded exactly as given, empty or
//! not; accepting or rejecting them is the server's call.

use async_trait::async_trait;

use crate::domain::entities::{Post, PostId};
use crate::error::ApiError;

/// Interface to the remote posts service
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch the full feed snapshot
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Create a new post
    async fn add_post(&self, content: &str) -> Result<(), ApiError>;

    /// Like a post
    async fn like_post(&self, id: PostId) -> Result<(), ApiError>;

    /// Dislike a post
    async fn dislike_post(&self, id: PostId) -> Result<(), ApiError>;

    /// Request a shareable link for a post
    async fn share_post(&self, id: PostId) -> Result<String, ApiError>;

    /// Add a comment to a post
    async fn add_comment(&self, id: PostId, content: &str) -> Result<(), ApiError>;
}
