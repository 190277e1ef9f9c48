//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Comment, Post, PostId};

/// Create a test post with zero counters and no comments
pub fn test_post(id: i64, content: &str) -> Post {
    Post {
        id: PostId(id),
        content: content.to_string(),
        likes: 0,
        dislikes: 0,
        comments: Vec::new(),
    }
}

/// Create a test post with comments
pub fn test_post_with_comments(id: i64, content: &str, comments: &[&str]) -> Post {
    Post {
        comments: comments
            .iter()
            .map(|c| Comment {
                content: c.to_string(),
            })
            .collect(),
        ..test_post(id, content)
    }
}
