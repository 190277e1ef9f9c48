//! Post domain entities
//!
//! A `Post` is one server-side post as the client last saw it: user
//! content plus like/dislike counters and comments in display order.
//! All mutation happens server-side; the client only decodes snapshots.

use serde::{Deserialize, Serialize};

/// Unique identifier for a post, assigned by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub i64);

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single post as returned by `GET /posts`
///
/// The server may omit `comments` entirely for posts without any;
/// decoding treats that as an empty sequence. Unknown fields in the
/// JSON are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub likes: u32,
    pub dislikes: u32,
    /// Comments in display order
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment on a post
///
/// The server attaches its own comment id, but the client never needs
/// one: comments have no independent identity here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
}
