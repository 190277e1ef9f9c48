//! Mock implementations of port traits
//!
//! `InMemoryPostsApi` is a stand-in for the PostFlow server: mutations
//! update an in-memory feed the same way the real backend does (like
//! increments by one, comments append in order), and any endpoint can
//! be switched to fail to exercise error paths.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Comment, Post, PostId};
use crate::domain::ports::{Notifier, PostsApi};
use crate::error::ApiError;

#[derive(Default)]
pub struct InMemoryPostsApi {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicI64,
    failing: RwLock<HashSet<&'static str>>,
}

impl InMemoryPostsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a post for testing
    pub fn with_post(self, post: Post) -> Self {
        {
            let mut posts = self.posts.write().unwrap();
            self.next_id.fetch_max(post.id.0, Ordering::Relaxed);
            posts.push(post);
        }
        self
    }

    /// Make every call to `endpoint` fail with a 500 until restored
    pub fn fail_endpoint(&self, endpoint: &'static str) {
        self.failing.write().unwrap().insert(endpoint);
    }

    /// Let calls to `endpoint` succeed again
    pub fn restore_endpoint(&self, endpoint: &'static str) {
        self.failing.write().unwrap().remove(endpoint);
    }

    /// Current server-side feed, for assertions
    pub fn posts(&self) -> Vec<Post> {
        self.posts.read().unwrap().clone()
    }

    fn check(&self, endpoint: &'static str) -> Result<(), ApiError> {
        if self.failing.read().unwrap().contains(endpoint) {
            return Err(ApiError::Status {
                endpoint,
                status: 500,
                body: "injected failure".to_string(),
            });
        }
        Ok(())
    }

    fn with_post_mut<T>(
        &self,
        endpoint: &'static str,
        id: PostId,
        f: impl FnOnce(&mut Post) -> T,
    ) -> Result<T, ApiError> {
        let mut posts = self.posts.write().unwrap();
        match posts.iter_mut().find(|p| p.id == id) {
            Some(post) => Ok(f(post)),
            None => Err(ApiError::Status {
                endpoint,
                status: 404,
                body: format!("no post with id {id}"),
            }),
        }
    }
}

#[async_trait]
impl PostsApi for InMemoryPostsApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.check("/posts")?;
        Ok(self.posts())
    }

    async fn add_post(&self, content: &str) -> Result<(), ApiError> {
        self.check("/add_post")?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.posts.write().unwrap().push(Post {
            id: PostId(id),
            content: content.to_string(),
            likes: 0,
            dislikes: 0,
            comments: Vec::new(),
        });
        Ok(())
    }

    async fn like_post(&self, id: PostId) -> Result<(), ApiError> {
        self.check("/like_post")?;
        self.with_post_mut("/like_post", id, |post| post.likes += 1)
    }

    async fn dislike_post(&self, id: PostId) -> Result<(), ApiError> {
        self.check("/dislike_post")?;
        self.with_post_mut("/dislike_post", id, |post| post.dislikes += 1)
    }

    async fn share_post(&self, id: PostId) -> Result<String, ApiError> {
        self.check("/share_post")?;
        // Same link format the real backend uses; sharing mutates nothing
        self.with_post_mut("/share_post", id, |post| {
            format!("https://postflow.com/post/{}", post.id)
        })
    }

    async fn add_comment(&self, id: PostId, content: &str) -> Result<(), ApiError> {
        self.check("/add_comment")?;
        let comment = Comment {
            content: content.to_string(),
        };
        self.with_post_mut("/add_comment", id, |post| post.comments.push(comment))
    }
}

/// Notifier that records everything it is handed
#[derive(Default)]
pub struct RecordingNotifier {
    share_links: Mutex<Vec<String>>,
    failures: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn share_links(&self) -> Vec<String> {
        self.share_links.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn share_link(&self, link: &str) {
        self.share_links.lock().unwrap().push(link.to_string());
    }

    fn remote_failure(&self, error: &ApiError) {
        self.failures.lock().unwrap().push(error.to_string());
    }
}
