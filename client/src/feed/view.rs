//! Feed view state
//!
//! The single render target shared by every in-flight operation. Each
//! fetch cycle reserves a token before issuing its request; a finished
//! render is applied only if its token is newer than the last applied
//! one, so a slow response can never overwrite a newer snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

#[derive(Default)]
pub struct FeedView {
    next_token: AtomicU64,
    applied: RwLock<Applied>,
}

#[derive(Default)]
struct Applied {
    token: u64,
    markup: String,
}

impl FeedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a token for a fetch cycle that is about to start
    pub fn begin_fetch(&self) -> u64 {
        self.next_token.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Replace the rendered markup if `token` is newer than the last
    /// applied render. Returns false when the render was stale and got
    /// discarded.
    pub fn apply(&self, token: u64, markup: String) -> bool {
        let mut applied = self.applied.write().unwrap();
        if token <= applied.token {
            return false;
        }
        applied.token = token;
        applied.markup = markup;
        true
    }

    /// Markup of the last applied render (empty before the first one)
    pub fn markup(&self) -> String {
        self.applied.read().unwrap().markup.clone()
    }
}
