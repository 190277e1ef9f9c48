//! Feed sync service
//!
//! Drives fetch -> render cycles and translates user intents into
//! remote calls. Every successful mutation triggers a full feed
//! refresh; a failed call leaves the last rendered view untouched and
//! reports the failure through the notifier and the log.
//!
//! Operations take `&self` and are not serialized against each other,
//! so several can be in flight at once. Overlapping refreshes are
//! resolved by the view's fetch token: the snapshot requested last
//! wins, regardless of the order responses arrive in.

use std::sync::Arc;

use crate::domain::entities::PostId;
use crate::domain::ports::{Notifier, PostsApi};
use crate::error::ApiError;
use crate::feed::{render_feed, FeedView};

pub struct FeedSyncService<A, N>
where
    A: PostsApi,
    N: Notifier,
{
    api: Arc<A>,
    notifier: Arc<N>,
    view: Arc<FeedView>,
}

impl<A, N> FeedSyncService<A, N>
where
    A: PostsApi,
    N: Notifier,
{
    pub fn new(api: Arc<A>, notifier: Arc<N>, view: Arc<FeedView>) -> Self {
        Self {
            api,
            notifier,
            view,
        }
    }

    /// Fetch the feed and re-render the view from the snapshot
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let token = self.view.begin_fetch();
        let posts = match self.api.fetch_posts().await {
            Ok(posts) => posts,
            Err(e) => return Err(self.report(e)),
        };

        tracing::debug!(token, posts = posts.len(), "fetched feed snapshot");
        if !self.view.apply(token, render_feed(&posts)) {
            tracing::debug!(token, "discarded stale feed render");
        }
        Ok(())
    }

    /// Create a post, then reconcile
    ///
    /// Content is forwarded as-is, empty or not; the server decides
    /// whether to accept it.
    pub async fn create_post(&self, content: &str) -> Result<(), ApiError> {
        match self.api.add_post(content).await {
            Ok(()) => self.refresh().await,
            Err(e) => Err(self.report(e)),
        }
    }

    /// Like a post, then reconcile
    pub async fn like_post(&self, id: PostId) -> Result<(), ApiError> {
        match self.api.like_post(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => Err(self.report(e)),
        }
    }

    /// Dislike a post, then reconcile
    pub async fn dislike_post(&self, id: PostId) -> Result<(), ApiError> {
        match self.api.dislike_post(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => Err(self.report(e)),
        }
    }

    /// Request a share link and hand it to the notifier
    ///
    /// Sharing mutates nothing the feed shows, so there is no refresh.
    pub async fn share_post(&self, id: PostId) -> Result<String, ApiError> {
        match self.api.share_post(id).await {
            Ok(link) => {
                self.notifier.share_link(&link);
                Ok(link)
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// Comment on a post, then reconcile
    pub async fn add_comment(&self, id: PostId, content: &str) -> Result<(), ApiError> {
        match self.api.add_comment(id, content).await {
            Ok(()) => self.refresh().await,
            Err(e) => Err(self.report(e)),
        }
    }

    fn report(&self, error: ApiError) -> ApiError {
        tracing::warn!(endpoint = error.endpoint(), %error, "remote call failed");
        self.notifier.remote_failure(&error);
        error
    }
}
