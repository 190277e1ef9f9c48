//! User notification port
//!
//! One-off messages that leave the sync layer: share links on success,
//! remote failures the user should hear about. The terminal adapter
//! prints them; swapping in `NoopNotifier` makes failures log-only.

use crate::error::ApiError;

pub trait Notifier: Send + Sync {
    /// Present a share link produced by a successful share
    fn share_link(&self, link: &str);

    /// Report a failed remote call
    fn remote_failure(&self, error: &ApiError);
}

/// Notifier that drops everything
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn share_link(&self, _link: &str) {}

    fn remote_failure(&self, _error: &ApiError) {}
}
