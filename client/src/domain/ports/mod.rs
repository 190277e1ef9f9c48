//! Domain ports (traits)
//!
//! Port traits define what the sync layer needs from the outside world.
//! Adapters provide the concrete implementations.

pub mod notifier;
pub mod posts_api;

pub use notifier::{NoopNotifier, Notifier};
pub use posts_api::PostsApi;
