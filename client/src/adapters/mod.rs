//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod notify;

pub use http::HttpPostsApi;
pub use notify::TerminalNotifier;
