//! Feed module
//!
//! Rendering of feed snapshots and the shared view state that holds the
//! latest rendered output.

pub mod renderer;
pub mod view;

pub use renderer::render_feed;
pub use view::FeedView;
