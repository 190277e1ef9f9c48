//! Application layer
//!
//! The feed sync service and the command surface that drives it.

pub mod command;
pub mod sync;

pub use command::{help_text, parse_command, UserAction};
pub use sync::FeedSyncService;
