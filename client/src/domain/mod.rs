//! Domain layer
//!
//! Contains the client's pure types and port traits.
//! - `entities`: the post/comment snapshot model
//! - `ports`: trait definitions for external dependencies

pub mod entities;
pub mod ports;
