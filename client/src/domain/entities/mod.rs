//! Domain entities
//!
//! The client's in-memory copy of server-side posts. Every entity here
//! is a disposable snapshot, rebuilt wholesale on each successful fetch.

pub mod post;

pub use post::{Comment, Post, PostId};
