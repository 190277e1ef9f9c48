//! HTTP adapter for the PostFlow API

pub mod client;

pub use client::HttpPostsApi;
