//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The in-memory posts API behaves like a tiny PostFlow server, so
//! refresh-after-mutation round trips can be tested end to end without
//! a network.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
