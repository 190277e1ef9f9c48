//! Error types for the PostFlow client
//!
//! This module defines error types for each layer:
//! - `ApiError`: remote call failures at the HTTP boundary
//! - `ParseError`: command parsing errors in the terminal front end

use thiserror::Error;

/// A failed remote call, tagged with the endpoint it was issued against.
///
/// Transport failures, non-2xx statuses, and malformed response bodies
/// all collapse into this one kind; callers never distinguish beyond
/// "the call did not produce a usable result".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("could not decode {endpoint} response: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
}

impl ApiError {
    /// The endpoint path of the failing call
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiError::Request { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}

/// Parse errors for terminal commands
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),

    #[error("Invalid post id: {0}")]
    InvalidPostId(#[from] std::num::ParseIntError),
}
