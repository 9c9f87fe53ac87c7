//! Error types for the Mastermind API client.
//!
//! # Design
//! One closed enum covers every way a remote operation can fail, so the game
//! loop matches a single type when turning failures into user-facing text.
//! `Api` gets a dedicated variant because the server reports domain errors
//! (unknown game id, rejected guess) as `{"error": "..."}` bodies that
//! deserve their own message, distinct from an arbitrary non-200 landing in
//! `InvalidResponse` with the raw status and body for debugging.

use std::fmt;

/// Errors surfaced by client operations and the hosts that execute them.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be constructed (malformed URL or body).
    InvalidRequest(String),

    /// Transport-level failure reaching the server (DNS, connection refused,
    /// timeout). Produced by the executing host, never by the core itself.
    Network(String),

    /// The server returned 200 but the body did not match the expected shape.
    Decoding(String),

    /// The server explicitly reported a domain-level error message.
    Api(String),

    /// A non-200 status not otherwise classified as `Api`.
    InvalidResponse { status: u16, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Decoding(msg) => write!(f, "decoding failed: {msg}"),
            ApiError::Api(msg) => write!(f, "API error: {msg}"),
            ApiError::InvalidResponse { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
