//! Error types for the todo client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because remove() treats "the item is
//! already gone" as benign while every other caller surfaces it. All other
//! non-2xx responses land in `Status` with the raw code and body so the
//! view layer can show the server's own message. Transport failures
//! (unreachable, refused, timed out) are kept distinct from protocol
//! failures so the transport's retry policy only ever applies to them.

use std::fmt;

/// Errors surfaced by client operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never completed: network unreachable, connection
    /// refused, or the per-request timeout elapsed. Already retried up to
    /// the transport's budget by the time it surfaces.
    Transport(String),

    /// The server returned 404 — the addressed item does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Status { status: u16, body: String },

    /// The response body could not be decoded into the expected type. The
    /// prior collection state is kept when this happens.
    MalformedBody(String),

    /// The request payload could not be encoded to JSON.
    Serialize(String),

    /// The draft title is empty after trimming; no request was issued.
    EmptyTitle,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ClientError::NotFound => write!(f, "item not found"),
            ClientError::Status { status, body } => write!(f, "server error HTTP {status}: {body}"),
            ClientError::MalformedBody(msg) => write!(f, "could not decode response: {msg}"),
            ClientError::Serialize(msg) => write!(f, "could not encode request: {msg}"),
            ClientError::EmptyTitle => write!(f, "title must not be empty"),
        }
    }
}

impl std::error::Error for ClientError {}
