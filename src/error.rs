//! Error taxonomy for the pipeline and its collaborators.
//!
//! Local recovery is preferred at every stage: `ModelError` is absorbed by
//! the tone fallback and the fixed stats defaults, `CacheError` degrades to
//! the in-process memory mirror. Only truly unhandled conditions reach the
//! caller, and then as a single opaque failure with a description.

use thiserror::Error;

/// Failure of the model collaborator. Absence of credentials is *not* an
/// error — that is a checked condition handled with canned content before
/// any call is attempted.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("authentication failed - check your API key")]
    Auth,

    #[error("access forbidden - insufficient permissions")]
    Forbidden,

    #[error("rate limit exceeded - too many requests")]
    RateLimited,

    #[error("request timeout - the API took too long to respond")]
    Timeout,

    #[error("connection error - unable to reach the API")]
    Connect,

    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed API response: {0}")]
    Malformed(String),

    #[error("API returned empty content")]
    EmptyContent,
}

/// Failure of the durable cache backend. Always logged and swallowed inside
/// `MemoryStore`; never propagates to a request.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),

    #[error("cache read failed: {0}")]
    Read(String),

    #[error("cache write failed: {0}")]
    Write(String),

    #[error("stored entry is not valid JSON: {0}")]
    Corrupt(String),
}

impl From<rusqlite::Error> for CacheError {
    fn from(e: rusqlite::Error) -> Self {
        CacheError::Unavailable(e.to_string())
    }
}

/// What the engine surfaces to the (excluded) transport layer.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("model call failed: {0}")]
    Model(#[from] ModelError),

    #[error("analysis failed: {0}")]
    Unexpected(String),
}
