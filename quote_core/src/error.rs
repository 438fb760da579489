//! Error types shared by the quote store, the reconciler and the client.
//!
//! The `QuoteError` enum unifies common failure cases for I/O, serialization,
//! HTTP transport, record validation and lock handling, allowing the workspace to
//! propagate a single error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by the library and the command-line client.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library (files, directories).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Transport-level HTTP failure (connection refused, timeout, undecodable body).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote endpoint answered with a non-success status code.
    #[error("Remote endpoint returned status {0}")]
    HttpStatus(u16),

    /// A quote record failed validation (blank text or category).
    #[error("Invalid quote: {0}")]
    InvalidQuote(String),

    /// An imported document was rejected; nothing was applied.
    #[error("Import rejected: {0}")]
    Import(String),

    /// Installing the process signal handler failed.
    #[error("Signal handler error: {0}")]
    Signal(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
