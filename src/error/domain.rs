//! Domain-specific error types using `thiserror`.
//!
//! Settings errors live next to the persistence code in
//! [`crate::config::settings`]; this module covers generation requests and
//! the track library.

use std::result::Result as StdResult;

use {anyhow::Error, serde_json::Error as SerdeJsonError, thiserror::Error};

/// Errors raised while preparing or submitting a generation request.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The prompt is empty, so there is nothing to generate from.
    #[error("Prompt is empty")]
    EmptyPrompt,
    /// A request is already in flight.
    #[error("A generation request is already running")]
    AlreadyGenerating,
    /// The generation service rejected or failed the request.
    #[error("Generation request failed: {reason}")]
    RequestFailed { reason: String },
    /// The parameter payload could not be encoded.
    #[error("Payload encoding error: {0}")]
    PayloadError(#[from] SerdeJsonError),
}

/// Track library errors.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// No track with the given identifier.
    #[error("Track not found: {id}")]
    NotFound { id: String },
    /// Track data that cannot be used as-is.
    #[error("Invalid track data: {reason}")]
    InvalidData { reason: String },
}

/// Operational result carrying `anyhow` context.
pub type Result<T> = StdResult<T, Error>;
