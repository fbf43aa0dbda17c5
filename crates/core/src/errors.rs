//! Core error types for the Treem investor dashboard.
//!
//! This module defines store-agnostic error types. Store-specific errors
//! (HTTP transport, PostgREST responses, etc.) are converted to these types
//! by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard backend.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for operations against the hosted data store.
///
/// The storage layer converts transport and response errors into this format;
/// details are kept as `String` so this type stays free of client-library types.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("Failed to reach data store: {0}")]
    Unavailable(String),

    /// The store rejected or failed the query.
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The store answered with a body this system could not decode.
    #[error("Malformed store response: {0}")]
    MalformedResponse(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
