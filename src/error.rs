//! Error types for logoprint.

use std::io;
use thiserror::Error;

/// Result type alias for logoprint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while requesting or rendering printable material.
#[derive(Error, Debug)]
pub enum Error {
    /// The generator endpoint is missing or still a placeholder.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The generator answered with a non-success status.
    #[error("{message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Message taken from the response body, or `HTTP <status>`
        message: String,
    },

    /// The response parsed but yielded neither a document nor any card items.
    #[error("No printable content returned")]
    NoPrintableContent,

    /// The rendered document could not be handed to a viewer for printing.
    #[error("Could not print: {0}")]
    Print(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// HTTP status code, if this error came from a generator response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
