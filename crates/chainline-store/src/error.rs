//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Stream backend error.
    #[error("stream error: {0}")]
    Stream(#[from] chainline_stream::StreamError),
    /// Parse error during record parsing.
    #[error("parse error: {0}")]
    Parse(#[from] crate::typed::ParseError),
    /// Other error.
    #[error("{0}")]
    Other(String),
}
