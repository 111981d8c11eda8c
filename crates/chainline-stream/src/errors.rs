use thiserror::Error;

/// Errors that can occur during stream operations.
#[derive(Error, Debug)]
pub enum StreamError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid stream header (magic, version, or name field).
    #[error("invalid stream header: {0}")]
    InvalidHeader(String),
    /// The file stores a different stream than the caller asked for.
    #[error("stream name mismatch: expected '{expected}', file stores '{found}'")]
    NameMismatch {
        /// Name the caller expected.
        expected: String,
        /// Name recorded in the file header.
        found: String,
    },
    /// Invalid frame structure (kind, reserved bytes, or length).
    #[error("invalid frame at offset {offset}: {reason}")]
    InvalidFrame {
        /// Byte offset where the frame starts.
        offset: u64,
        /// Reason for invalidity.
        reason: String,
    },
    /// Payload exceeds the maximum record size.
    #[error("payload size {size} exceeds maximum {max}")]
    PayloadTooLarge {
        /// Actual payload size.
        size: u32,
        /// Maximum allowed size.
        max: u32,
    },
    /// Truncated frame detected in strict mode.
    #[error("truncated frame at offset {offset}")]
    TruncatedFrame {
        /// Byte offset where truncation occurred.
        offset: u64,
    },
    /// Invalid UTF-8 in a record payload.
    #[error("invalid UTF-8 in record payload: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// Invalid JSON in a record payload.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
