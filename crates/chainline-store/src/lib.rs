//! Storage abstraction and derived views over chainline event streams.
//!
//! This crate provides:
//! - `StoreWriter` and `StoreReader` traits for append-only record storage
//! - Default stream-file-backed implementations using `chainline-stream`
//! - Record filtering API for selective iteration
//! - Typed record parsing
//! - The derived address/status projection consumed by presentation layers
//!
//! The stream-file backend is the reference implementation; the traits
//! leave room for other backends (managed log services, in-memory).
//!
#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// Record filtering API.
pub mod filter;
/// Stream-file-backed storage implementation.
pub mod stream;
/// Storage backend traits.
pub mod traits;
/// Typed record parsing.
pub mod typed;
/// Derived views over record histories.
pub mod view;

pub use chainline_stream::{ReadMode, RecordJson, WriteOptions};
pub use error::StoreError;
pub use filter::{
    AddressFilter, AndFilter, EventTypeFilter, FilteredReader, OrFilter, RecordFilter,
    TimeRangeFilter,
};
pub use stream::{StreamBackendReader, StreamBackendWriter};
pub use traits::{StoreReader, StoreWriter};
pub use typed::{parse_record, ParseError, TypedRecord};
pub use view::{address_view, history_for, latest_status, AddressView};
