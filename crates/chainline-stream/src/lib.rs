//! File-backed append-only stream for address-lifecycle records.
//!
//! This crate provides:
//! - Framed, append-only storage for record JSON
//! - A stream header that names the stream it stores (e.g. `production-events`)
//! - Reader/writer APIs with strict and permissive modes
//!
//! Records are exactly the five canonical columns defined by
//! `chainline-model`; the record-format version lives in the stream
//! header, so records themselves never grow a version column. Nothing in
//! a stream file is ever rewritten: writers only append frames.
//!
#![deny(missing_docs)]

/// Error types for stream operations.
pub mod errors;
/// Header and frame structures.
pub mod frame;
/// Stream reader implementation.
pub mod reader;
/// Record JSON type alias and helpers.
pub mod record;
/// Stream writer implementation.
pub mod writer;

pub use errors::StreamError;
pub use frame::{FrameKind, RecordFrame, StreamHeader};
pub use reader::{ReadMode, StreamReader};
pub use record::{has_canonical_columns, RecordJson};
pub use writer::{StreamWriter, WriteOptions};
