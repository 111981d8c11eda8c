//! Storage backend traits.

use crate::error::StoreError;
use crate::RecordJson;

/// Append-only record writer.
pub trait StoreWriter {
    /// Appends one record to the store.
    fn append(&mut self, record: &RecordJson) -> Result<(), StoreError>;
}

/// Sequential record reader.
pub trait StoreReader {
    /// Reads the next record, or `None` at end of stream.
    fn read_next(&mut self) -> Result<Option<RecordJson>, StoreError>;
}
