//! Stream-file-backed storage implementation.

use std::path::Path;

use chainline_stream::{ReadMode, StreamReader, StreamWriter, WriteOptions};

use crate::error::StoreError;
use crate::traits::{StoreReader, StoreWriter};
use crate::RecordJson;

/// Store writer backed by a stream file.
pub struct StreamBackendWriter {
    inner: StreamWriter,
}

impl StreamBackendWriter {
    /// Opens or creates a stream file for appending.
    pub fn open<P: AsRef<Path>>(
        path: P,
        stream_name: &str,
        options: WriteOptions,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            inner: StreamWriter::open(path, stream_name, options)?,
        })
    }

    /// Name of the stream this writer appends to.
    pub fn stream_name(&self) -> &str {
        self.inner.stream_name()
    }

    /// Finishes writing and closes the file.
    pub fn finish(self) -> Result<(), StoreError> {
        Ok(self.inner.finish()?)
    }
}

impl StoreWriter for StreamBackendWriter {
    fn append(&mut self, record: &RecordJson) -> Result<(), StoreError> {
        Ok(self.inner.append_record(record)?)
    }
}

/// Store reader backed by a stream file.
pub struct StreamBackendReader {
    inner: StreamReader,
}

impl StreamBackendReader {
    /// Opens a stream file for reading.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, StoreError> {
        Ok(Self {
            inner: StreamReader::open(path, mode)?,
        })
    }

    /// Name of the stream the file stores.
    pub fn stream_name(&self) -> &str {
        self.inner.stream_name()
    }
}

impl StoreReader for StreamBackendReader {
    fn read_next(&mut self) -> Result<Option<RecordJson>, StoreError> {
        Ok(self.inner.read_record()?)
    }
}
