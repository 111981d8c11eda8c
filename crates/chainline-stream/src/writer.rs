//! Stream writer implementation.

use std::fs::{File, OpenOptions};
use std::io::{self, Seek, Write};
use std::path::Path;

use crate::errors::StreamError;
use crate::frame::{FrameKind, RecordFrame, StreamHeader};
use crate::record::RecordJson;

/// Options for stream writing.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Whether to fsync after each append (default: false).
    pub sync: bool,
    /// Whether to create the file if it doesn't exist (default: true).
    pub create: bool,
    /// Whether to append to an existing file (default: true).
    pub append: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            sync: false,
            create: true,
            append: true,
        }
    }
}

/// Append-only writer for a stream file.
///
/// A new file gets a header naming the stream; an existing file must
/// already store the same stream name, otherwise opening fails with
/// [`StreamError::NameMismatch`]. Records are framed JSON, appended and
/// never rewritten.
#[derive(Debug)]
pub struct StreamWriter {
    file: File,
    header: StreamHeader,
    sync: bool,
}

impl StreamWriter {
    /// Opens or creates a stream file for appending.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError`] if:
    /// - The file cannot be opened/created
    /// - An existing file is not a valid stream or stores another stream
    pub fn open<P: AsRef<Path>>(
        path: P,
        stream_name: &str,
        options: WriteOptions,
    ) -> Result<Self, StreamError> {
        let mut file = OpenOptions::new()
            .create(options.create)
            .write(true)
            .read(true)
            .open(&path)?;

        let header = StreamHeader::new(stream_name)?;
        let metadata = file.metadata()?;

        if metadata.len() == 0 {
            file.write_all(&header.to_bytes())?;
            file.flush()?;
            if options.sync {
                file.sync_all()?;
            }
            tracing::debug!(stream = stream_name, "created stream file");
        } else {
            file.seek(io::SeekFrom::Start(0))?;
            let existing = StreamHeader::read_from(&mut file)?;
            if existing.stream_name != stream_name {
                return Err(StreamError::NameMismatch {
                    expected: stream_name.to_string(),
                    found: existing.stream_name,
                });
            }
            let data_start = existing.encoded_len() as u64;
            if options.append {
                file.seek(io::SeekFrom::End(0))?;
            } else {
                file.set_len(data_start)?;
                file.seek(io::SeekFrom::Start(data_start))?;
            }
        }

        Ok(Self {
            file,
            header,
            sync: options.sync,
        })
    }

    /// Name of the stream this writer appends to.
    pub fn stream_name(&self) -> &str {
        &self.header.stream_name
    }

    /// Appends a record JSON payload to the stream.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError`] on serialization failure, oversized
    /// payload, or I/O error.
    pub fn append_record(&mut self, record: &RecordJson) -> Result<(), StreamError> {
        let payload = serde_json::to_vec(record)?;
        self.append_raw(FrameKind::Record, &payload)
    }

    /// Appends a raw frame with the given kind and payload.
    pub fn append_raw(&mut self, kind: FrameKind, payload: &[u8]) -> Result<(), StreamError> {
        let frame = RecordFrame::new(kind, payload.len() as u32)?;

        self.file.write_all(&frame.to_bytes())?;
        self.file.write_all(payload)?;
        self.file.flush()?;
        if self.sync {
            self.file.sync_all()?;
        }

        tracing::debug!(
            stream = self.header.stream_name.as_str(),
            bytes = payload.len(),
            "appended frame"
        );
        Ok(())
    }

    /// Finishes writing and closes the file.
    pub fn finish(mut self) -> Result<(), StreamError> {
        self.file.flush()?;
        if self.sync {
            self.file.sync_all()?;
        }
        Ok(())
    }
}

impl Drop for StreamWriter {
    fn drop(&mut self) {
        let _ = self.file.flush();
        if self.sync {
            let _ = self.file.sync_all();
        }
    }
}
