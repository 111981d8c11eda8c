//! Stream reader implementation.

use std::fs::File;
use std::io::{self, Read, Seek};
use std::path::Path;

use crate::errors::StreamError;
use crate::frame::{FrameKind, RecordFrame, StreamHeader, FRAME_HEADER_SIZE};
use crate::record::RecordJson;

/// Read mode for handling truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Strict mode: truncated frames are errors.
    Strict,
    /// Permissive mode: truncation is treated as end-of-file.
    Permissive,
}

/// Reader for a stream file.
///
/// Validates the header on open; [`stream_name`](Self::stream_name)
/// exposes which stream the file stores so consumers can confirm they
/// are reading `<environment>-events` before trusting any record.
/// Unknown frame kinds are skipped.
pub struct StreamReader {
    file: File,
    header: StreamHeader,
    mode: ReadMode,
    position: u64,
}

impl StreamReader {
    /// Opens a stream file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError`] if the file cannot be opened or its
    /// header is invalid.
    pub fn open<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Self, StreamError> {
        let mut file = File::open(path)?;
        file.seek(io::SeekFrom::Start(0))?;
        let header = StreamHeader::read_from(&mut file)?;
        let position = header.encoded_len() as u64;

        Ok(Self {
            file,
            header,
            mode,
            position,
        })
    }

    /// Name of the stream this file stores.
    pub fn stream_name(&self) -> &str {
        &self.header.stream_name
    }

    /// Current read position in the file.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Reads the next frame from the stream.
    ///
    /// Returns `Ok(None)` at end-of-file (or truncation in permissive mode).
    pub fn read_frame(&mut self) -> Result<Option<(FrameKind, Vec<u8>)>, StreamError> {
        self.file.seek(io::SeekFrom::Start(self.position))?;

        let file_size = self.file.metadata()?.len();
        if self.position >= file_size {
            return Ok(None);
        }

        let mut frame_header_bytes = [0u8; FRAME_HEADER_SIZE];
        match self.file.read_exact(&mut frame_header_bytes) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                if self.mode == ReadMode::Permissive {
                    return Ok(None);
                }
                return Err(StreamError::TruncatedFrame {
                    offset: self.position,
                });
            }
            Err(e) => return Err(e.into()),
        }

        let frame = RecordFrame::from_bytes(&frame_header_bytes).map_err(|e| match e {
            StreamError::InvalidFrame { offset: _, reason } => StreamError::InvalidFrame {
                offset: self.position,
                reason,
            },
            other => other,
        })?;

        self.position += FRAME_HEADER_SIZE as u64;

        let mut payload = vec![0u8; frame.len as usize];
        match self.file.read_exact(&mut payload) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                if self.mode == ReadMode::Permissive {
                    return Ok(None);
                }
                return Err(StreamError::TruncatedFrame {
                    offset: self.position,
                });
            }
            Err(e) => return Err(e.into()),
        }

        self.position += frame.len as u64;

        Ok(Some((frame.kind, payload)))
    }

    /// Reads the next record JSON from the stream.
    ///
    /// Skips unknown frame kinds and returns `Ok(None)` at end-of-file.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError`] on invalid frames, bad UTF-8 or JSON, or
    /// truncation in strict mode.
    pub fn read_record(&mut self) -> Result<Option<RecordJson>, StreamError> {
        loop {
            match self.read_frame()? {
                None => return Ok(None),
                Some((FrameKind::Record, payload)) => {
                    let text = std::str::from_utf8(&payload)?;
                    let record: RecordJson = serde_json::from_str(text)?;
                    return Ok(Some(record));
                }
                Some((FrameKind::Unknown(kind), _)) => {
                    tracing::debug!(kind, "skipping unknown frame kind");
                    continue;
                }
            }
        }
    }
}
