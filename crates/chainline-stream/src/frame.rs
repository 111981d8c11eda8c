use std::io::Read;

use crate::errors::StreamError;

/// Stream file magic bytes: `b"AEL1"`.
pub const MAGIC: &[u8; 4] = b"AEL1";

/// Current stream format version: `0x0001`.
pub const VERSION: u16 = 0x0001;

/// Fixed prelude size in bytes: magic + version + name length.
pub const PRELUDE_SIZE: usize = 8;

/// Maximum stream-name length in bytes.
pub const MAX_STREAM_NAME_LEN: usize = 255;

/// Frame header size in bytes.
pub const FRAME_HEADER_SIZE: usize = 8;

/// Maximum record payload size: 1 MiB. Lifecycle records are small; a
/// larger payload indicates a producer bug, not a bigger record.
pub const MAX_PAYLOAD_SIZE: u32 = 1024 * 1024;

/// Frame kind byte for a JSON record.
pub const FRAME_KIND_RECORD: u8 = 0x01;

/// Stream file header.
///
/// Layout: 4 magic bytes, format version (`u16` LE), stream-name length
/// (`u16` LE), then the UTF-8 stream name. Embedding the name lets a
/// consumer confirm it is reading the stream its deployment writes to
/// (`<environment>-events`) before trusting any record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHeader {
    /// Format version.
    pub version: u16,
    /// Name of the stream this file stores.
    pub stream_name: String,
}

impl StreamHeader {
    /// Creates a header for the current format version.
    pub fn new(stream_name: impl Into<String>) -> Result<Self, StreamError> {
        let stream_name = stream_name.into();
        if stream_name.is_empty() {
            return Err(StreamError::InvalidHeader(
                "stream name must not be empty".to_string(),
            ));
        }
        if stream_name.len() > MAX_STREAM_NAME_LEN {
            return Err(StreamError::InvalidHeader(format!(
                "stream name length {} exceeds maximum {}",
                stream_name.len(),
                MAX_STREAM_NAME_LEN
            )));
        }
        Ok(Self {
            version: VERSION,
            stream_name,
        })
    }

    /// Total encoded size of this header in bytes.
    pub fn encoded_len(&self) -> usize {
        PRELUDE_SIZE + self.stream_name.len()
    }

    /// Serializes the header.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len());
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&(self.stream_name.len() as u16).to_le_bytes());
        bytes.extend_from_slice(self.stream_name.as_bytes());
        bytes
    }

    /// Reads and validates a header from the start of `reader`.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, StreamError> {
        let mut prelude = [0u8; PRELUDE_SIZE];
        read_fully(reader, &mut prelude)?;

        let magic = [prelude[0], prelude[1], prelude[2], prelude[3]];
        if magic != *MAGIC {
            return Err(StreamError::InvalidHeader(format!(
                "invalid magic: {:?}, expected {:?}",
                magic, MAGIC
            )));
        }

        let version = u16::from_le_bytes([prelude[4], prelude[5]]);
        if version != VERSION {
            return Err(StreamError::InvalidHeader(format!(
                "unsupported version: 0x{:04x}, expected 0x{:04x}",
                version, VERSION
            )));
        }

        let name_len = u16::from_le_bytes([prelude[6], prelude[7]]) as usize;
        if name_len == 0 || name_len > MAX_STREAM_NAME_LEN {
            return Err(StreamError::InvalidHeader(format!(
                "invalid stream name length: {}",
                name_len
            )));
        }

        let mut name_bytes = vec![0u8; name_len];
        read_fully(reader, &mut name_bytes)?;
        let stream_name = String::from_utf8(name_bytes)
            .map_err(|_| StreamError::InvalidHeader("stream name is not UTF-8".to_string()))?;

        Ok(Self {
            version,
            stream_name,
        })
    }
}

fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), StreamError> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            StreamError::InvalidHeader("truncated header".to_string())
        } else {
            StreamError::Io(e)
        }
    })
}

/// Record frame kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// UTF-8 JSON object holding one lifecycle record.
    Record,
    /// Unknown/unsupported frame kind.
    Unknown(u8),
}

impl FrameKind {
    /// Creates a FrameKind from a byte value.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            FRAME_KIND_RECORD => FrameKind::Record,
            _ => FrameKind::Unknown(byte),
        }
    }

    /// Returns the byte value for this kind.
    pub fn to_byte(self) -> u8 {
        match self {
            FrameKind::Record => FRAME_KIND_RECORD,
            FrameKind::Unknown(b) => b,
        }
    }
}

/// Record frame header (8 bytes): kind, 3 reserved zero bytes, payload
/// length (`u32` LE).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFrame {
    /// Frame kind.
    pub kind: FrameKind,
    /// Payload length in bytes.
    pub len: u32,
}

impl RecordFrame {
    /// Creates a new frame header.
    pub fn new(kind: FrameKind, len: u32) -> Result<Self, StreamError> {
        if len > MAX_PAYLOAD_SIZE {
            return Err(StreamError::PayloadTooLarge {
                size: len,
                max: MAX_PAYLOAD_SIZE,
            });
        }
        Ok(Self { kind, len })
    }

    /// Serializes the frame header.
    pub fn to_bytes(&self) -> [u8; FRAME_HEADER_SIZE] {
        let mut bytes = [0u8; FRAME_HEADER_SIZE];
        bytes[0] = self.kind.to_byte();
        bytes[4..8].copy_from_slice(&self.len.to_le_bytes());
        bytes
    }

    /// Deserializes a frame header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StreamError> {
        if bytes.len() < FRAME_HEADER_SIZE {
            return Err(StreamError::InvalidFrame {
                offset: 0,
                reason: format!("frame header too short: {} bytes", bytes.len()),
            });
        }

        let kind = FrameKind::from_byte(bytes[0]);
        if bytes[1..4] != [0u8; 3] {
            return Err(StreamError::InvalidFrame {
                offset: 0,
                reason: "non-zero reserved bytes".to_string(),
            });
        }
        let len = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if len > MAX_PAYLOAD_SIZE {
            return Err(StreamError::InvalidFrame {
                offset: 0,
                reason: format!("payload size {} exceeds maximum {}", len, MAX_PAYLOAD_SIZE),
            });
        }

        Ok(Self { kind, len })
    }
}
