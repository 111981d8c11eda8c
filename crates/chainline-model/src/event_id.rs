//! Identifier primitive for stream records.
//!
//! An `EventId` is an opaque 128-bit value whose canonical form is the
//! lowercase, hyphenated 36-character UUID string. Minting (random or
//! time-ordered) lives in `chainline-core`; this crate only defines the
//! type and its textual contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::validation::ValidationError;

/// Opaque 128-bit record identifier.
///
/// Serialized transparently as the canonical lowercase hyphenated string.
/// Time-ordered identifiers sort chronologically under plain string
/// comparison of this form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Canonical textual length: 8-4-4-4-12 hyphenated form.
    pub const CANONICAL_LEN: usize = 36;

    /// Parses an identifier from its textual form.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ValidationError::PatternMismatch {
                field: "event_id",
                value: value.to_string(),
            })
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns the raw 128-bit value.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl From<Uuid> for EventId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<EventId> for Uuid {
    fn from(id: EventId) -> Self {
        id.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Uuid renders as lowercase hyphenated, which is the canonical form.
        write!(f, "{}", self.0)
    }
}
