//! Typed record parsing from JSON.

use chainline_core::AddressEvent;
use chainline_model::{columns, EventType};
use thiserror::Error;

use crate::RecordJson;

/// Error that can occur when parsing a record.
#[derive(Error, Debug)]
pub enum ParseError {
    /// JSON deserialization error.
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Typed representation of a stream record.
#[derive(Debug, Clone)]
pub enum TypedRecord {
    /// A lifecycle record with a recognized event type.
    Event(AddressEvent),
    /// Unknown event type or a record missing its type column.
    Unknown(RecordJson),
}

/// Parses a JSON record into a typed record.
///
/// Inspects the `type` column against the closed enumeration, then
/// deserializes to [`AddressEvent`]. Falls back to
/// [`TypedRecord::Unknown`] when the type is unrecognized, so consumers
/// replaying a stream written by a newer producer keep reading.
pub fn parse_record(json: &RecordJson) -> Result<TypedRecord, ParseError> {
    let event_type = json
        .get(columns::TYPE)
        .and_then(|v| v.as_str())
        .unwrap_or("");

    if !EventType::is_valid(event_type) {
        return Ok(TypedRecord::Unknown(json.clone()));
    }

    let event: AddressEvent = serde_json::from_value(json.clone())?;
    Ok(TypedRecord::Event(event))
}
