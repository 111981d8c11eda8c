use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use chainline_model::{Address, EventId, EventType, Timestamp};

use crate::errors::CoreError;
use crate::minter::IdentifierMinter;

/// One immutable lifecycle fact about an address.
///
/// The serialized form is exactly the five canonical stream columns:
/// `address`, `event_id`, `type`, `timestamp`, `data`. Records are never
/// mutated or deleted once written; many records referencing the same
/// address form that address's event history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressEvent {
    /// Address the record is about.
    pub address: Address,
    /// Unique record identifier; time-ordered so that sorting by it
    /// approximates chronological order on replay.
    pub event_id: EventId,
    /// Lifecycle event type.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Wall-clock time the record was built.
    pub timestamp: Timestamp,
    /// Event-type-specific payload, opaque to this crate.
    pub data: Value,
}

/// Assembles well-formed address-lifecycle records.
///
/// Owns an [`IdentifierMinter`] so every record gets a fresh time-ordered
/// identifier. Safe for unrestricted concurrent use.
#[derive(Debug)]
pub struct EventBuilder {
    minter: IdentifierMinter,
}

impl EventBuilder {
    /// Creates a builder with its own minter.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Mint`] if the entropy source is unavailable.
    pub fn new() -> Result<Self, CoreError> {
        Ok(Self {
            minter: IdentifierMinter::new()?,
        })
    }

    /// Creates a builder around an existing minter.
    pub fn with_minter(minter: IdentifierMinter) -> Self {
        Self { minter }
    }

    /// Returns the underlying minter.
    pub fn minter(&self) -> &IdentifierMinter {
        &self.minter
    }

    /// Builds a record: validates the address, mints a fresh ordered
    /// identifier, and stamps the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidAddress`] if `address` is empty or not
    /// a recognized BTC/ETH literal.
    pub fn build(
        &self,
        address: &str,
        event_type: EventType,
        data: Value,
    ) -> Result<AddressEvent, CoreError> {
        let address =
            Address::parse(address).map_err(|e| CoreError::InvalidAddress(e.to_string()))?;
        let event_id = self.minter.mint_ordered();
        let timestamp = Timestamp::new(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

        Ok(AddressEvent {
            address,
            event_id,
            event_type,
            timestamp,
            data,
        })
    }

    /// Builds a record from untyped parts, parsing the event type against
    /// the closed enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownEventType`] if `event_type` is outside
    /// the closed set, or [`CoreError::InvalidAddress`] as in [`build`](Self::build).
    pub fn build_from_parts(
        &self,
        address: &str,
        event_type: &str,
        data: Value,
    ) -> Result<AddressEvent, CoreError> {
        let event_type: EventType = event_type
            .parse()
            .map_err(|_| CoreError::UnknownEventType(event_type.to_string()))?;
        self.build(address, event_type, data)
    }
}
