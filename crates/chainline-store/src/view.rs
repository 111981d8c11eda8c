//! Derived views over record histories.
//!
//! The stream is the source of truth; the current status of an address
//! is a projection over its records in stream order, never stored state.

use serde::Serialize;

use chainline_model::{Address, AddressStatus, EventType};

use crate::error::StoreError;
use crate::traits::StoreReader;
use crate::typed::{parse_record, TypedRecord};

/// The two fields a presentation layer exposes per address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressView {
    /// The address literal.
    pub address: Address,
    /// Current verification status, projected from the event history.
    pub status: AddressStatus,
}

/// Collects the full event history of an address, in stream order.
///
/// Performs a sequential scan through the reader (no indexing).
pub fn history_for<R: StoreReader>(
    reader: &mut R,
    address: &Address,
) -> Result<Vec<chainline_core::AddressEvent>, StoreError> {
    let mut history = Vec::new();

    while let Some(record) = reader.read_next()? {
        if let TypedRecord::Event(event) = parse_record(&record)? {
            if event.address == *address {
                history.push(event);
            }
        }
    }

    Ok(history)
}

/// Projects the current verification status of an address.
///
/// In stream order: `unknown` while no record exists, `pending` once
/// `address_created` is seen, and thereafter the `status` carried by the
/// most recent `address_verified` payload when it names a member of the
/// closed status set. A verified record without a usable status leaves
/// the projection unchanged.
pub fn latest_status<R: StoreReader>(
    reader: &mut R,
    address: &Address,
) -> Result<AddressStatus, StoreError> {
    let mut status = AddressStatus::Unknown;

    while let Some(record) = reader.read_next()? {
        let TypedRecord::Event(event) = parse_record(&record)? else {
            continue;
        };
        if event.address != *address {
            continue;
        }

        match event.event_type {
            EventType::AddressCreated => {
                if status == AddressStatus::Unknown {
                    status = AddressStatus::Pending;
                }
            }
            EventType::AddressVerified => {
                if let Some(outcome) = event
                    .data
                    .get("status")
                    .and_then(|v| v.as_str())
                    .and_then(|s| s.parse::<AddressStatus>().ok())
                {
                    status = outcome;
                }
            }
        }
    }

    Ok(status)
}

/// Builds the `{address, status}` view for an address.
pub fn address_view<R: StoreReader>(
    reader: &mut R,
    address: &Address,
) -> Result<AddressView, StoreError> {
    let status = latest_status(reader, address)?;
    Ok(AddressView {
        address: address.clone(),
        status,
    })
}
