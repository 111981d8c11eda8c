use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Verification status of an address.
///
/// Exactly one of these four values holds per address at any point in
/// time; `unknown` is the implicit default before any lifecycle event
/// exists for the address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressStatus {
    /// No lifecycle event recorded yet.
    #[default]
    Unknown,
    /// Address created, verification outcome not yet recorded.
    Pending,
    /// Verification accepted the address.
    Accepted,
    /// Verification rejected the address.
    Rejected,
}

impl AddressStatus {
    /// All members of the closed set, in declaration order.
    pub const ALL: [AddressStatus; 4] = [
        AddressStatus::Unknown,
        AddressStatus::Pending,
        AddressStatus::Accepted,
        AddressStatus::Rejected,
    ];

    /// Canonical wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressStatus::Unknown => "unknown",
            AddressStatus::Pending => "pending",
            AddressStatus::Accepted => "accepted",
            AddressStatus::Rejected => "rejected",
        }
    }

    /// Membership check against the closed set.
    pub fn is_valid(value: &str) -> bool {
        Self::ALL.iter().any(|s| s.as_str() == value)
    }
}

impl FromStr for AddressStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownValue {
                field: "status",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for AddressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of lifecycle fact a stream record carries.
///
/// For a given address, `address_created` logically precedes any
/// `address_verified`; ordering is enforced by the stream itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// The address entered the system.
    AddressCreated,
    /// A verification outcome was recorded for the address.
    AddressVerified,
}

impl EventType {
    /// All members of the closed set, in declaration order.
    pub const ALL: [EventType; 2] = [EventType::AddressCreated, EventType::AddressVerified];

    /// Canonical wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::AddressCreated => "address_created",
            EventType::AddressVerified => "address_verified",
        }
    }

    /// Membership check against the closed set.
    pub fn is_valid(value: &str) -> bool {
        Self::ALL.iter().any(|t| t.as_str() == value)
    }
}

impl FromStr for EventType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownValue {
                field: "type",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
