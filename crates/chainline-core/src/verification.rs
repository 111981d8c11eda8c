//! Record verification against the shared vocabularies.
//!
//! Verification is deterministic and offline: a record either conforms to
//! the five-column contract or it does not. Nothing here decides outcomes
//! or consults the stream; callers hand in what the stream returned.

use std::collections::HashSet;

use serde_json::Value;

use chainline_model::{columns, Address, AddressStatus, EventId, EventType, Timestamp};

/// Outcome of verifying a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Record conforms to the record contract.
    Ok,
    /// Record violates the record contract.
    Invalid(String),
}

impl Verdict {
    /// Returns true for [`Verdict::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok)
    }
}

/// A lifecycle-ordering violation observed in a record sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleViolation {
    /// Address the violating record refers to.
    pub address: String,
    /// Identifier of the violating record, when it parsed.
    pub event_id: Option<EventId>,
    /// What was violated.
    pub reason: String,
}

/// Verifies one untyped stream record against the record contract.
///
/// Checks that all five canonical columns are present, that `address`,
/// `event_id`, and `timestamp` parse, that `type` is in the closed
/// enumeration, and that an `address_verified` payload carrying a
/// `status` names a member of the closed status set.
pub fn verify_record(record: &Value) -> Verdict {
    let Some(obj) = record.as_object() else {
        return Verdict::Invalid("record is not an object".to_string());
    };

    for column in columns::ALL {
        if !obj.contains_key(column) {
            return Verdict::Invalid(format!("missing column '{}'", column));
        }
    }

    let Some(address) = obj[columns::ADDRESS].as_str() else {
        return Verdict::Invalid("address is not a string".to_string());
    };
    if let Err(e) = Address::parse(address) {
        return Verdict::Invalid(e.to_string());
    }

    let Some(event_id) = obj[columns::EVENT_ID].as_str() else {
        return Verdict::Invalid("event_id is not a string".to_string());
    };
    if let Err(e) = EventId::parse(event_id) {
        return Verdict::Invalid(e.to_string());
    }

    let Some(event_type) = obj[columns::TYPE].as_str() else {
        return Verdict::Invalid("type is not a string".to_string());
    };
    if !EventType::is_valid(event_type) {
        return Verdict::Invalid(format!("unknown event type '{}'", event_type));
    }

    let Some(timestamp) = obj[columns::TIMESTAMP].as_str() else {
        return Verdict::Invalid("timestamp is not a string".to_string());
    };
    if let Err(e) = Timestamp::parse(timestamp) {
        return Verdict::Invalid(e.to_string());
    }

    // A verification outcome, when present, must come from the closed set.
    if event_type == EventType::AddressVerified.as_str() {
        if let Some(status) = obj[columns::DATA].get("status").and_then(|v| v.as_str()) {
            if !AddressStatus::is_valid(status) {
                return Verdict::Invalid(format!("unknown status '{}'", status));
            }
        }
    }

    Verdict::Ok
}

/// Audits a record sequence for lifecycle-order violations.
///
/// For each address, `address_created` must precede any `address_verified`
/// in the order the records were handed in (stream order is
/// authoritative). Records that do not parse well enough to classify are
/// skipped; [`verify_record`] is the place they get flagged.
pub fn check_lifecycle_order<'a, I>(records: I) -> Vec<LifecycleViolation>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut created: HashSet<String> = HashSet::new();
    let mut violations = Vec::new();

    for record in records {
        let Some(obj) = record.as_object() else {
            continue;
        };
        let Some(address) = obj.get(columns::ADDRESS).and_then(|v| v.as_str()) else {
            continue;
        };
        let Some(event_type) = obj.get(columns::TYPE).and_then(|v| v.as_str()) else {
            continue;
        };

        match event_type.parse::<EventType>() {
            Ok(EventType::AddressCreated) => {
                created.insert(address.to_string());
            }
            Ok(EventType::AddressVerified) => {
                if !created.contains(address) {
                    let event_id = obj
                        .get(columns::EVENT_ID)
                        .and_then(|v| v.as_str())
                        .and_then(|s| EventId::parse(s).ok());
                    violations.push(LifecycleViolation {
                        address: address.to_string(),
                        event_id,
                        reason: "address_verified precedes address_created".to_string(),
                    });
                }
            }
            Err(_) => continue,
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn well_formed() -> Value {
        json!({
            "address": "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            "event_id": "1ec9414c-232a-6b00-b3c8-9f6bdeced846",
            "type": "address_created",
            "timestamp": "2024-01-01T00:00:00.000Z",
            "data": {}
        })
    }

    #[test]
    fn accepts_well_formed_record() {
        assert!(verify_record(&well_formed()).is_ok());
    }

    #[test]
    fn rejects_missing_column() {
        let mut record = well_formed();
        record.as_object_mut().unwrap().remove("data");
        assert!(matches!(verify_record(&record), Verdict::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_event_type() {
        let mut record = well_formed();
        record["type"] = json!("address_deleted");
        assert!(matches!(verify_record(&record), Verdict::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_status_in_verified_payload() {
        let mut record = well_formed();
        record["type"] = json!("address_verified");
        record["data"] = json!({"status": "approved"});
        assert!(matches!(verify_record(&record), Verdict::Invalid(_)));
    }

    #[test]
    fn accepts_valid_status_in_verified_payload() {
        let mut record = well_formed();
        record["type"] = json!("address_verified");
        record["data"] = json!({"status": "accepted"});
        assert!(verify_record(&record).is_ok());
    }

    #[test]
    fn flags_verified_before_created() {
        let mut verified = well_formed();
        verified["type"] = json!("address_verified");
        let created = well_formed();

        let records = vec![verified, created];
        let violations = check_lifecycle_order(records.iter());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].address, "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
    }

    #[test]
    fn created_then_verified_is_clean() {
        let created = well_formed();
        let mut verified = well_formed();
        verified["type"] = json!("address_verified");

        let records = vec![created, verified];
        assert!(check_lifecycle_order(records.iter()).is_empty());
    }
}
