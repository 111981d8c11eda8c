//! Record filtering API for selective iteration.

use chainline_model::{columns, Address, EventType, Timestamp};

use crate::traits::StoreReader;
use crate::RecordJson;

/// Trait for filtering records during iteration.
pub trait RecordFilter {
    /// Returns true if the record matches the filter criteria.
    fn matches(&self, record: &RecordJson) -> bool;
}

/// Filter by address (exact match on the literal).
#[derive(Debug, Clone)]
pub struct AddressFilter {
    /// Address to match.
    pub address: Address,
}

impl RecordFilter for AddressFilter {
    fn matches(&self, record: &RecordJson) -> bool {
        record
            .get(columns::ADDRESS)
            .and_then(|v| v.as_str())
            .map(|s| s == self.address.as_ref())
            .unwrap_or(false)
    }
}

/// Filter by lifecycle event type.
#[derive(Debug, Clone)]
pub struct EventTypeFilter {
    /// Event type to match.
    pub event_type: EventType,
}

impl RecordFilter for EventTypeFilter {
    fn matches(&self, record: &RecordJson) -> bool {
        record
            .get(columns::TYPE)
            .and_then(|v| v.as_str())
            .map(|s| s == self.event_type.as_str())
            .unwrap_or(false)
    }
}

/// Filter by time range over the record timestamp.
///
/// RFC3339 UTC strings compare chronologically as plain strings, so the
/// bounds are applied lexicographically.
#[derive(Debug, Clone)]
pub struct TimeRangeFilter {
    /// Include records at or after this timestamp.
    pub after: Option<Timestamp>,
    /// Include records at or before this timestamp.
    pub before: Option<Timestamp>,
}

impl RecordFilter for TimeRangeFilter {
    fn matches(&self, record: &RecordJson) -> bool {
        let Some(timestamp) = record.get(columns::TIMESTAMP).and_then(|v| v.as_str()) else {
            return false;
        };

        if let Some(ref after) = self.after {
            if timestamp < after.as_ref() {
                return false;
            }
        }
        if let Some(ref before) = self.before {
            if timestamp > before.as_ref() {
                return false;
            }
        }

        true
    }
}

/// Composite filter: all filters must match (AND).
pub struct AndFilter {
    /// Filters to combine with AND logic.
    pub filters: Vec<Box<dyn RecordFilter>>,
}

impl RecordFilter for AndFilter {
    fn matches(&self, record: &RecordJson) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }
}

/// Composite filter: any filter must match (OR).
pub struct OrFilter {
    /// Filters to combine with OR logic.
    pub filters: Vec<Box<dyn RecordFilter>>,
}

impl RecordFilter for OrFilter {
    fn matches(&self, record: &RecordJson) -> bool {
        self.filters.iter().any(|f| f.matches(record))
    }
}

/// Reader that filters records from an underlying reader.
pub struct FilteredReader<R: StoreReader, F: RecordFilter> {
    reader: R,
    filter: F,
}

impl<R: StoreReader, F: RecordFilter> FilteredReader<R, F> {
    /// Creates a new filtered reader.
    pub fn new(reader: R, filter: F) -> Self {
        Self { reader, filter }
    }
}

impl<R: StoreReader, F: RecordFilter> StoreReader for FilteredReader<R, F> {
    fn read_next(&mut self) -> Result<Option<RecordJson>, crate::error::StoreError> {
        loop {
            match self.reader.read_next()? {
                None => return Ok(None),
                Some(record) if self.filter.matches(&record) => return Ok(Some(record)),
                Some(_) => continue, // skip non-matching
            }
        }
    }
}
