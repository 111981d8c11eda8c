//! Canonical column names for stream records.
//!
//! Every producer and consumer of the event stream must use these names
//! verbatim; a record is exactly these five columns.

/// Address the record is about.
pub const ADDRESS: &str = "address";

/// Unique record identifier.
pub const EVENT_ID: &str = "event_id";

/// Lifecycle event type.
pub const TYPE: &str = "type";

/// Wall-clock time the record was written.
pub const TIMESTAMP: &str = "timestamp";

/// Event-type-specific payload, opaque to the core.
pub const DATA: &str = "data";

/// All five columns, in canonical order.
pub const ALL: [&str; 5] = [ADDRESS, EVENT_ID, TYPE, TIMESTAMP, DATA];
