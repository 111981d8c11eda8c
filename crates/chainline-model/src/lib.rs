//! Closed vocabularies and validated primitives for chainline records.
//!
//! Every value that producers and consumers of the event stream must agree
//! on byte-for-byte lives in this crate: the address and timestamp newtypes,
//! the identifier type, the lifecycle enumerations, the canonical column
//! names, and the encoding/hash-algorithm name registry.
//!
#![deny(missing_docs)]

/// Canonical column names shared by every stream producer and consumer.
pub mod columns;
/// Named text/binary encodings and hash algorithms for collaborators.
pub mod encoding;
/// Identifier primitives.
pub mod event_id;
/// Validated string newtypes (addresses, timestamps).
pub mod identifiers;
/// Closed lifecycle enumerations.
pub mod lifecycle;
/// Validation helpers used by model types.
pub mod validation;

pub use encoding::{Encoding, HashAlg};
pub use event_id::EventId;
pub use identifiers::{Address, Timestamp};
pub use lifecycle::{AddressStatus, EventType};
pub use validation::ValidationError;
