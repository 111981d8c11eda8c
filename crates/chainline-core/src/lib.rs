//! Identifier minting and address-lifecycle record assembly.
//!
//! This crate provides:
//! - `IdentifierMinter` for random and time-ordered record identifiers
//! - `AddressEvent` and `EventBuilder` for assembling stream records
//! - Record-level verification against the shared vocabularies
//! - The injected process configuration and token-decryption seam
//!
//! Core invariants:
//! - Records are immutable, append-only facts; nothing here mutates one
//! - Time-ordered identifiers sort chronologically in canonical string form
//! - Validation failures surface synchronously; nothing is retried
//!
#![deny(missing_docs)]

/// Process configuration and the token-decryption seam.
pub mod config;
/// Error types for core operations.
pub mod errors;
/// Record type and assembly.
pub mod events;
/// Identifier minting.
pub mod minter;
/// Record verification against the shared vocabularies.
pub mod verification;

pub use config::{Config, ConfigError, EncryptedToken, TokenDecryptor};
pub use errors::CoreError;
pub use events::{AddressEvent, EventBuilder};
pub use minter::{IdentifierMinter, MintError};
pub use verification::{check_lifecycle_order, verify_record, LifecycleViolation, Verdict};
