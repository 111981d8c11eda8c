use thiserror::Error;

/// Validation errors for model primitives.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a value is outside a closed enumeration.
    #[error("{field} ('{value}') is not a recognized value")]
    UnknownValue {
        /// Field name that failed membership.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
