use chainline_model::columns;
use serde_json::Value;

/// Record JSON payload type.
///
/// A type alias for `serde_json::Value` holding one lifecycle record.
/// The stream stores these as-is; vocabulary verification lives in
/// `chainline-core`.
pub type RecordJson = Value;

/// Checks that a JSON value carries the five canonical record columns.
///
/// Structural check only; field contents are verified by
/// `chainline-core`'s record verification.
pub fn has_canonical_columns(value: &RecordJson) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    columns::ALL.iter().all(|column| obj.contains_key(*column))
}
