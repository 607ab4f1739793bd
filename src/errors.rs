/*!
 * Error types for the stringmerger application.
 *
 * This module contains custom error types for input record validation,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while validating input string records
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The document root is not a JSON array
    #[error("expected a top-level JSON array, found {found}")]
    NotAnArray {
        /// JSON type name of the actual root value
        found: &'static str,
    },

    /// A record in the array is not a JSON object
    #[error("record {record}: expected a JSON object, found {found}")]
    NotAnObject {
        /// Zero-based position of the record in the array
        record: usize,
        /// JSON type name of the actual value
        found: &'static str,
    },

    /// A required field is absent from a record
    #[error("record {record}: missing required field '{field}'")]
    MissingField {
        /// Zero-based position of the record in the array
        record: usize,
        /// Name of the absent field
        field: &'static str,
    },

    /// A field is present but holds the wrong JSON type
    #[error("record {record}: field '{field}' must be {expected}")]
    WrongType {
        /// Zero-based position of the record in the array
        record: usize,
        /// Name of the offending field
        field: &'static str,
        /// Description of the expected JSON type
        expected: &'static str,
    },
}

/// Returns the JSON type name of a value, for error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
