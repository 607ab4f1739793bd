use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::errors::{ParseError, json_type_name};

// @module: Localization string records and their composite identity

/// A single localization string record from an input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRecord {
    // @field: Stable identifier of the string's source object
    pub editor_id: String,

    // @field: Category label, serialized as "type"
    pub record_type: String,

    // @field: Optional disambiguating ordinal; None is a distinct key space
    // from any integer, including 0
    pub index: Option<i64>,

    // @field: String payload: original text in the first input file,
    // translated text in the second
    pub string: String,
}

impl StringRecord {
    /// Creates a new string record - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(editor_id: &str, record_type: &str, index: Option<i64>, string: &str) -> Self {
        StringRecord {
            editor_id: editor_id.to_string(),
            record_type: record_type.to_string(),
            index,
            string: string.to_string(),
        }
    }

    // @creates: Validated record from a raw JSON value
    // @validates: Presence and type of editor_id, type, string; index must be
    // an integer or null when present
    pub fn from_value(value: &Value, record: usize) -> Result<Self, ParseError> {
        let object = value.as_object().ok_or(ParseError::NotAnObject {
            record,
            found: json_type_name(value),
        })?;

        let editor_id = required_string(object, record, "editor_id")?;
        let record_type = required_string(object, record, "type")?;
        let string = required_string(object, record, "string")?;

        // An absent index key and an explicit null both mean "no index"
        let index = match object.get("index") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_i64().ok_or(ParseError::WrongType {
                record,
                field: "index",
                expected: "an integer or null",
            })?),
        };

        Ok(StringRecord {
            editor_id,
            record_type,
            index,
            string,
        })
    }

    /// Compute the composite identity of this record
    pub fn key(&self) -> CompositeKey {
        CompositeKey {
            editor_id: self.editor_id.clone(),
            record_type: self.record_type.clone(),
            index: self.index,
        }
    }
}

// @extracts: Required string field, with tagged errors on absence or mismatch
fn required_string(
    object: &serde_json::Map<String, Value>,
    record: usize,
    field: &'static str,
) -> Result<String, ParseError> {
    match object.get(field) {
        None => Err(ParseError::MissingField { record, field }),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ParseError::WrongType {
            record,
            field,
            expected: "a string",
        }),
    }
}

/// Composite identity of one logical string across both input tables.
///
/// A structural tuple key with derived equality and hashing; two records
/// denote the same entity if and only if all three components match. An
/// absent index never matches an explicit integer index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    /// Stable identifier of the string's source object
    pub editor_id: String,

    /// Category label
    pub record_type: String,

    /// Optional disambiguating ordinal
    pub index: Option<i64>,
}

/// A merged output record combining an original string with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedRecord {
    /// Stable identifier of the string's source object
    pub editor_id: String,

    /// Category label
    #[serde(rename = "type")]
    pub record_type: String,

    /// Text from the original table
    pub original: String,

    /// Text from the translated table
    pub string: String,

    /// Optional disambiguating ordinal, serialized as JSON null when absent
    pub index: Option<i64>,
}

/// Parse a whole input document into string records.
///
/// The document must be a top-level JSON array of record objects. Any record
/// failing validation aborts the whole parse; there is no per-record skip.
pub fn parse_records(document: &Value) -> Result<Vec<StringRecord>, ParseError> {
    let items = document.as_array().ok_or(ParseError::NotAnArray {
        found: json_type_name(document),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(record, value)| StringRecord::from_value(value, record))
        .collect()
}

/// Serialize merged records as a JSON array with 4-space indentation
pub fn to_pretty_json(records: &[MergedRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

    records
        .serialize(&mut serializer)
        .context("Failed to serialize merged records to JSON")?;

    String::from_utf8(buffer).context("Serialized JSON was not valid UTF-8")
}
