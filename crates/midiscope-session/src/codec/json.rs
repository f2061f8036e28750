//! JSON interchange documents.
//!
//! ```json
//! { "timestamp": "2024-03-01T10:20:30.000Z",
//!   "mappings": [ { "label", "type", "category", "channel", "description", "data" } ] }
//! ```

use std::io::Write;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::{format_timestamp, MappingDocument, MappingRecord};
use crate::error::{Error, Result};
use crate::mapping::MappingTable;

const REQUIRED_STRING_FIELDS: [&str; 5] = ["label", "type", "category", "description", "data"];

pub fn to_document(table: &MappingTable, at: DateTime<Utc>) -> MappingDocument {
    MappingDocument {
        timestamp: Some(format_timestamp(at)),
        mappings: table.entries().iter().map(|e| e.to_record()).collect(),
    }
}

/// Pretty-printed, two-space indent.
pub fn export_json(table: &MappingTable, at: DateTime<Utc>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_document(table, at))?)
}

pub fn write_json<W: Write>(table: &MappingTable, at: DateTime<Utc>, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &to_document(table, at))?;
    Ok(())
}

/// Parse and validate a document. Any problem rejects the whole payload.
pub fn parse_document(text: &str) -> Result<MappingDocument> {
    let value: Value = serde_json::from_str(text)?;
    validate(&value)?;

    let Value::Object(mut root) = value else {
        return Err(invalid("payload is not an object"));
    };
    let timestamp = match root.remove("timestamp") {
        Some(Value::String(ts)) => Some(ts),
        _ => None,
    };
    let mappings = match root.remove("mappings") {
        Some(mappings) => serde_json::from_value::<Vec<MappingRecord>>(mappings)?,
        None => return Err(invalid("missing 'mappings' list")),
    };
    Ok(MappingDocument {
        timestamp,
        mappings,
    })
}

pub fn validate(value: &Value) -> Result<()> {
    let root = value
        .as_object()
        .ok_or_else(|| invalid("payload is not an object"))?;
    let mappings = root
        .get("mappings")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("missing 'mappings' list"))?;

    for (index, mapping) in mappings.iter().enumerate() {
        let mapping = mapping
            .as_object()
            .ok_or_else(|| invalid(format!("mapping {index} is not an object")))?;
        validate_mapping(index, mapping)?;
    }
    Ok(())
}

fn validate_mapping(index: usize, mapping: &Map<String, Value>) -> Result<()> {
    for field in REQUIRED_STRING_FIELDS {
        if !mapping.get(field).is_some_and(Value::is_string) {
            return Err(invalid(format!(
                "mapping {index} is missing string field '{field}'"
            )));
        }
    }
    match mapping.get("channel") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Number(n)) if n.as_u64().is_some_and(|c| (1..=16).contains(&c)) => Ok(()),
        Some(other) => Err(invalid(format!(
            "mapping {index} has invalid channel {other}"
        ))),
    }
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::InvalidPayload(reason.into())
}
