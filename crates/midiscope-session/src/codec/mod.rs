//! Mapping table interchange: JSON documents and CSV tables.

pub mod csv;
pub mod json;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One mapping as it appears in an interchange file. The key is not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub label: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub category: String,
    #[serde(default)]
    pub channel: Option<u8>,
    pub description: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingDocument {
    #[serde(default)]
    pub timestamp: Option<String>,
    pub mappings: Vec<MappingRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// `midi-mappings-2024-03-01.json`
pub fn export_filename(date: DateTime<Utc>, format: ExportFormat) -> String {
    format!(
        "midi-mappings-{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// ISO-8601 with milliseconds and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_filename() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 0).unwrap();
        assert_eq!(export_filename(at, ExportFormat::Json), "midi-mappings-2024-03-01.json");
        assert_eq!(export_filename(at, ExportFormat::Csv), "midi-mappings-2024-03-01.csv");
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 20, 30).unwrap();
        assert_eq!(format_timestamp(at), "2024-03-01T10:20:30.000Z");
    }
}
