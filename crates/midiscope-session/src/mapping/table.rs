use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use midiscope_decode::{DecodedRecord, MappingKey, RawMessage};

use super::entry::MappingEntry;
use super::ImportMode;
use crate::codec::MappingDocument;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub mode: ImportMode,
    pub added: usize,
    pub updated: usize,
    /// Entries in the imported document.
    pub total: usize,
    /// Export time recorded in the document, if it carried a parseable one.
    pub source_timestamp: Option<DateTime<Utc>>,
}

/// At most one entry per key, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn get(&self, key: &MappingKey) -> Option<&MappingEntry> {
        self.entries.iter().find(|e| &e.key == key)
    }

    /// Replace the entry with the same key in place, or append.
    pub fn upsert(&mut self, entry: MappingEntry) -> Upsert {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => {
                tracing::debug!(key = %entry.key, label = %entry.label, "mapping updated");
                *existing = entry;
                Upsert::Updated
            }
            None => {
                tracing::debug!(key = %entry.key, label = %entry.label, "mapping added");
                self.entries.push(entry);
                Upsert::Added
            }
        }
    }

    pub fn add_from_message(
        &mut self,
        message: &RawMessage,
        record: &DecodedRecord,
        label: &str,
    ) -> Result<Upsert> {
        let entry = MappingEntry::from_message(message, record, label, Utc::now())?;
        Ok(self.upsert(entry))
    }

    /// Presentation order. Case-insensitive, ties broken by exact label.
    pub fn sorted_by_label(&self) -> Vec<&MappingEntry> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| compare_labels(&a.label, &b.label));
        entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Apply an already validated document.
    pub fn import(&mut self, document: MappingDocument, mode: ImportMode) -> ImportSummary {
        if mode == ImportMode::Replace {
            self.clear();
        }

        let source_timestamp = document.timestamp.as_deref().and_then(|ts| {
            DateTime::parse_from_rfc3339(ts)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
        });

        let now = Utc::now();
        let total = document.mappings.len();
        let (mut added, mut updated) = (0, 0);
        for record in document.mappings {
            match self.upsert(MappingEntry::from_record(record, now)) {
                Upsert::Added => added += 1,
                Upsert::Updated => updated += 1,
            }
        }

        tracing::info!(?mode, added, updated, total, "mappings imported");
        ImportSummary {
            mode,
            added,
            updated,
            total,
            source_timestamp,
        }
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MappingRecord;
    use midiscope_decode::{decode, SourceDevice};

    fn add(table: &mut MappingTable, bytes: &[u8], label: &str) -> Upsert {
        let msg = RawMessage::new(bytes, Utc::now(), SourceDevice::new("in", "Keys")).unwrap();
        table.add_from_message(&msg, &decode(bytes), label).unwrap()
    }

    fn record(label: &str, data: &str) -> MappingRecord {
        MappingRecord {
            label: label.to_string(),
            type_label: "Control Change".to_string(),
            category: "cc".to_string(),
            channel: Some(1),
            description: "imported".to_string(),
            data: data.to_string(),
        }
    }

    #[test]
    fn test_same_control_overwrites_in_place() {
        let mut table = MappingTable::new();
        assert_eq!(add(&mut table, &[0xB0, 0x07, 0x10], "Volume"), Upsert::Added);
        assert_eq!(add(&mut table, &[0xB0, 0x01, 0x10], "Mod"), Upsert::Added);
        assert_eq!(add(&mut table, &[0xB0, 0x07, 0x7F], "Master"), Upsert::Updated);

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].label, "Master");
        assert_eq!(table.entries()[1].label, "Mod");
    }

    #[test]
    fn test_note_on_and_off_are_distinct_keys() {
        let mut table = MappingTable::new();
        add(&mut table, &[0x90, 0x3C, 0x40], "Pad on");
        add(&mut table, &[0x80, 0x3C, 0x40], "Pad off");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_sorted_by_label() {
        let mut table = MappingTable::new();
        add(&mut table, &[0xB0, 0x07, 0x10], "volume");
        add(&mut table, &[0xB0, 0x01, 0x10], "Attack");
        add(&mut table, &[0xB0, 0x02, 0x10], "Mod");
        let labels: Vec<_> = table.sorted_by_label().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Attack", "Mod", "volume"]);
        assert_eq!(table.entries()[0].label, "volume");
    }

    #[test]
    fn test_import_merge_counts() {
        let mut table = MappingTable::new();
        add(&mut table, &[0xB0, 0x07, 0x10], "Volume");

        let doc = MappingDocument {
            timestamp: Some("2024-03-01T10:20:30.000Z".to_string()),
            mappings: vec![record("Main", "B0 07 XX"), record("Pan", "B0 0A XX")],
        };
        let summary = table.import(doc, ImportMode::Merge);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.total, 2);
        assert_eq!(
            summary.source_timestamp.map(|t| t.to_rfc3339()),
            Some("2024-03-01T10:20:30+00:00".to_string())
        );
        assert_eq!(table.entries()[0].label, "Main");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_import_replace() {
        let mut table = MappingTable::new();
        add(&mut table, &[0xB0, 0x07, 0x10], "Volume");
        add(&mut table, &[0xC0, 0x01], "Patch");

        let doc = MappingDocument {
            timestamp: None,
            mappings: vec![record("Main", "B0 07 XX")],
        };
        let summary = table.import(doc, ImportMode::Replace);
        assert_eq!((summary.added, summary.updated), (1, 0));
        assert_eq!(summary.source_timestamp, None);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].label, "Main");
    }

    #[test]
    fn test_import_duplicate_keys_within_document() {
        let mut table = MappingTable::new();
        let doc = MappingDocument {
            timestamp: Some("not a date".to_string()),
            mappings: vec![record("A", "B0 07 XX"), record("B", "b0 07 xx")],
        };
        let summary = table.import(doc, ImportMode::Merge);
        assert_eq!((summary.added, summary.updated), (1, 1));
        assert_eq!(summary.source_timestamp, None);
        assert_eq!(table.entries()[0].label, "B");
    }

    #[test]
    fn test_unparseable_patterns_keep_distinct_raw_keys() {
        let mut table = MappingTable::new();
        let doc = MappingDocument {
            timestamp: None,
            mappings: vec![record("A", "ZZ 01"), record("B", "ZZ 02")],
        };
        table.import(doc, ImportMode::Merge);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[1].key.to_string(), "raw-ZZ-02");
    }
}
