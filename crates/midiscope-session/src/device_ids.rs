//! Aggregate statistics of SysEx device IDs seen during a session.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use midiscope_decode::tables::{device_id_info, DeviceIdInfo};
use midiscope_decode::SourceDevice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSighting {
    pub source: SourceDevice,
    pub first_seen: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdEntry {
    pub device_id: u8,
    pub count: u64,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    /// Deduplicated by source id, in order of first appearance.
    pub sources: Vec<SourceSighting>,
}

impl DeviceIdEntry {
    fn new(device_id: u8, source: &SourceDevice, at: DateTime<Utc>) -> Self {
        Self {
            device_id,
            count: 1,
            first_seen: at,
            last_seen: at,
            sources: vec![SourceSighting {
                source: source.clone(),
                first_seen: at,
            }],
        }
    }

    fn observe(&mut self, source: &SourceDevice, at: DateTime<Utc>) {
        self.count += 1;
        self.last_seen = at;
        if !self.sources.iter().any(|s| s.source.id == source.id) {
            self.sources.push(SourceSighting {
                source: source.clone(),
                first_seen: at,
            });
        }
    }

    pub fn info(&self) -> DeviceIdInfo {
        device_id_info(self.device_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeviceIdTable {
    entries: BTreeMap<u8, DeviceIdEntry>,
}

impl DeviceIdTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        device_id: u8,
        source: &SourceDevice,
        at: DateTime<Utc>,
    ) -> &DeviceIdEntry {
        self.entries
            .entry(device_id)
            .and_modify(|entry| entry.observe(source, at))
            .or_insert_with(|| DeviceIdEntry::new(device_id, source, at))
    }

    pub fn get(&self, device_id: u8) -> Option<&DeviceIdEntry> {
        self.entries.get(&device_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ascending device ID.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceIdEntry> + '_ {
        self.entries.values()
    }

    /// Most frequent first; ties by ascending device ID.
    pub fn sorted_by_count(&self) -> Vec<&DeviceIdEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.device_id.cmp(&b.device_id)));
        entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
