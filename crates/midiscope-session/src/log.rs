//! Ordered log of received messages and their decoded records.

use midiscope_decode::{DecodedRecord, RawMessage};

use crate::config::MessageFilters;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedMessage {
    pub message: RawMessage,
    pub record: DecodedRecord,
}

/// Keeps every message; filters apply only to the view.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<LoggedMessage>,
    filters: MessageFilters,
}

impl MessageLog {
    pub fn new(filters: MessageFilters) -> Self {
        Self {
            entries: Vec::new(),
            filters,
        }
    }

    pub fn push(&mut self, message: RawMessage, record: DecodedRecord) -> &LoggedMessage {
        self.entries.push(LoggedMessage { message, record });
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LoggedMessage] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LoggedMessage> {
        self.entries.last()
    }

    pub fn filters(&self) -> MessageFilters {
        self.filters
    }

    pub fn set_filters(&mut self, filters: MessageFilters) {
        self.filters = filters;
    }

    /// Entries whose category passes the current filters, in arrival order.
    pub fn visible(&self) -> impl Iterator<Item = &LoggedMessage> + '_ {
        let filters = self.filters;
        self.entries
            .iter()
            .filter(move |entry| filters.allows(entry.record.category()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
