//! One monitoring session: decoder, message log, device-ID statistics and
//! the mapping table, mutated from a single processing path.

use std::io::Write;

use chrono::{DateTime, Utc};

use midiscope_decode::{Decoder, RawMessage, SourceDevice};

use crate::codec::{csv, json};
use crate::config::{MessageFilters, SessionConfig};
use crate::device_ids::DeviceIdTable;
use crate::error::{Error, Result};
use crate::identity::{broadcast_identity_request, OutputTarget};
use crate::log::{LoggedMessage, MessageLog};
use crate::mapping::{ImportMode, ImportSummary, MappingTable, Upsert};

#[derive(Debug, Clone)]
pub struct MonitorSession {
    decoder: Decoder,
    config: SessionConfig,
    log: MessageLog,
    device_ids: DeviceIdTable,
    mappings: MappingTable,
}

impl MonitorSession {
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_decoder(config, Decoder::default())
    }

    pub fn with_decoder(config: SessionConfig, decoder: Decoder) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            decoder,
            log: MessageLog::new(config.filters),
            config,
            device_ids: DeviceIdTable::new(),
            mappings: MappingTable::new(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Decode, count any SysEx device ID and append to the log.
    pub fn process(&mut self, message: RawMessage) -> &LoggedMessage {
        let record = self.decoder.decode(message.bytes());
        tracing::trace!(
            source = %message.source().name,
            bytes = %message.hex(),
            kind = %record.kind(),
            "message"
        );
        if let Some(device_id) = record.device_id() {
            self.device_ids
                .record(device_id, message.source(), message.timestamp());
        }
        self.log.push(message, record)
    }

    pub fn process_bytes(
        &mut self,
        bytes: &[u8],
        timestamp: DateTime<Utc>,
        source: SourceDevice,
    ) -> Result<&LoggedMessage> {
        let message = RawMessage::new(bytes, timestamp, source)?;
        Ok(self.process(message))
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn visible_messages(&self) -> impl Iterator<Item = &LoggedMessage> + '_ {
        self.log.visible()
    }

    pub fn set_filters(&mut self, filters: MessageFilters) {
        self.config.filters = filters;
        self.log.set_filters(filters);
    }

    pub fn device_ids(&self) -> &DeviceIdTable {
        &self.device_ids
    }

    pub fn mappings(&self) -> &MappingTable {
        &self.mappings
    }

    /// Also resets device-ID statistics.
    pub fn clear_messages(&mut self) {
        tracing::debug!(
            messages = self.log.len(),
            device_ids = self.device_ids.len(),
            "clearing messages"
        );
        self.log.clear();
        self.device_ids.clear();
    }

    pub fn clear_mappings(&mut self) {
        tracing::debug!(mappings = self.mappings.len(), "clearing mappings");
        self.mappings.clear();
    }

    pub fn add_mapping(&mut self, message: &RawMessage, label: &str) -> Result<Upsert> {
        let record = self.decoder.decode(message.bytes());
        self.mappings.add_from_message(message, &record, label)
    }

    /// Label the logged message at `index` (arrival order).
    pub fn label_message(&mut self, index: usize, label: &str) -> Result<Upsert> {
        let logged = self
            .log
            .entries()
            .get(index)
            .ok_or(Error::MessageNotFound(index))?;
        self.mappings
            .add_from_message(&logged.message, &logged.record, label)
    }

    pub fn export_json(&self, at: DateTime<Utc>) -> Result<String> {
        json::export_json(&self.mappings, at)
    }

    pub fn write_json<W: Write>(&self, at: DateTime<Utc>, writer: W) -> Result<()> {
        json::write_json(&self.mappings, at, writer)
    }

    pub fn export_csv(&self) -> String {
        csv::export_csv(&self.mappings)
    }

    /// Import using the configured default mode.
    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary> {
        self.import_json_with_mode(text, self.config.default_import_mode)
    }

    /// On any validation error the table is left untouched.
    pub fn import_json_with_mode(
        &mut self,
        text: &str,
        mode: ImportMode,
    ) -> Result<ImportSummary> {
        let document = json::parse_document(text)?;
        Ok(self.mappings.import(document, mode))
    }

    pub fn broadcast_identity_request<'a, I>(&self, targets: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a mut dyn OutputTarget>,
    {
        broadcast_identity_request(targets, self.config.identity_device_id)
    }
}
