//! Monitor that owns one session and serializes all access to it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;

use midiscope_decode::{DecodedRecord, RawMessage};
use midiscope_session::{
    export_filename, input_channel, ExportFormat, ImportMode, ImportSummary, InputReceiver,
    InputSender, MessageFilters, MonitorSession, OutputTarget, Upsert,
};

use crate::Result;

/// Thread-safe front end to a [`MonitorSession`].
///
/// Transport callbacks push into [`Monitor::input`] from any thread;
/// [`Monitor::pump`] drains them into the session in arrival order.
/// Every other operation locks the session for its duration. Readers get a
/// shared view through [`Monitor::with_session`]; state only changes through
/// the methods here.
///
/// # Example
///
/// ```
/// use midiscope::prelude::*;
/// use chrono::Utc;
///
/// let monitor = Monitor::builder().build()?;
/// let input = monitor.input();
/// let port = SourceDevice::new("in-1", "Keyboard");
///
/// input.push(&[0xB0, 0x07, 0x64], Utc::now(), &port)?;
/// assert_eq!(monitor.pump(), 1);
///
/// monitor.label_message(0, "Volume")?;
/// let csv = monitor.export_csv();
/// assert!(csv.contains("Volume,Control Change,cc,1"));
/// # Ok::<(), midiscope::Error>(())
/// ```
pub struct Monitor {
    session: Mutex<MonitorSession>,
    input_tx: InputSender,
    input_rx: InputReceiver,
}

impl Monitor {
    pub fn builder() -> crate::MonitorBuilder {
        crate::MonitorBuilder::default()
    }

    pub(crate) fn from_session(session: MonitorSession) -> Self {
        let (input_tx, input_rx) = input_channel();
        Self {
            session: Mutex::new(session),
            input_tx,
            input_rx,
        }
    }

    /// Sender for a transport callback. Clone freely, one per port.
    pub fn input(&self) -> InputSender {
        self.input_tx.clone()
    }

    /// Process everything queued so far. Returns how many messages were handled.
    pub fn pump(&self) -> usize {
        // Drain under the lock so concurrent pumps cannot reorder messages.
        let mut session = self.session.lock();
        let mut count = 0;
        while let Some(message) = self.input_rx.try_recv() {
            session.process(message);
            count += 1;
        }
        count
    }

    /// Process one message immediately, bypassing the queue.
    pub fn process(&self, message: RawMessage) -> DecodedRecord {
        self.session.lock().process(message).record.clone()
    }

    /// Read-only view of the session while the lock is held.
    pub fn with_session<R>(&self, f: impl FnOnce(&MonitorSession) -> R) -> R {
        f(&self.session.lock())
    }

    pub fn set_filters(&self, filters: MessageFilters) {
        self.session.lock().set_filters(filters);
    }

    pub fn add_mapping(&self, message: &RawMessage, label: &str) -> Result<Upsert> {
        Ok(self.session.lock().add_mapping(message, label)?)
    }

    pub fn label_message(&self, index: usize, label: &str) -> Result<Upsert> {
        Ok(self.session.lock().label_message(index, label)?)
    }

    pub fn clear_messages(&self) {
        self.session.lock().clear_messages();
    }

    pub fn clear_mappings(&self) {
        self.session.lock().clear_mappings();
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(self.session.lock().export_json(Utc::now())?)
    }

    pub fn export_csv(&self) -> String {
        self.session.lock().export_csv()
    }

    /// Write `midi-mappings-YYYY-MM-DD.<ext>` into `dir`. Returns the path written.
    pub fn export_to_dir(&self, dir: impl AsRef<Path>, format: ExportFormat) -> Result<PathBuf> {
        let now = Utc::now();
        let path = dir.as_ref().join(export_filename(now, format));
        let contents = match format {
            ExportFormat::Json => self.session.lock().export_json(now)?,
            ExportFormat::Csv => self.export_csv(),
        };
        fs::write(&path, contents)?;
        tracing::info!(path = %path.display(), "mappings exported");
        Ok(path)
    }

    /// Import with the configured default mode.
    pub fn import_json(&self, text: &str) -> Result<ImportSummary> {
        Ok(self.session.lock().import_json(text)?)
    }

    pub fn import_json_with_mode(&self, text: &str, mode: ImportMode) -> Result<ImportSummary> {
        Ok(self.session.lock().import_json_with_mode(text, mode)?)
    }

    /// `mode: None` uses the configured default.
    pub fn import_file(
        &self,
        path: impl AsRef<Path>,
        mode: Option<ImportMode>,
    ) -> Result<ImportSummary> {
        let text = fs::read_to_string(path)?;
        let mut session = self.session.lock();
        let mode = mode.unwrap_or(session.config().default_import_mode);
        Ok(session.import_json_with_mode(&text, mode)?)
    }

    /// Send an Identity Request to every connected target.
    pub fn request_identity<'a, I>(&self, targets: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a mut dyn OutputTarget>,
    {
        Ok(self.session.lock().broadcast_identity_request(targets)?)
    }
}
