//! Session state for a MIDI monitor.
//!
//! Holds the message log, SysEx device-ID statistics and the user's
//! controller mappings, and moves mappings in and out as JSON or CSV.
//! Feed messages through [`input_channel`] or straight into
//! [`MonitorSession::process`].

pub mod error;
pub use error::{Error, Result};

pub mod codec;
pub use codec::{export_filename, ExportFormat, MappingDocument, MappingRecord};

mod config;
pub use config::{MessageFilters, SessionConfig};

mod device_ids;
pub use device_ids::{DeviceIdEntry, DeviceIdTable, SourceSighting};

mod identity;
pub use identity::{broadcast_identity_request, OutputTarget};

mod input;
pub use input::{input_channel, InputReceiver, InputSender};

mod log;
pub use log::{LoggedMessage, MessageLog};

pub mod mapping;
pub use mapping::{ImportMode, ImportSummary, MappingEntry, MappingTable, Upsert};

mod session;
pub use session::MonitorSession;
