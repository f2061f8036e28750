//! # midiscope - MIDI monitor core
//!
//! Decodes raw MIDI byte streams into typed, described records, inspects
//! SysEx traffic and keeps a table of user-labeled controller mappings
//! that can be exported and re-imported.
//!
//! ## Architecture
//!
//! midiscope is an umbrella crate over:
//! - **midiscope-decode** - classifier, SysEx sub-decoder, lookup tables, mapping keys
//! - **midiscope-session** - message log, device-ID statistics, mapping table and codec
//!
//! ## Quick Start
//!
//! ```
//! use midiscope::prelude::*;
//! use chrono::Utc;
//!
//! let monitor = Monitor::builder().build()?;
//! let port = SourceDevice::new("in-1", "Keyboard");
//!
//! let record = monitor.process(RawMessage::new(&[0x90, 0x3C, 0x64], Utc::now(), port)?);
//! assert_eq!(record.description(), "Note On: C4 (60) Velocity: 100");
//! # Ok::<(), midiscope::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub use midiscope_decode as decode;
pub use midiscope_session as session;

pub use midiscope_decode::{
    identity_request, Category, DataPattern, DecodedRecord, Decoder,
    DeviceFamilyRegistry, FamilyTable, MappingKey, MessageKind, RawMessage, SourceDevice,
};
pub use midiscope_session::{
    DeviceIdEntry, ExportFormat, ImportMode, ImportSummary, MappingEntry, MessageFilters,
    MonitorSession, OutputTarget, SessionConfig, Upsert,
};

mod builder;
mod monitor;

pub use builder::MonitorBuilder;
pub use monitor::Monitor;

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{Monitor, MonitorBuilder};

    pub use crate::decode::{
        Category, DecodedRecord, MappingKey, MessageKind, RawMessage, SourceDevice,
    };
    pub use crate::session::{
        ExportFormat, ImportMode, MessageFilters, MonitorSession, OutputTarget, SessionConfig,
    };
}
