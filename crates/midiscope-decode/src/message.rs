//! Raw MIDI messages as delivered by a transport.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::hex::format_bytes;

/// Channel and system messages fit inline; SysEx spills to the heap.
pub type MessageBytes = SmallVec<[u8; 4]>;

/// Identity of the port a message arrived on. Both fields are opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceDevice {
    pub id: String,
    pub name: String,
}

impl SourceDevice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Immutable byte sequence (length >= 1) with arrival time and source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    bytes: MessageBytes,
    timestamp: DateTime<Utc>,
    source: SourceDevice,
}

impl RawMessage {
    pub fn new(bytes: &[u8], timestamp: DateTime<Utc>, source: SourceDevice) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::EmptyMessage);
        }
        Ok(Self {
            bytes: MessageBytes::from_slice(bytes),
            timestamp,
            source,
        })
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn status(&self) -> u8 {
        self.bytes[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[inline]
    pub fn source(&self) -> &SourceDevice {
        &self.source
    }

    /// `90 3C 7F`
    pub fn hex(&self) -> String {
        format_bytes(&self.bytes)
    }
}
