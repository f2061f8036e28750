//! Error types for MIDI decoding.
//!
//! Malformed MIDI never surfaces here: the classifier degrades to `Unknown`.
//! These errors cover construction and parsing of caller-supplied values.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("MIDI message must contain at least one byte")]
    EmptyMessage,

    #[error("Invalid hex token '{0}' in data pattern")]
    InvalidHexToken(String),

    #[error("Device ID {0} out of range (0-127)")]
    DeviceIdOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
