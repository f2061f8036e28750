//! MIDI byte-stream classifier and decoder.
//!
//! Turns raw messages into typed records with human-readable descriptions,
//! decodes SysEx (Identity Reply, device IDs, manufacturer IDs) and derives
//! mapping keys and data patterns for the mapping table.
//!
//! # Example
//!
//! ```
//! use midiscope_decode::{decode, Category, MappingKey};
//!
//! let record = decode(&[0xB0, 0x07, 0x64]);
//! assert_eq!(record.category(), Category::Cc);
//! assert_eq!(record.description(), "CC: Channel Volume (CC7) Value: 100");
//!
//! let key = MappingKey::from_bytes(&[0xB0, 0x07, 0x64]).unwrap();
//! assert_eq!(key.to_string(), "b0-0-7");
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod hex;
pub mod tables;

mod classify;
mod identity;
mod key;
mod message;
mod record;
mod sysex;

pub use classify::{decode, message_kind, Decoder};
pub use identity::{
    identity_request, is_identity_reply, parse_identity_reply, IdentityFields, IdentityInfo,
    SoftwareRevision, BROADCAST_DEVICE_ID,
};
pub use key::{DataPattern, MappingKey, VALUE_PLACEHOLDER};
pub use message::{MessageBytes, RawMessage, SourceDevice};
pub use record::{
    bank_patch, Category, DecodedRecord, MessageKind, SystemMessage, UnknownReason,
    PITCH_BEND_CENTER,
};
pub use sysex::{
    classify_sysex, decode_sysex, device_id_index, extract_device_id, SysExKind, SysExMessage,
};
pub use tables::{DeviceFamilyRegistry, FamilyTable, ManufacturerId};
