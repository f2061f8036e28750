//! Mapping keys: a stable identity for "the same control" across
//! incoming byte sequences and stored data patterns.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::hex::{format_bytes, parse_hex_byte};
use crate::sysex::SYSEX_START;

/// Placeholder for variable value bytes in a [`DataPattern`].
pub const VALUE_PLACEHOLDER: &str = "XX";

/// Bytes after F0 that identify a SysEx mapping.
const SYSEX_PREFIX_LEN: usize = 3;

/// Identity of a mapping. Display form joins fields with `-`: status in
/// lowercase hex, channel and number in decimal (`b0-0-74`, `c0-3`), SysEx
/// prefix bytes in lowercase hex (`f0-41-10-42`), other status bytes alone (`f8`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MappingKey {
    /// Note Off/On, Poly Pressure, Control Change. Channel is 0-15.
    Addressed { opcode: u8, channel: u8, number: u8 },
    /// Program Change, Channel Pressure, Pitch Bend.
    Channel { opcode: u8, channel: u8 },
    /// Up to three bytes following F0.
    SysEx { prefix: SmallVec<[u8; SYSEX_PREFIX_LEN]> },
    /// Any other status byte.
    Status(u8),
    /// Pattern whose structural bytes did not parse. Holds the tokens joined by `-`.
    Raw(String),
}

impl MappingKey {
    /// Key for an incoming message. `None` when a byte the key needs is missing.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let (&status, rest) = bytes.split_first()?;
        let prefix = rest.iter().take(SYSEX_PREFIX_LEN).copied().collect();
        Self::from_parts(status, rest.first().copied(), prefix)
    }

    /// Key for a stored pattern such as `B0 07 XX`. Falls back to [`MappingKey::Raw`].
    pub fn from_pattern(pattern: &str) -> Self {
        let tokens: Vec<&str> = pattern.split_whitespace().collect();
        let raw = || MappingKey::Raw(tokens.join("-"));

        let Some(status) = tokens.first().and_then(|t| parse_hex_byte(t).ok()) else {
            return raw();
        };

        let key = if status == SYSEX_START {
            let prefix: Option<SmallVec<[u8; SYSEX_PREFIX_LEN]>> = tokens
                .iter()
                .skip(1)
                .take(SYSEX_PREFIX_LEN)
                .map(|t| parse_hex_byte(t).ok())
                .collect();
            prefix.and_then(|p| Self::from_parts(status, None, p))
        } else {
            let number = tokens.get(1).and_then(|t| parse_hex_byte(t).ok());
            Self::from_parts(status, number, SmallVec::new())
        };
        key.unwrap_or_else(raw)
    }

    fn from_parts(
        status: u8,
        number: Option<u8>,
        prefix: SmallVec<[u8; SYSEX_PREFIX_LEN]>,
    ) -> Option<Self> {
        let opcode = status & 0xF0;
        let channel = status & 0x0F;
        match opcode {
            0x80 | 0x90 | 0xA0 | 0xB0 => number.map(|number| MappingKey::Addressed {
                opcode,
                channel,
                number,
            }),
            0xC0 | 0xD0 | 0xE0 => Some(MappingKey::Channel { opcode, channel }),
            _ if status == SYSEX_START => Some(MappingKey::SysEx { prefix }),
            _ => Some(MappingKey::Status(status)),
        }
    }
}

impl fmt::Display for MappingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingKey::Addressed {
                opcode,
                channel,
                number,
            } => write!(f, "{opcode:x}-{channel}-{number}"),
            MappingKey::Channel { opcode, channel } => write!(f, "{opcode:x}-{channel}"),
            MappingKey::SysEx { prefix } => {
                write!(f, "{SYSEX_START:x}")?;
                for b in prefix {
                    write!(f, "-{b:x}")?;
                }
                Ok(())
            }
            MappingKey::Status(status) => write!(f, "{status:x}"),
            MappingKey::Raw(tokens) => write!(f, "raw-{tokens}"),
        }
    }
}

/// Space-separated uppercase hex template with `XX` in value positions:
/// `B0 07 XX`, `C0 XX`, `E0 XX XX`. SysEx and system messages keep every byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPattern(String);

impl DataPattern {
    /// Wrap a pattern as stored. Not validated; see [`DataPattern::key`].
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let Some((&status, rest)) = bytes.split_first() else {
            return Self(String::new());
        };
        let pattern = match (status & 0xF0, rest.first()) {
            (0x80 | 0x90 | 0xA0 | 0xB0, Some(number)) => {
                format!("{status:02X} {number:02X} {VALUE_PLACEHOLDER}")
            }
            (0xC0 | 0xD0, _) => format!("{status:02X} {VALUE_PLACEHOLDER}"),
            (0xE0, _) => format!("{status:02X} {VALUE_PLACEHOLDER} {VALUE_PLACEHOLDER}"),
            _ => format_bytes(bytes),
        };
        Self(pattern)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn key(&self) -> MappingKey {
        MappingKey::from_pattern(&self.0)
    }
}

impl fmt::Display for DataPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DataPattern {
    fn from(pattern: String) -> Self {
        Self(pattern)
    }
}
