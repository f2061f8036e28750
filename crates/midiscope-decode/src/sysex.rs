//! System Exclusive sub-decoder.

use crate::identity::{
    is_identity_reply, parse_identity_reply, IdentityInfo, GENERAL_INFORMATION, IDENTITY_REPLY,
    IDENTITY_REQUEST, UNIVERSAL_NON_REAL_TIME,
};
use crate::tables::{DeviceFamilyRegistry, ManufacturerId};

pub const SYSEX_START: u8 = 0xF0;
pub const SYSEX_END: u8 = 0xF7;
pub const UNIVERSAL_REAL_TIME: u8 = 0x7F;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SysExKind {
    /// Fewer than three bytes.
    Truncated,
    UniversalNonRealTime,
    IdentityRequest,
    IdentityReply(IdentityInfo),
    UniversalRealTime,
    ManufacturerSpecific(ManufacturerId),
}

impl SysExKind {
    pub fn label(&self) -> String {
        match self {
            SysExKind::Truncated => "Unknown".to_string(),
            SysExKind::UniversalNonRealTime => "Universal Non-Real Time".to_string(),
            SysExKind::IdentityRequest => "Identity Request".to_string(),
            SysExKind::IdentityReply(info) => format!("Identity Reply ({})", info.manufacturer()),
            SysExKind::UniversalRealTime => "Universal Real Time".to_string(),
            SysExKind::ManufacturerSpecific(id) => format!("Mfg Specific ({})", id.name()),
        }
    }

    pub fn identity(&self) -> Option<&IdentityInfo> {
        match self {
            SysExKind::IdentityReply(info) => Some(info),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysExMessage {
    pub kind: SysExKind,
    pub device_id: Option<u8>,
    /// Total length including F0 and F7.
    pub length: usize,
}

impl SysExMessage {
    pub fn manufacturer(&self) -> Option<&str> {
        self.kind.identity().map(IdentityInfo::manufacturer)
    }

    pub fn description(&self) -> String {
        match &self.kind {
            SysExKind::IdentityReply(info) => {
                let mut out = format!(
                    "SysEx Identity Reply: {} - {}",
                    info.manufacturer(),
                    info.details()
                );
                if let Some(rev) = info.software_revision() {
                    out.push_str(&format!(" (v{rev})"));
                }
                out
            }
            kind => format!("SysEx: {}", kind.label()),
        }
    }
}

/// Index of the device-ID byte, if the message is long enough to carry one.
///
/// Universal messages carry it at offset 2. Manufacturer messages using the
/// three-byte ID form carry it at offset 4 when present, otherwise at 2.
pub fn device_id_index(bytes: &[u8]) -> Option<usize> {
    if bytes.len() < 4 {
        return None;
    }
    match bytes[1] {
        UNIVERSAL_NON_REAL_TIME | UNIVERSAL_REAL_TIME => Some(2),
        0x00 if bytes.len() >= 5 => Some(4),
        _ => Some(2),
    }
}

/// Device-ID byte at [`device_id_index`]. The trailing byte and values
/// above 0x7F are never device IDs.
pub fn extract_device_id(bytes: &[u8]) -> Option<u8> {
    device_id_index(bytes)
        .filter(|&i| i + 1 < bytes.len())
        .and_then(|i| bytes.get(i).copied())
        .filter(|&id| id <= 0x7F)
}

pub fn classify_sysex(bytes: &[u8], families: &DeviceFamilyRegistry) -> SysExKind {
    if bytes.len() < 3 {
        return SysExKind::Truncated;
    }
    match bytes[1] {
        UNIVERSAL_NON_REAL_TIME => match bytes.get(3..5) {
            Some([GENERAL_INFORMATION, IDENTITY_REQUEST]) => SysExKind::IdentityRequest,
            Some([GENERAL_INFORMATION, IDENTITY_REPLY]) if is_identity_reply(bytes) => {
                SysExKind::IdentityReply(parse_identity_reply(bytes, families))
            }
            _ => SysExKind::UniversalNonRealTime,
        },
        UNIVERSAL_REAL_TIME => SysExKind::UniversalRealTime,
        _ => match ManufacturerId::from_sysex(bytes) {
            Some(id) => SysExKind::ManufacturerSpecific(id),
            None => SysExKind::ManufacturerSpecific(ManufacturerId::Standard(bytes[1])),
        },
    }
}

pub fn decode_sysex(bytes: &[u8], families: &DeviceFamilyRegistry) -> SysExMessage {
    SysExMessage {
        kind: classify_sysex(bytes, families),
        device_id: extract_device_id(bytes),
        length: bytes.len(),
    }
}
