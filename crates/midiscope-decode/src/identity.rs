//! Universal SysEx General Information: Identity Request / Identity Reply.
//!
//! Reply layout: `F0 7E <dev> 06 02 <mfg> <fam lo> <fam hi> <mem lo> <mem hi> <rev...> F7`

use std::fmt;

use crate::error::{Error, Result};
use crate::tables::{manufacturer_name, DeviceFamilyRegistry, ManufacturerId};

pub const UNIVERSAL_NON_REAL_TIME: u8 = 0x7E;
pub const GENERAL_INFORMATION: u8 = 0x06;
pub const IDENTITY_REQUEST: u8 = 0x01;
pub const IDENTITY_REPLY: u8 = 0x02;

/// Shortest reply that carries manufacturer, family and member.
pub const IDENTITY_REPLY_MIN_LEN: usize = 10;

/// Device ID that addresses every device.
pub const BROADCAST_DEVICE_ID: u8 = 0x7F;

/// `F0 7E <device_id> 06 01 F7`
pub fn identity_request(device_id: u8) -> Result<[u8; 6]> {
    if device_id > 0x7F {
        return Err(Error::DeviceIdOutOfRange(device_id));
    }
    Ok([
        0xF0,
        UNIVERSAL_NON_REAL_TIME,
        device_id,
        GENERAL_INFORMATION,
        IDENTITY_REQUEST,
        0xF7,
    ])
}

pub fn is_identity_reply(bytes: &[u8]) -> bool {
    matches!(
        bytes,
        [0xF0, UNIVERSAL_NON_REAL_TIME, _, GENERAL_INFORMATION, IDENTITY_REPLY, ..]
    )
}

/// Firmware revision, reported as two or four bytes depending on vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftwareRevision {
    Short([u8; 2]),
    Full([u8; 4]),
}

impl fmt::Display for SoftwareRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoftwareRevision::Short([a, b]) => write!(f, "{a}.{b}"),
            SoftwareRevision::Full([a, b, c, d]) => write!(f, "{a}.{b}.{c}.{d}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityFields {
    pub device_id: u8,
    pub manufacturer_id: u8,
    pub device_family: u16,
    pub device_family_member: u16,
    pub software_revision: Option<SoftwareRevision>,
}

/// Parsed Identity Reply with names already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityInfo {
    /// Fewer than ten bytes.
    Incomplete,
    Complete {
        fields: IdentityFields,
        manufacturer: String,
        details: String,
    },
}

impl IdentityInfo {
    pub fn manufacturer(&self) -> &str {
        match self {
            IdentityInfo::Incomplete => "Unknown",
            IdentityInfo::Complete { manufacturer, .. } => manufacturer,
        }
    }

    pub fn details(&self) -> &str {
        match self {
            IdentityInfo::Incomplete => "Incomplete message",
            IdentityInfo::Complete { details, .. } => details,
        }
    }

    pub fn fields(&self) -> Option<&IdentityFields> {
        match self {
            IdentityInfo::Incomplete => None,
            IdentityInfo::Complete { fields, .. } => Some(fields),
        }
    }

    pub fn software_revision(&self) -> Option<SoftwareRevision> {
        self.fields().and_then(|f| f.software_revision)
    }
}

/// Caller has already checked [`is_identity_reply`].
pub fn parse_identity_reply(bytes: &[u8], families: &DeviceFamilyRegistry) -> IdentityInfo {
    if bytes.len() < IDENTITY_REPLY_MIN_LEN {
        return IdentityInfo::Incomplete;
    }

    let software_revision = match bytes.get(10..) {
        Some([a, b, c, d, ..]) => Some(SoftwareRevision::Full([*a, *b, *c, *d])),
        Some([a, b, ..]) => Some(SoftwareRevision::Short([*a, *b])),
        _ => None,
    };

    let fields = IdentityFields {
        device_id: bytes[2],
        manufacturer_id: bytes[5],
        device_family: u16::from_le_bytes([bytes[6], bytes[7]]),
        device_family_member: u16::from_le_bytes([bytes[8], bytes[9]]),
        software_revision,
    };

    let manufacturer = manufacturer_name(ManufacturerId::Standard(fields.manufacturer_id)).into_owned();
    let details = families.details(
        fields.manufacturer_id,
        fields.device_family,
        fields.device_family_member,
    );

    IdentityInfo::Complete {
        fields,
        manufacturer,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLAND_REPLY: [u8; 15] = [
        0xF0, 0x7E, 0x00, 0x06, 0x02, 0x41, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0xF7,
    ];

    #[test]
    fn test_identity_request_bytes() {
        assert_eq!(
            identity_request(0x10).unwrap(),
            [0xF0, 0x7E, 0x10, 0x06, 0x01, 0xF7]
        );
        assert_eq!(
            identity_request(BROADCAST_DEVICE_ID).unwrap(),
            [0xF0, 0x7E, 0x7F, 0x06, 0x01, 0xF7]
        );
        assert_eq!(identity_request(0x80), Err(Error::DeviceIdOutOfRange(0x80)));
    }

    #[test]
    fn test_is_identity_reply() {
        assert!(is_identity_reply(&ROLAND_REPLY));
        assert!(!is_identity_reply(&[0xF0, 0x7E, 0x00, 0x06, 0x01, 0xF7]));
        assert!(!is_identity_reply(&[0xF0, 0x7E, 0x00, 0x06]));
    }

    #[test]
    fn test_parse_roland_reply() {
        let info = parse_identity_reply(&ROLAND_REPLY, &DeviceFamilyRegistry::builtin());
        assert_eq!(info.manufacturer(), "Roland");
        assert_eq!(info.details(), "Family: 0, Member: 0");
        assert_eq!(
            info.software_revision().map(|r| r.to_string()),
            Some("1.0.1.0".to_string())
        );
        let fields = info.fields().unwrap();
        assert_eq!(fields.device_id, 0);
        assert_eq!(fields.manufacturer_id, 0x41);
    }

    #[test]
    fn test_little_endian_family_and_akai_lookup() {
        let bytes = [
            0xF0, 0x7E, 0x7F, 0x06, 0x02, 0x47, 0x26, 0x00, 0x19, 0x00, 0x01, 0x02, 0xF7,
        ];
        let info = parse_identity_reply(&bytes, &DeviceFamilyRegistry::builtin());
        let fields = info.fields().unwrap();
        assert_eq!(fields.device_family, 0x0026);
        assert_eq!(fields.device_family_member, 0x0019);
        assert_eq!(info.manufacturer(), "Akai");
        assert_eq!(info.details(), "MPC Series - MPC Live/X/One");
        // 13 bytes: two revision bytes available
        assert_eq!(fields.software_revision, Some(SoftwareRevision::Short([1, 2])));
    }

    #[test]
    fn test_revision_absent_when_short() {
        let bytes = [0xF0, 0x7E, 0x00, 0x06, 0x02, 0x43, 0x01, 0x00, 0x02, 0x00, 0xF7];
        let info = parse_identity_reply(&bytes, &DeviceFamilyRegistry::new());
        assert_eq!(info.software_revision(), None);
        assert_eq!(info.details(), "Family: 1, Member: 2");
    }

    #[test]
    fn test_incomplete_reply() {
        let bytes = [0xF0, 0x7E, 0x00, 0x06, 0x02, 0x41, 0xF7];
        let info = parse_identity_reply(&bytes, &DeviceFamilyRegistry::builtin());
        assert_eq!(info, IdentityInfo::Incomplete);
        assert_eq!(info.manufacturer(), "Unknown");
        assert_eq!(info.details(), "Incomplete message");
    }
}
