//! Human-facing annotation of SysEx device IDs.
//!
//! The ranges are folklore gathered from common hardware, not MIDI
//! specification. Nothing in the decoder consults them.

use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdInfo {
    /// e.g. `0x10 (16) - MIDI Channel 1`
    pub display: String,
    /// Plain-language explanation of the value.
    pub meaning: Cow<'static, str>,
}

const ORDINALS: [&str; 16] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
    "Eleventh", "Twelfth", "Thirteenth", "Fourteenth", "Fifteenth", "Sixteenth",
];

pub fn device_id_info(device_id: u8) -> DeviceIdInfo {
    let prefix = format!("0x{device_id:02X} ({device_id})");
    let (suffix, meaning): (Option<String>, Cow<'static, str>) = match device_id {
        0 => (
            Some("First Device".into()),
            "First device in chain or single device".into(),
        ),
        1..=15 => {
            let ordinal = ORDINALS[device_id as usize];
            (
                Some(format!("{ordinal} Device")),
                format!("{ordinal} device in MIDI chain").into(),
            )
        }
        16 | 17 => {
            let channel = device_id - 15;
            (
                Some(format!("MIDI Channel {channel}")),
                format!("Often used as MIDI Channel {channel} (base-1 numbering)").into(),
            )
        }
        18..=31 => {
            let channel = device_id - 15;
            (
                Some(format!("MIDI Channel {channel}")),
                format!("Often corresponds to MIDI Channel {channel} (base-1 numbering)").into(),
            )
        }
        32..=47 => (
            Some("Extended Device Range".into()),
            "Extended device addressing for larger setups".into(),
        ),
        48..=63 => (
            Some("Multi-Port Device".into()),
            "Often used for multi-port or multi-timbral devices".into(),
        ),
        64..=95 => (
            Some("Manufacturer Specific".into()),
            "Manufacturer-specific device ID range".into(),
        ),
        96..=126 => (
            Some("Custom/Reserved".into()),
            "Custom or reserved device ID range".into(),
        ),
        127 => (
            Some("Broadcast/All Devices".into()),
            "Universal broadcast address - targets all devices".into(),
        ),
        _ => (None, "Custom device ID - check device documentation".into()),
    };

    let display = match suffix {
        Some(suffix) => format!("{prefix} - {suffix}"),
        None => prefix,
    };
    DeviceIdInfo { display, meaning }
}

/// `Hex: 0x10 | Decimal: 16 | Binary: 00010000`
pub fn device_id_formats(device_id: u8) -> String {
    format!("Hex: 0x{device_id:02X} | Decimal: {device_id} | Binary: {device_id:08b}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_values() {
        let info = device_id_info(0);
        assert_eq!(info.display, "0x00 (0) - First Device");
        assert_eq!(info.meaning, "First device in chain or single device");

        assert_eq!(device_id_info(10).display, "0x0A (10) - Eleventh Device");
        assert_eq!(device_id_info(15).meaning, "Sixteenth device in MIDI chain");

        let info = device_id_info(16);
        assert_eq!(info.display, "0x10 (16) - MIDI Channel 1");
        assert_eq!(info.meaning, "Often used as MIDI Channel 1 (base-1 numbering)");

        assert_eq!(device_id_info(127).display, "0x7F (127) - Broadcast/All Devices");
    }

    #[test]
    fn test_ranges() {
        let info = device_id_info(0x12);
        assert_eq!(info.display, "0x12 (18) - MIDI Channel 3");
        assert_eq!(info.meaning, "Often corresponds to MIDI Channel 3 (base-1 numbering)");

        assert_eq!(device_id_info(40).display, "0x28 (40) - Extended Device Range");
        assert_eq!(device_id_info(63).display, "0x3F (63) - Multi-Port Device");
        assert_eq!(device_id_info(64).display, "0x40 (64) - Manufacturer Specific");
        assert_eq!(device_id_info(126).display, "0x7E (126) - Custom/Reserved");
    }

    #[test]
    fn test_out_of_range_value() {
        let info = device_id_info(0x80);
        assert_eq!(info.display, "0x80 (128)");
        assert_eq!(info.meaning, "Custom device ID - check device documentation");
    }

    #[test]
    fn test_formats() {
        assert_eq!(
            device_id_formats(0x10),
            "Hex: 0x10 | Decimal: 16 | Binary: 00010000"
        );
    }
}
