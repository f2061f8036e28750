//! SysEx manufacturer IDs.
//!
//! One-byte IDs occupy `0x01..=0x7C`. A leading `0x00` introduces a
//! three-byte ID, keyed here by the two bytes that follow it.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::lookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManufacturerId {
    /// Single-byte ID, e.g. `0x41` (Roland).
    Standard(u8),
    /// Extended ID `00 hi lo`, stored as `(hi << 8) | lo`.
    Extended(u16),
}

impl ManufacturerId {
    /// Read the ID framing that follows `F0`. Returns `None` when the
    /// buffer is too short to hold it.
    pub fn from_sysex(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [_, 0x00, hi, lo, ..] => Some(ManufacturerId::Extended(u16::from_be_bytes([*hi, *lo]))),
            [_, id, ..] => Some(ManufacturerId::Standard(*id)),
            _ => None,
        }
    }

    pub fn name(self) -> Cow<'static, str> {
        manufacturer_name(self)
    }
}

impl fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManufacturerId::Standard(id) => write!(f, "0x{id:02X}"),
            ManufacturerId::Extended(id) => write!(f, "0x00 0x{:02X} 0x{:02X}", id >> 8, id & 0xFF),
        }
    }
}

// Sorted by ID.
static STANDARD: &[(u8, &str)] = &[
    (0x01, "Sequential Circuits"),
    (0x02, "Big Briar"),
    (0x03, "Octave/Plateau"),
    (0x04, "Moog"),
    (0x05, "Passport Designs"),
    (0x06, "Lexicon"),
    (0x07, "Kurzweil"),
    (0x08, "Fender"),
    (0x09, "Gulbransen"),
    (0x0A, "Delta Labs"),
    (0x0B, "Sound Comp."),
    (0x0C, "General Electro"),
    (0x0D, "Techmar"),
    (0x0E, "Matthews Research"),
    (0x10, "Oberheim"),
    (0x11, "PAIA"),
    (0x12, "Simmons"),
    (0x13, "DigiDesign"),
    (0x14, "Fairlight"),
    (0x15, "JL Cooper"),
    (0x16, "Lowrey"),
    (0x17, "Lin"),
    (0x18, "Emu"),
    (0x1B, "Peavey"),
    (0x20, "Bon Tempi"),
    (0x21, "S.I.E.L"),
    (0x23, "SynTech"),
    (0x24, "ElKa"),
    (0x25, "Dynacord"),
    (0x26, "Jomox"),
    (0x27, "Soundcraft"),
    (0x29, "Metra Sound"),
    (0x2A, "C.T.M."),
    (0x2B, "SST"),
    (0x2C, "Sonic"),
    (0x2D, "Lettron"),
    (0x2E, "Matsushita"),
    (0x2F, "Fostex"),
    (0x30, "Zoom"),
    (0x31, "Miditemp"),
    (0x32, "Beatnik Inc"),
    (0x33, "Enjoy"),
    (0x34, "ENSONIQ"),
    (0x35, "E-mu"),
    (0x36, "BoBo"),
    (0x37, "General Music"),
    (0x38, "Tornado"),
    (0x39, "Blue Chip"),
    (0x3E, "Lone Wolf"),
    (0x40, "Kawai"),
    (0x41, "Roland"),
    (0x42, "Korg"),
    (0x43, "Yamaha"),
    (0x44, "Casio"),
    (0x45, "Aesis"),
    (0x47, "Akai"),
    (0x48, "Victor"),
    (0x49, "Meidiland"),
    (0x4A, "Matsushita"),
    (0x4B, "Fostex"),
    (0x4C, "Zoom"),
    (0x4D, "Matsushita"),
    (0x4E, "Suzuki"),
    (0x4F, "Fuji Sound"),
    (0x50, "Acoustic tech lab"),
    (0x51, "Faith"),
    (0x52, "Internet"),
    (0x54, "Masked"),
    (0x55, "Suzuki"),
    (0x56, "Matsushita"),
    (0x57, "Audio Trak"),
    (0x58, "ProAudioSpectrum"),
    (0x59, "Millennium"),
    (0x5A, "Euphorics"),
    (0x5B, "Kurzweil Young Chang"),
];

// Sorted by the two bytes after the 0x00 escape.
static EXTENDED: &[(u16, &str)] = &[
    (0x002B, "Midisoft Corporation"),
    (0x0030, "Software Audio Workshop"),
    (0x0031, "Dream BBS"),
    (0x0032, "M-Audio"),
    (0x0033, "Zeal Soft"),
    (0x0034, "Studio Logic"),
    (0x0035, "Mackie Designs"),
    (0x0036, "Presonus"),
    (0x0037, "Topaz Enterprises"),
    (0x0038, "Cast Lighting"),
    (0x0039, "Microsoft"),
];

/// Unlisted IDs render as `Unknown (0x5C)` / `Unknown (0x0100)`.
pub fn manufacturer_name(id: ManufacturerId) -> Cow<'static, str> {
    let found = match id {
        ManufacturerId::Standard(code) => lookup(STANDARD, code),
        ManufacturerId::Extended(code) => lookup(EXTENDED, code),
    };
    match (found, id) {
        (Some(name), _) => Cow::Borrowed(name),
        (None, ManufacturerId::Standard(code)) => Cow::Owned(format!("Unknown (0x{code:02X})")),
        (None, ManufacturerId::Extended(code)) => Cow::Owned(format!("Unknown (0x{code:04X})")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_sorted() {
        assert!(STANDARD.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(EXTENDED.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_standard_lookup() {
        assert_eq!(manufacturer_name(ManufacturerId::Standard(0x41)), "Roland");
        assert_eq!(manufacturer_name(ManufacturerId::Standard(0x47)), "Akai");
        assert_eq!(manufacturer_name(ManufacturerId::Standard(0x5C)), "Unknown (0x5C)");
    }

    #[test]
    fn test_extended_lookup() {
        assert_eq!(manufacturer_name(ManufacturerId::Extended(0x0032)), "M-Audio");
        assert_eq!(manufacturer_name(ManufacturerId::Extended(0x2029)), "Unknown (0x2029)");
    }

    #[test]
    fn test_from_sysex_framing() {
        assert_eq!(
            ManufacturerId::from_sysex(&[0xF0, 0x00, 0x00, 0x32, 0x01, 0xF7]),
            Some(ManufacturerId::Extended(0x0032))
        );
        assert_eq!(
            ManufacturerId::from_sysex(&[0xF0, 0x41, 0x10, 0xF7]),
            Some(ManufacturerId::Standard(0x41))
        );
        // Escape byte without the two ID bytes reads as a one-byte ID
        assert_eq!(
            ManufacturerId::from_sysex(&[0xF0, 0x00, 0xF7]),
            Some(ManufacturerId::Standard(0x00))
        );
        assert_eq!(ManufacturerId::from_sysex(&[0xF0]), None);
    }
}
