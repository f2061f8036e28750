//! Status-byte classifier.

use std::sync::OnceLock;

use crate::message::MessageBytes;
use crate::record::{DecodedRecord, MessageKind, SystemMessage, UnknownReason};
use crate::sysex::{decode_sysex, SYSEX_START};
use crate::tables::DeviceFamilyRegistry;

/// Turns raw bytes into a [`DecodedRecord`]. Never fails: malformed input
/// decodes to [`DecodedRecord::Unknown`].
#[derive(Debug, Clone)]
pub struct Decoder {
    families: DeviceFamilyRegistry,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DeviceFamilyRegistry::builtin())
    }
}

impl Decoder {
    pub fn new(families: DeviceFamilyRegistry) -> Self {
        Self { families }
    }

    pub fn families(&self) -> &DeviceFamilyRegistry {
        &self.families
    }

    pub fn families_mut(&mut self) -> &mut DeviceFamilyRegistry {
        &mut self.families
    }

    pub fn decode(&self, bytes: &[u8]) -> DecodedRecord {
        let Some(&status) = bytes.first() else {
            return unknown(bytes, UnknownReason::Empty);
        };

        let kind = match message_kind(status) {
            Some(kind) => kind,
            None => return unknown(bytes, UnknownReason::Unrecognized),
        };

        if bytes.len() < min_len(kind) {
            tracing::trace!(?kind, len = bytes.len(), "truncated message");
            return unknown(bytes, UnknownReason::Truncated(kind));
        }

        let channel = (status & 0x0F) + 1;
        match kind {
            MessageKind::NoteOn if bytes[2] == 0 => DecodedRecord::NoteOff {
                channel,
                note: bytes[1],
                velocity: 0,
            },
            MessageKind::NoteOn => DecodedRecord::NoteOn {
                channel,
                note: bytes[1],
                velocity: bytes[2],
            },
            MessageKind::NoteOff => DecodedRecord::NoteOff {
                channel,
                note: bytes[1],
                velocity: bytes[2],
            },
            MessageKind::PolyPressure => DecodedRecord::PolyPressure {
                channel,
                note: bytes[1],
                pressure: bytes[2],
            },
            MessageKind::ControlChange => DecodedRecord::ControlChange {
                channel,
                controller: bytes[1],
                value: bytes[2],
            },
            MessageKind::ProgramChange => DecodedRecord::ProgramChange {
                channel,
                program: bytes[1],
            },
            MessageKind::ChannelPressure => DecodedRecord::ChannelPressure {
                channel,
                pressure: bytes[1],
            },
            MessageKind::PitchBend => DecodedRecord::PitchBend {
                channel,
                value: combine_14bit(bytes[1], bytes[2]),
            },
            MessageKind::SysEx => DecodedRecord::SysEx(decode_sysex(bytes, &self.families)),
            MessageKind::MtcQuarterFrame => {
                DecodedRecord::System(SystemMessage::MtcQuarterFrame(bytes[1]))
            }
            MessageKind::SongPosition => DecodedRecord::System(SystemMessage::SongPosition(
                combine_14bit(bytes[1], bytes[2]),
            )),
            MessageKind::SongSelect => DecodedRecord::System(SystemMessage::SongSelect(bytes[1])),
            MessageKind::TuneRequest => DecodedRecord::System(SystemMessage::TuneRequest),
            MessageKind::TimingClock => DecodedRecord::System(SystemMessage::TimingClock),
            MessageKind::Start => DecodedRecord::System(SystemMessage::Start),
            MessageKind::Continue => DecodedRecord::System(SystemMessage::Continue),
            MessageKind::Stop => DecodedRecord::System(SystemMessage::Stop),
            MessageKind::ActiveSensing => DecodedRecord::System(SystemMessage::ActiveSensing),
            MessageKind::SystemReset => DecodedRecord::System(SystemMessage::SystemReset),
            MessageKind::Unknown => unknown(bytes, UnknownReason::Unrecognized),
        }
    }
}

/// Decode with the built-in device family tables.
pub fn decode(bytes: &[u8]) -> DecodedRecord {
    static DEFAULT: OnceLock<Decoder> = OnceLock::new();
    DEFAULT.get_or_init(Decoder::default).decode(bytes)
}

/// Kind named by a status byte, before looking at data bytes.
pub fn message_kind(status: u8) -> Option<MessageKind> {
    let kind = match status & 0xF0 {
        0x80 => MessageKind::NoteOff,
        0x90 => MessageKind::NoteOn,
        0xA0 => MessageKind::PolyPressure,
        0xB0 => MessageKind::ControlChange,
        0xC0 => MessageKind::ProgramChange,
        0xD0 => MessageKind::ChannelPressure,
        0xE0 => MessageKind::PitchBend,
        0xF0 => match status {
            SYSEX_START => MessageKind::SysEx,
            0xF1 => MessageKind::MtcQuarterFrame,
            0xF2 => MessageKind::SongPosition,
            0xF3 => MessageKind::SongSelect,
            0xF6 => MessageKind::TuneRequest,
            0xF8 => MessageKind::TimingClock,
            0xFA => MessageKind::Start,
            0xFB => MessageKind::Continue,
            0xFC => MessageKind::Stop,
            0xFE => MessageKind::ActiveSensing,
            0xFF => MessageKind::SystemReset,
            _ => return None,
        },
        _ => return None,
    };
    Some(kind)
}

fn min_len(kind: MessageKind) -> usize {
    match kind {
        MessageKind::NoteOn
        | MessageKind::NoteOff
        | MessageKind::PolyPressure
        | MessageKind::ControlChange
        | MessageKind::PitchBend
        | MessageKind::SongPosition => 3,
        MessageKind::ProgramChange
        | MessageKind::ChannelPressure
        | MessageKind::MtcQuarterFrame
        | MessageKind::SongSelect => 2,
        _ => 1,
    }
}

#[inline]
fn combine_14bit(lsb: u8, msb: u8) -> u16 {
    ((msb as u16 & 0x7F) << 7) | (lsb as u16 & 0x7F)
}

fn unknown(bytes: &[u8], reason: UnknownReason) -> DecodedRecord {
    DecodedRecord::Unknown {
        bytes: MessageBytes::from_slice(bytes),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;

    #[test]
    fn test_note_on() {
        let rec = decode(&[0x90, 0x3C, 0x64]);
        assert_eq!(rec.kind(), MessageKind::NoteOn);
        assert_eq!(rec.category(), Category::Note);
        assert_eq!(rec.channel(), Some(1));
        assert_eq!(rec.description(), "Note On: C4 (60) Velocity: 100");
    }

    #[test]
    fn test_note_on_zero_velocity_is_note_off() {
        let rec = decode(&[0x90, 0x3C, 0x00]);
        assert_eq!(rec.kind(), MessageKind::NoteOff);
        assert_eq!(rec.description(), "Note Off: C4 (60) Velocity: 0");
    }

    #[test]
    fn test_control_change() {
        let rec = decode(&[0xB3, 0x07, 0x64]);
        assert_eq!(rec.kind(), MessageKind::ControlChange);
        assert_eq!(rec.channel(), Some(4));
        assert_eq!(rec.description(), "CC: Channel Volume (CC7) Value: 100");
        assert_eq!(rec.type_label(), "Control Change");
    }

    #[test]
    fn test_program_change() {
        let rec = decode(&[0xC0, 0x0A]);
        assert_eq!(rec.category(), Category::Program);
        assert_eq!(rec.description(), "PC: Program 10 (Bank 1 Patch 3)");
    }

    #[test]
    fn test_pitch_bend_center() {
        let rec = decode(&[0xE0, 0x00, 0x40]);
        assert_eq!(rec.description(), "Pitch Bend: 0 (8192)");
        assert_eq!(rec.bend(), Some(0));
        let rec = decode(&[0xEF, 0x7F, 0x7F]);
        assert_eq!(rec.bend(), Some(8191));
        assert_eq!(rec.channel(), Some(16));
    }

    #[test]
    fn test_pressure() {
        let rec = decode(&[0xA0, 0x3C, 0x20]);
        assert_eq!(rec.description(), "Poly Pressure: C4 (60) Pressure: 32");
        assert_eq!(rec.category(), Category::Other);
        let rec = decode(&[0xD1, 0x40]);
        assert_eq!(rec.description(), "Channel Pressure: 64");
        assert_eq!(rec.channel(), Some(2));
    }

    #[test]
    fn test_system_messages() {
        assert_eq!(decode(&[0xF8]).kind(), MessageKind::TimingClock);
        assert_eq!(decode(&[0xF8]).channel(), None);
        assert_eq!(decode(&[0xFF]).description(), "System Reset");
        assert_eq!(decode(&[0xF1, 0x21]).description(), "MTC Quarter Frame: 33");
        assert_eq!(decode(&[0xF2, 0x10, 0x01]).description(), "Song Position: 144");
        assert_eq!(decode(&[0xF3, 0x05]).description(), "Song Select: 5");
        assert_eq!(decode(&[0xF6]).category(), Category::System);
    }

    #[test]
    fn test_undefined_status() {
        let rec = decode(&[0xF4, 0x01]);
        assert_eq!(rec.kind(), MessageKind::Unknown);
        assert_eq!(rec.category(), Category::Other);
        assert_eq!(rec.description(), "Unknown message: 0xF4 0x01");
        assert_eq!(decode(&[0x3C]).kind(), MessageKind::Unknown);
    }

    #[test]
    fn test_truncated_does_not_panic() {
        let rec = decode(&[0x90, 0x3C]);
        assert_eq!(rec.kind(), MessageKind::Unknown);
        assert_eq!(rec.description(), "Truncated Note On message: 0x90 0x3C");
        assert_eq!(decode(&[0xC0]).kind(), MessageKind::Unknown);
        assert_eq!(decode(&[0xF2, 0x00]).kind(), MessageKind::Unknown);
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode(&[]).description(), "Empty message");
    }

    #[test]
    fn test_custom_family_registry() {
        use crate::tables::FamilyTable;

        let mut decoder = Decoder::new(DeviceFamilyRegistry::new());
        decoder
            .families_mut()
            .register(0x41, 0x0100, FamilyTable::new("Fantom").member(1, "Fantom 6"));
        let rec = decoder.decode(&[
            0xF0, 0x7E, 0x10, 0x06, 0x02, 0x41, 0x00, 0x01, 0x01, 0x00, 0xF7,
        ]);
        assert_eq!(rec.identity_info().unwrap().details(), "Fantom - Fantom 6");
        assert_eq!(rec.device_id(), Some(0x10));
    }
}
