//! Decoded representation of a single MIDI message.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hex::format_bytes_prefixed;
use crate::identity::IdentityInfo;
use crate::message::MessageBytes;
use crate::sysex::SysExMessage;
use crate::tables::{controller_label, note_name};

/// Pitch bend center value.
pub const PITCH_BEND_CENTER: u16 = 8192;

/// Coarse grouping used by the monitor filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sysex,
    Note,
    Cc,
    Program,
    Pitchbend,
    System,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sysex => "sysex",
            Category::Note => "note",
            Category::Cc => "cc",
            Category::Program => "program",
            Category::Pitchbend => "pitchbend",
            Category::System => "system",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    NoteOn,
    NoteOff,
    PolyPressure,
    ControlChange,
    ProgramChange,
    ChannelPressure,
    PitchBend,
    SysEx,
    MtcQuarterFrame,
    SongPosition,
    SongSelect,
    TuneRequest,
    TimingClock,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    SystemReset,
    Unknown,
}

impl MessageKind {
    pub fn label(self) -> &'static str {
        match self {
            MessageKind::NoteOn => "Note On",
            MessageKind::NoteOff => "Note Off",
            MessageKind::PolyPressure => "Poly Pressure",
            MessageKind::ControlChange => "Control Change",
            MessageKind::ProgramChange => "Program Change",
            MessageKind::ChannelPressure => "Channel Pressure",
            MessageKind::PitchBend => "Pitch Bend",
            MessageKind::SysEx => "SysEx",
            MessageKind::MtcQuarterFrame => "MTC Quarter Frame",
            MessageKind::SongPosition => "Song Position",
            MessageKind::SongSelect => "Song Select",
            MessageKind::TuneRequest => "Tune Request",
            MessageKind::TimingClock => "Timing Clock",
            MessageKind::Start => "Start",
            MessageKind::Continue => "Continue",
            MessageKind::Stop => "Stop",
            MessageKind::ActiveSensing => "Active Sensing",
            MessageKind::SystemReset => "System Reset",
            MessageKind::Unknown => "Unknown",
        }
    }

    pub fn category(self) -> Category {
        match self {
            MessageKind::NoteOn | MessageKind::NoteOff => Category::Note,
            MessageKind::ControlChange => Category::Cc,
            MessageKind::ProgramChange => Category::Program,
            MessageKind::PitchBend => Category::Pitchbend,
            MessageKind::SysEx => Category::Sysex,
            MessageKind::MtcQuarterFrame
            | MessageKind::SongPosition
            | MessageKind::SongSelect
            | MessageKind::TuneRequest
            | MessageKind::TimingClock
            | MessageKind::Start
            | MessageKind::Continue
            | MessageKind::Stop
            | MessageKind::ActiveSensing
            | MessageKind::SystemReset => Category::System,
            MessageKind::PolyPressure | MessageKind::ChannelPressure | MessageKind::Unknown => {
                Category::Other
            }
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// System common and system real-time messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMessage {
    MtcQuarterFrame(u8),
    /// 14-bit beat count, LSB first on the wire.
    SongPosition(u16),
    SongSelect(u8),
    TuneRequest,
    TimingClock,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    SystemReset,
}

impl SystemMessage {
    pub fn kind(self) -> MessageKind {
        match self {
            SystemMessage::MtcQuarterFrame(_) => MessageKind::MtcQuarterFrame,
            SystemMessage::SongPosition(_) => MessageKind::SongPosition,
            SystemMessage::SongSelect(_) => MessageKind::SongSelect,
            SystemMessage::TuneRequest => MessageKind::TuneRequest,
            SystemMessage::TimingClock => MessageKind::TimingClock,
            SystemMessage::Start => MessageKind::Start,
            SystemMessage::Continue => MessageKind::Continue,
            SystemMessage::Stop => MessageKind::Stop,
            SystemMessage::ActiveSensing => MessageKind::ActiveSensing,
            SystemMessage::SystemReset => MessageKind::SystemReset,
        }
    }

    pub fn description(self) -> String {
        match self {
            SystemMessage::MtcQuarterFrame(v) => format!("MTC Quarter Frame: {v}"),
            SystemMessage::SongPosition(v) => format!("Song Position: {v}"),
            SystemMessage::SongSelect(v) => format!("Song Select: {v}"),
            other => other.kind().label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownReason {
    Empty,
    /// Status byte names a message that needs more data bytes than arrived.
    Truncated(MessageKind),
    /// Undefined status (F4, F5, F9, FD) or a stray data byte.
    Unrecognized,
}

/// Bank and patch within an 8-patch bank. Display only.
pub fn bank_patch(program: u8) -> (u8, u8) {
    (program / 8, program % 8 + 1)
}

/// Result of classifying one message. Channels are 1-16.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedRecord {
    NoteOn { channel: u8, note: u8, velocity: u8 },
    NoteOff { channel: u8, note: u8, velocity: u8 },
    PolyPressure { channel: u8, note: u8, pressure: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    ProgramChange { channel: u8, program: u8 },
    ChannelPressure { channel: u8, pressure: u8 },
    PitchBend { channel: u8, value: u16 },
    SysEx(SysExMessage),
    System(SystemMessage),
    Unknown { bytes: MessageBytes, reason: UnknownReason },
}

impl DecodedRecord {
    pub fn kind(&self) -> MessageKind {
        match self {
            DecodedRecord::NoteOn { .. } => MessageKind::NoteOn,
            DecodedRecord::NoteOff { .. } => MessageKind::NoteOff,
            DecodedRecord::PolyPressure { .. } => MessageKind::PolyPressure,
            DecodedRecord::ControlChange { .. } => MessageKind::ControlChange,
            DecodedRecord::ProgramChange { .. } => MessageKind::ProgramChange,
            DecodedRecord::ChannelPressure { .. } => MessageKind::ChannelPressure,
            DecodedRecord::PitchBend { .. } => MessageKind::PitchBend,
            DecodedRecord::SysEx(_) => MessageKind::SysEx,
            DecodedRecord::System(sys) => sys.kind(),
            DecodedRecord::Unknown { .. } => MessageKind::Unknown,
        }
    }

    pub fn category(&self) -> Category {
        self.kind().category()
    }

    pub fn channel(&self) -> Option<u8> {
        match *self {
            DecodedRecord::NoteOn { channel, .. }
            | DecodedRecord::NoteOff { channel, .. }
            | DecodedRecord::PolyPressure { channel, .. }
            | DecodedRecord::ControlChange { channel, .. }
            | DecodedRecord::ProgramChange { channel, .. }
            | DecodedRecord::ChannelPressure { channel, .. }
            | DecodedRecord::PitchBend { channel, .. } => Some(channel),
            _ => None,
        }
    }

    pub fn device_id(&self) -> Option<u8> {
        match self {
            DecodedRecord::SysEx(sysex) => sysex.device_id,
            _ => None,
        }
    }

    /// Present only for Identity Replies.
    pub fn manufacturer(&self) -> Option<&str> {
        match self {
            DecodedRecord::SysEx(sysex) => sysex.manufacturer(),
            _ => None,
        }
    }

    pub fn identity_info(&self) -> Option<&IdentityInfo> {
        match self {
            DecodedRecord::SysEx(sysex) => sysex.kind.identity(),
            _ => None,
        }
    }

    /// Signed bend relative to center, for pitch bend messages.
    pub fn bend(&self) -> Option<i32> {
        match *self {
            DecodedRecord::PitchBend { value, .. } => {
                Some(i32::from(value) - i32::from(PITCH_BEND_CENTER))
            }
            _ => None,
        }
    }

    /// Human-readable type: `Control Change`, or the SysEx kind such as `Identity Request`.
    pub fn type_label(&self) -> String {
        match self {
            DecodedRecord::SysEx(sysex) => sysex.kind.label(),
            other => other.kind().label().to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            DecodedRecord::NoteOn { note, velocity, .. } => {
                format!("Note On: {} ({note}) Velocity: {velocity}", note_name(*note))
            }
            DecodedRecord::NoteOff { note, velocity, .. } => {
                format!("Note Off: {} ({note}) Velocity: {velocity}", note_name(*note))
            }
            DecodedRecord::PolyPressure { note, pressure, .. } => format!(
                "Poly Pressure: {} ({note}) Pressure: {pressure}",
                note_name(*note)
            ),
            DecodedRecord::ControlChange {
                controller, value, ..
            } => format!("CC: {} Value: {value}", controller_label(*controller)),
            DecodedRecord::ProgramChange { program, .. } => {
                let (bank, patch) = bank_patch(*program);
                format!("PC: Program {program} (Bank {bank} Patch {patch})")
            }
            DecodedRecord::ChannelPressure { pressure, .. } => {
                format!("Channel Pressure: {pressure}")
            }
            DecodedRecord::PitchBend { value, .. } => {
                let bend = i32::from(*value) - i32::from(PITCH_BEND_CENTER);
                format!("Pitch Bend: {bend} ({value})")
            }
            DecodedRecord::SysEx(sysex) => sysex.description(),
            DecodedRecord::System(sys) => sys.description(),
            DecodedRecord::Unknown { bytes, reason } => match reason {
                UnknownReason::Empty => "Empty message".to_string(),
                UnknownReason::Truncated(kind) => {
                    format!("Truncated {kind} message: {}", format_bytes_prefixed(bytes))
                }
                UnknownReason::Unrecognized => {
                    format!("Unknown message: {}", format_bytes_prefixed(bytes))
                }
            },
        }
    }
}

impl fmt::Display for DecodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_patch() {
        assert_eq!(bank_patch(0), (0, 1));
        assert_eq!(bank_patch(10), (1, 3));
        assert_eq!(bank_patch(127), (15, 8));
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Pitchbend.as_str(), "pitchbend");
        assert_eq!(Category::Cc.to_string(), "cc");
    }

    #[test]
    fn test_pressure_messages_are_other() {
        assert_eq!(MessageKind::PolyPressure.category(), Category::Other);
        assert_eq!(MessageKind::ChannelPressure.category(), Category::Other);
        assert_eq!(MessageKind::TimingClock.category(), Category::System);
    }

    #[test]
    fn test_system_descriptions() {
        assert_eq!(SystemMessage::SongPosition(200).description(), "Song Position: 200");
        assert_eq!(SystemMessage::ActiveSensing.description(), "Active Sensing");
    }

    #[test]
    fn test_pitch_bend_accessors() {
        let rec = DecodedRecord::PitchBend {
            channel: 1,
            value: 0,
        };
        assert_eq!(rec.bend(), Some(-8192));
        assert_eq!(rec.description(), "Pitch Bend: -8192 (0)");

        let rec = DecodedRecord::PitchBend {
            channel: 1,
            value: u16::MAX,
        };
        assert_eq!(rec.bend(), Some(57343));
        assert_eq!(rec.description(), "Pitch Bend: 57343 (65535)");
    }
}
