use chrono::{DateTime, Utc};

use midiscope_decode::tables::{controller_label, note_name};
use midiscope_decode::{DataPattern, DecodedRecord, MappingKey, RawMessage};

use crate::codec::MappingRecord;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub key: MappingKey,
    pub label: String,
    pub type_label: String,
    /// Kept as text: imported files may carry categories this crate does not define.
    pub category: String,
    /// 1-16.
    pub channel: Option<u8>,
    pub description: String,
    pub data: DataPattern,
    pub timestamp: DateTime<Utc>,
}

impl MappingEntry {
    /// Build an entry for a live message. The label is trimmed and must not be empty.
    pub fn from_message(
        message: &RawMessage,
        record: &DecodedRecord,
        label: &str,
        at: DateTime<Utc>,
    ) -> Result<Self> {
        let label = label.trim();
        if label.is_empty() {
            return Err(Error::EmptyLabel);
        }
        let key = MappingKey::from_bytes(message.bytes())
            .ok_or_else(|| Error::Unmappable(message.hex()))?;

        Ok(Self {
            key,
            label: label.to_string(),
            type_label: record.type_label(),
            category: record.category().to_string(),
            channel: record.channel(),
            description: mapping_description(message.bytes(), record),
            data: DataPattern::from_bytes(message.bytes()),
            timestamp: at,
        })
    }

    /// Key is re-derived from the data pattern.
    pub fn from_record(record: MappingRecord, at: DateTime<Utc>) -> Self {
        let data = DataPattern::new(record.data);
        Self {
            key: data.key(),
            label: record.label,
            type_label: record.type_label,
            category: record.category,
            channel: record.channel,
            description: record.description,
            data,
            timestamp: at,
        }
    }

    pub fn to_record(&self) -> MappingRecord {
        MappingRecord {
            label: self.label.clone(),
            type_label: self.type_label.clone(),
            category: self.category.clone(),
            channel: self.channel,
            description: self.description.clone(),
            data: self.data.as_str().to_string(),
        }
    }
}

/// Description of the control itself, without the value carried by this message.
pub fn mapping_description(bytes: &[u8], record: &DecodedRecord) -> String {
    let (Some(&status), number) = (bytes.first(), bytes.get(1).copied()) else {
        return record.description();
    };
    let channel = (status & 0x0F) + 1;

    match (status & 0xF0, number) {
        (0x80 | 0x90, Some(note)) => {
            format!("Note: {} ({note}) on Channel {channel}", note_name(note))
        }
        (0xA0, Some(note)) => format!(
            "Poly Pressure: {} ({note}) on Channel {channel}",
            note_name(note)
        ),
        (0xB0, Some(cc)) => format!(
            "CC: {} ({cc}) on Channel {channel}",
            controller_label(cc)
        ),
        (0xC0, _) => format!("Program Change on Channel {channel}"),
        (0xD0, _) => format!("Channel Pressure on Channel {channel}"),
        (0xE0, _) => format!("Pitch Bend on Channel {channel}"),
        _ => match record {
            DecodedRecord::SysEx(sysex) => format!("SysEx: {}", sysex.kind.label()),
            other => other.description(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midiscope_decode::{decode, SourceDevice};

    fn message(bytes: &[u8]) -> RawMessage {
        RawMessage::new(bytes, Utc::now(), SourceDevice::new("in", "Keys")).unwrap()
    }

    #[test]
    fn test_entry_from_cc() {
        let msg = message(&[0xB2, 0x4A, 0x33]);
        let entry = MappingEntry::from_message(&msg, &decode(msg.bytes()), "  Cutoff ", Utc::now())
            .unwrap();
        assert_eq!(entry.label, "Cutoff");
        assert_eq!(entry.key.to_string(), "b0-2-74");
        assert_eq!(entry.type_label, "Control Change");
        assert_eq!(entry.category, "cc");
        assert_eq!(entry.channel, Some(3));
        assert_eq!(entry.data.as_str(), "B2 4A XX");
        assert_eq!(entry.description, "CC: Brightness (CC74) (74) on Channel 3");
    }

    #[test]
    fn test_blank_label_rejected() {
        let msg = message(&[0x90, 0x3C, 0x40]);
        let err = MappingEntry::from_message(&msg, &decode(msg.bytes()), "   ", Utc::now())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyLabel));
    }

    #[test]
    fn test_truncated_message_unmappable() {
        let msg = message(&[0xB0]);
        let err = MappingEntry::from_message(&msg, &decode(msg.bytes()), "x", Utc::now())
            .unwrap_err();
        assert!(matches!(err, Error::Unmappable(_)));
    }

    #[test]
    fn test_descriptions() {
        let cases: &[(&[u8], &str)] = &[
            (&[0x90, 0x3C, 0x40], "Note: C4 (60) on Channel 1"),
            (&[0x80, 0x3D, 0x00], "Note: C#4 (61) on Channel 1"),
            (&[0xA1, 0x3C, 0x10], "Poly Pressure: C4 (60) on Channel 2"),
            (&[0xCF, 0x05], "Program Change on Channel 16"),
            (&[0xD0, 0x05], "Channel Pressure on Channel 1"),
            (&[0xE4, 0x00, 0x40], "Pitch Bend on Channel 5"),
            (&[0xF0, 0x7E, 0x7F, 0x06, 0x01, 0xF7], "SysEx: Identity Request"),
            (&[0xFA], "Start"),
        ];
        for (bytes, expected) in cases {
            assert_eq!(mapping_description(bytes, &decode(bytes)), *expected);
        }
    }

    #[test]
    fn test_record_round_trip_rederives_key() {
        let msg = message(&[0xC4, 0x10]);
        let entry =
            MappingEntry::from_message(&msg, &decode(msg.bytes()), "Patch", Utc::now()).unwrap();
        let back = MappingEntry::from_record(entry.to_record(), Utc::now());
        assert_eq!(back.key, entry.key);
        assert_eq!(back.description, "Program Change on Channel 5");
    }
}
