//! Control Change controller names.

use super::lookup;

// Sorted by controller number.
static CONTROLLERS: &[(u8, &str)] = &[
    (0, "Bank Select MSB"),
    (1, "Modulation"),
    (2, "Breath Controller"),
    (4, "Foot Controller"),
    (5, "Portamento Time"),
    (6, "Data Entry MSB"),
    (7, "Channel Volume"),
    (8, "Balance"),
    (10, "Pan"),
    (11, "Expression"),
    (12, "Effect Control 1"),
    (13, "Effect Control 2"),
    (16, "General Purpose 1"),
    (17, "General Purpose 2"),
    (18, "General Purpose 3"),
    (19, "General Purpose 4"),
    (32, "Bank Select LSB"),
    (38, "Data Entry LSB"),
    (64, "Sustain Pedal"),
    (65, "Portamento"),
    (66, "Sostenuto"),
    (67, "Soft Pedal"),
    (68, "Legato Footswitch"),
    (69, "Hold 2"),
    (70, "Sound Variation"),
    (71, "Timbre/Harmonic Intensity"),
    (72, "Release Time"),
    (73, "Attack Time"),
    (74, "Brightness"),
    (75, "Sound Control 6"),
    (76, "Sound Control 7"),
    (77, "Sound Control 8"),
    (78, "Sound Control 9"),
    (79, "Sound Control 10"),
    (80, "General Purpose 5"),
    (81, "General Purpose 6"),
    (82, "General Purpose 7"),
    (83, "General Purpose 8"),
    (84, "Portamento Control"),
    (91, "Effects Depth"),
    (92, "Tremolo Depth"),
    (93, "Chorus Depth"),
    (94, "Detune Depth"),
    (95, "Phaser Depth"),
    (96, "Data Increment"),
    (97, "Data Decrement"),
    (98, "NRPN LSB"),
    (99, "NRPN MSB"),
    (100, "RPN LSB"),
    (101, "RPN MSB"),
    (120, "All Sound Off"),
    (121, "Reset All Controllers"),
    (122, "Local Control"),
    (123, "All Notes Off"),
    (124, "Omni Mode Off"),
    (125, "Omni Mode On"),
    (126, "Mono Mode On"),
    (127, "Poly Mode On"),
];

pub fn controller_name(cc: u8) -> Option<&'static str> {
    lookup(CONTROLLERS, cc)
}

/// `Channel Volume (CC7)` for named controllers, `CC3` otherwise.
pub fn controller_label(cc: u8) -> String {
    match controller_name(cc) {
        Some(name) => format!("{name} (CC{cc})"),
        None => format!("CC{cc}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sorted() {
        assert!(CONTROLLERS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_named_controller() {
        assert_eq!(controller_name(7), Some("Channel Volume"));
        assert_eq!(controller_label(64), "Sustain Pedal (CC64)");
    }

    #[test]
    fn test_unlisted_controller() {
        assert_eq!(controller_name(3), None);
        assert_eq!(controller_label(3), "CC3");
        assert_eq!(controller_label(102), "CC102");
    }
}
