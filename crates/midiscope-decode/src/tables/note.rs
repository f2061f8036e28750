//! MIDI note naming in scientific pitch notation.
//!
//! Middle C (note 60) is `C4`, so note 0 is `C-1` and note 127 is `G9`.

const NOTE_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Returns -1 for notes 0-11, 9 for notes 120-127.
#[inline]
pub const fn octave(note: u8) -> i8 {
    (note / 12) as i8 - 1
}

/// Sharp-based pitch class name, `C` through `B`.
#[inline]
pub fn pitch_class_name(note: u8) -> &'static str {
    NOTE_NAMES[(note % 12) as usize]
}

/// `note_name(60) == "C4"`.
pub fn note_name(note: u8) -> String {
    format!("{}{}", pitch_class_name(note), octave(note))
}
