use crate::constants::{
    MIDI_ADVANCED, MIDI_BASIC, MIDI_ENABLE_STRICT, MIDI_KEYCODES_PER_OCTAVE, MIDI_TONE_KEYCODE_OCTAVES,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MidiConfig {
    /// MIDI notes can be sent when music mode is on
    pub basic: bool,
    /// MIDI keycodes, octave shift, transpose, sustain, portamento and modulation
    pub advanced: bool,
    /// Reject disabled MIDI features in the keymap
    pub strict: bool,
    pub tone_keycode_octaves: u8,
}

impl MidiConfig {
    /// Number of MIDI tone keycodes. Each one also allocates a byte of tone state.
    pub const fn tone_keycode_count(&self) -> u16 {
        self.tone_keycode_octaves as u16 * MIDI_KEYCODES_PER_OCTAVE as u16
    }
}

pub const MIDI_CONFIG: MidiConfig = MidiConfig {
    basic: MIDI_BASIC,
    advanced: MIDI_ADVANCED,
    strict: MIDI_ENABLE_STRICT,
    tone_keycode_octaves: MIDI_TONE_KEYCODE_OCTAVES,
};
