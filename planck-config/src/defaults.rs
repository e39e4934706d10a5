//! Centralized default values and limits for the keymap configuration
//!
//! The framework layer below is what the firmware falls back to when neither
//! the user nor the keymap defines a symbol.

// ============================================================================
// Framework Defaults
// ============================================================================

/// Built-in defaults of the firmware, the lowest-priority layer
pub const FRAMEWORK_DEFAULTS: &str = r#"
[audio]
startup_song = "SONG(STARTUP_SOUND)"

[midi]
tone_keycode_octaves = 3

[encoder]
resolution = 4

[mouse_key]
delay = 10
interval = 16
max_speed = 10
time_to_max = 30
wheel_max_speed = 8
wheel_time_to_max = 40
move_max = 127
wheel_max = 127
move_delta = 8
wheel_delta = 1
"#;

/// Name of the layer built from `FRAMEWORK_DEFAULTS`
pub const FRAMEWORK_LAYER_NAME: &str = "framework";

// ============================================================================
// Environment overrides
// ============================================================================

/// Prefix of environment overrides, e.g. `PLANCK_CFG_MOUSE_KEY__MAX_SPEED=20`.
/// Other `PLANCK_*` variables, like the user file path, stay outside of it.
pub const ENV_PREFIX: &str = "PLANCK_CFG";

/// Separator between section and key in environment overrides
pub const ENV_SEPARATOR: &str = "__";

// ============================================================================
// Validation Limits
// ============================================================================

/// Largest value of a single axis in a HID mouse report
pub const HID_AXIS_MAX: i64 = 127;

/// Inclusive range of encoder resolution
pub const ENCODER_RESOLUTION_RANGE: (i64, i64) = (1, 255);

/// Inclusive range of MIDI tone keycode octaves
pub const MIDI_TONE_KEYCODE_OCTAVES_RANGE: (i64, i64) = (1, 7);

/// Each octave adds this many tone keycodes
pub const KEYCODES_PER_OCTAVE: u8 = 12;

/// The firmware stores the delay in units of 10ms in a byte
pub const MOUSEKEY_DELAY_RANGE: (i64, i64) = (0, 2550);

/// Intervals and speeds are stored in a byte and must be positive
pub const MOUSEKEY_POSITIVE_BYTE_RANGE: (i64, i64) = (1, 255);

/// Time-to-max values are stored in a byte, 0 means full speed at once
pub const MOUSEKEY_TIME_TO_MAX_RANGE: (i64, i64) = (0, 255);

/// Maximum entries in a default layer song list, one per bit of the default layer state
pub const MAX_LAYER_SONGS: usize = 32;
