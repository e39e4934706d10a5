use planck_keymap::CONFIG_HEADER;
use planck_keymap::encoder::ENCODER_CONFIG;
use planck_keymap::mouse_key::{MOUSE_KEY_CONFIG, MouseKeyConfig};

#[test]
fn test_encoder_config() {
    assert_eq!(ENCODER_CONFIG.resolution, 4);
    assert_eq!(ENCODER_CONFIG.detents(8), 2);
    assert_eq!(ENCODER_CONFIG.detents(-5), -1);
}

#[test]
fn test_mouse_key_config() {
    assert_eq!(MOUSE_KEY_CONFIG.delay, 0);
    assert_eq!(MOUSE_KEY_CONFIG.interval, 30);
    assert_eq!(MOUSE_KEY_CONFIG.max_speed, 14);
    assert_eq!(MOUSE_KEY_CONFIG.move_max, 127);
    assert_eq!(MOUSE_KEY_CONFIG.move_delta, 5);
}

#[test]
fn test_mouse_key_acceleration() {
    // First report moves by the delta
    assert_eq!(MOUSE_KEY_CONFIG.move_unit(0), 5);
    // 5 + 65 * (2 * 10 * 25 - 10 * 10) / (25 * 25)
    assert_eq!(MOUSE_KEY_CONFIG.move_unit(10), 46);
    assert_eq!(MOUSE_KEY_CONFIG.move_unit(25), 70);
    assert_eq!(MOUSE_KEY_CONFIG.move_unit(u8::MAX), 70);

    assert_eq!(MOUSE_KEY_CONFIG.wheel_unit(0), 1);
    // 1 + 5 * 79 / 1600
    assert_eq!(MOUSE_KEY_CONFIG.wheel_unit(1), 1);
    assert_eq!(MOUSE_KEY_CONFIG.wheel_unit(40), 6);
}

/// Ease-out curve in u64, clamped to `1..=max`
fn reference_unit(repeat: u8, delta: u8, max_speed: u8, time_to_max: u8, max: u8) -> u8 {
    let (r, d, s, t) = (repeat as u64, delta as u64, max_speed as u64, time_to_max as u64);
    let unit = if r == 0 {
        d
    } else if r >= t {
        d * s
    } else {
        d + (d * s - d) * (2 * r * t - r * r) / (t * t)
    };
    unit.clamp(1, max as u64) as u8
}

#[test]
fn test_mouse_key_acceleration_long_ramp() {
    let config = MouseKeyConfig {
        time_to_max: 255,
        ..MOUSE_KEY_CONFIG
    };
    // 5 + 65 * 23000 / 65025
    assert_eq!(config.move_unit(50), 27);
    assert_eq!(config.move_unit(254), 69);
    assert_eq!(config.move_unit(255), 70);
}

#[test]
fn test_mouse_key_acceleration_bounds() {
    let fast = MouseKeyConfig {
        move_delta: 1,
        max_speed: 255,
        time_to_max: 255,
        ..MOUSE_KEY_CONFIG
    };
    // 1 + 254 * 5000 / 65025
    assert_eq!(fast.move_unit(10), 20);
    // Clamped to the axis max
    assert_eq!(fast.move_unit(200), 127);
    assert_eq!(fast.move_unit(255), 127);

    let still = MouseKeyConfig {
        move_delta: 0,
        wheel_delta: 0,
        ..fast
    };
    assert_eq!(still.move_unit(0), 1);
    assert_eq!(still.move_unit(10), 1);
    assert_eq!(still.wheel_unit(255), 1);

    for (delta, max_speed, time_to_max) in [(1, 255, 255), (127, 255, 255), (0, 255, 1), (5, 1, 255), (127, 1, 0)] {
        let config = MouseKeyConfig {
            move_delta: delta,
            max_speed,
            time_to_max,
            ..MOUSE_KEY_CONFIG
        };
        for repeat in 0..=u8::MAX {
            assert_eq!(
                config.move_unit(repeat),
                reference_unit(repeat, delta, max_speed, time_to_max, config.move_max),
                "delta {delta}, max_speed {max_speed}, time_to_max {time_to_max}, repeat {repeat}"
            );
        }
    }
}

#[test]
fn test_header_pins_axis_max() {
    assert!(CONFIG_HEADER.starts_with("// Generated by planck-config, do not edit.\n#pragma once\n"));
    assert!(CONFIG_HEADER.contains("\n#define MOUSEKEY_MOVE_MAX 127\n"));
    assert!(!CONFIG_HEADER.contains("#ifndef MOUSEKEY_MOVE_MAX"));
    assert!(CONFIG_HEADER.contains("#ifndef MOUSEKEY_INTERVAL\n#define MOUSEKEY_INTERVAL 30\n#endif\n"));
    assert!(CONFIG_HEADER.contains("#define ENCODER_RESOLUTION 4\n"));
}

#[cfg(feature = "audio")]
#[test]
fn test_songs() {
    use planck_keymap::audio::{DEFAULT_LAYER_SONGS, STARTUP_SONG, Song, layer_song};

    assert_eq!(STARTUP_SONG, Some(Song::new("PLANCK_SOUND")));
    assert_eq!(DEFAULT_LAYER_SONGS.len(), 3);
    assert_eq!(layer_song(0), Some(Song::new("QWERTY_SOUND")));
    assert_eq!(layer_song(2).map(|s| s.name), Some("DVORAK_SOUND"));
    assert_eq!(layer_song(3), None);
    assert!(CONFIG_HEADER.contains("#ifdef AUDIO_ENABLE\n"));
}

#[cfg(not(feature = "audio"))]
#[test]
fn test_no_songs_without_audio() {
    assert!(!CONFIG_HEADER.contains("SONG"));
}

#[cfg(feature = "midi")]
#[test]
fn test_midi_config() {
    use planck_keymap::midi::MIDI_CONFIG;

    assert!(MIDI_CONFIG.basic);
    assert!(!MIDI_CONFIG.advanced);
    assert!(!MIDI_CONFIG.strict);
    assert_eq!(MIDI_CONFIG.tone_keycode_octaves, 3);
    assert_eq!(MIDI_CONFIG.tone_keycode_count(), 36);
    assert!(CONFIG_HEADER.contains("#ifndef MIDI_BASIC\n#define MIDI_BASIC\n#endif\n// #define MIDI_ADVANCED\n"));
}

#[cfg(not(feature = "midi"))]
#[test]
fn test_no_midi_options_without_midi() {
    assert!(!CONFIG_HEADER.contains("MIDI"));
}
