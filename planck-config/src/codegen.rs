//! Rust constants for the firmware crate, written by its build script.

use const_gen::*;

use crate::defaults::KEYCODES_PER_OCTAVE;
use crate::keymap_config::KeymapConfig;
use crate::song::SongId;

/// Render `pub(crate) const` declarations for every enabled subsystem.
///
/// Songs are emitted as `crate::audio::Song` values, so the including crate
/// must provide that type whenever audio is enabled.
pub fn constants_str(config: &KeymapConfig) -> String {
    let encoder = config.encoder;
    let mouse_key = config.mouse_key;
    let mut constant_strs = vec![
        const_declaration!(pub(crate) ENCODER_RESOLUTION = encoder.resolution),
        const_declaration!(pub(crate) MOUSEKEY_DELAY = mouse_key.delay),
        const_declaration!(pub(crate) MOUSEKEY_INTERVAL = mouse_key.interval),
        const_declaration!(pub(crate) MOUSEKEY_MAX_SPEED = mouse_key.max_speed),
        const_declaration!(pub(crate) MOUSEKEY_TIME_TO_MAX = mouse_key.time_to_max),
        const_declaration!(pub(crate) MOUSEKEY_WHEEL_MAX_SPEED = mouse_key.wheel_max_speed),
        const_declaration!(pub(crate) MOUSEKEY_WHEEL_TIME_TO_MAX = mouse_key.wheel_time_to_max),
        const_declaration!(pub(crate) MOUSEKEY_MOVE_MAX = mouse_key.move_max),
        const_declaration!(pub(crate) MOUSEKEY_WHEEL_MAX = mouse_key.wheel_max),
        const_declaration!(pub(crate) MOUSEKEY_MOVE_DELTA = mouse_key.move_delta),
        const_declaration!(pub(crate) MOUSEKEY_WHEEL_DELTA = mouse_key.wheel_delta),
    ];

    if let Some(midi) = config.midi {
        constant_strs.extend([
            const_declaration!(pub(crate) MIDI_BASIC = midi.basic),
            const_declaration!(pub(crate) MIDI_ADVANCED = midi.advanced),
            const_declaration!(pub(crate) MIDI_ENABLE_STRICT = midi.strict),
            const_declaration!(pub(crate) MIDI_TONE_KEYCODE_OCTAVES = midi.tone_keycode_octaves),
            const_declaration!(pub(crate) MIDI_KEYCODES_PER_OCTAVE = KEYCODES_PER_OCTAVE),
        ]);
    }

    if let Some(audio) = &config.audio {
        let startup_song = match &audio.startup_song {
            Some(song) => format!("Some({})", song_expr(song)),
            None => "None".to_string(),
        };
        let layer_songs: Vec<String> = audio.default_layer_songs.iter().map(song_expr).collect();
        constant_strs.extend([
            format!("pub(crate) const STARTUP_SONG: Option<crate::audio::Song> = {startup_song};"),
            format!(
                "pub(crate) const DEFAULT_LAYER_SONGS: &[crate::audio::Song] = &[{}];",
                layer_songs.join(", ")
            ),
        ]);
    }

    constant_strs
        .into_iter()
        .map(|s| "#[allow(clippy::redundant_static_lifetimes)]\n".to_owned() + s.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn song_expr(song: &SongId) -> String {
    format!("crate::audio::Song::new(\"{}\")", song.name())
}
