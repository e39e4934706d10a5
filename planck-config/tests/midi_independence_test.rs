pub mod common;

use planck_config::codegen::constants_str;
use planck_config::{ConfigError, Symbol};

use crate::common::keymap_loader;

#[test]
fn test_midi_advanced_does_not_touch_encoder_or_mouse() {
    let basic = keymap_loader().load().unwrap();
    let advanced = keymap_loader().user_str("[midi]\nadvanced = true\n").load().unwrap();

    assert!(!basic.midi.unwrap().advanced);
    assert!(advanced.midi.unwrap().advanced);
    assert_eq!(basic.encoder, advanced.encoder);
    assert_eq!(basic.mouse_key, advanced.mouse_key);
    assert_eq!(basic.audio, advanced.audio);

    // Only MIDI constants differ
    let non_midi = |s: String| -> Vec<String> { s.lines().filter(|l| !l.contains("MIDI")).map(String::from).collect() };
    assert_eq!(non_midi(constants_str(&basic)), non_midi(constants_str(&advanced)));
}

#[test]
fn test_midi_disabled_does_not_touch_encoder_or_mouse() {
    let enabled = keymap_loader().load().unwrap();
    let disabled = planck_config::ConfigLoader::new()
        .build_flags(true, false)
        .keymap_str(common::KEYMAP_TOML)
        .load()
        .unwrap();
    assert!(disabled.midi.is_none());
    assert_eq!(enabled.encoder, disabled.encoder);
    assert_eq!(enabled.mouse_key, disabled.mouse_key);
}

#[test]
fn test_strict_rejects_octaves_without_advanced() {
    let err = keymap_loader()
        .user_str("[midi]\nenable_strict = true\ntone_keycode_octaves = 2\n")
        .load()
        .unwrap_err();
    match err {
        ConfigError::Validation { field, message } => {
            assert_eq!(field, "midi.tone_keycode_octaves");
            assert!(message.contains("MIDI_ADVANCED"));
        }
        e => panic!("unexpected error: {e}"),
    }
}

#[test]
fn test_strict_allows_octaves_with_advanced() {
    let config = keymap_loader()
        .user_str("[midi]\nenable_strict = true\nadvanced = true\ntone_keycode_octaves = 2\n")
        .load()
        .unwrap();
    let midi = config.midi.unwrap();
    assert!(midi.strict);
    assert_eq!(midi.tone_keycode_octaves, 2);
    assert_eq!(midi.tone_keycode_count(), 24);
}

#[test]
fn test_strict_keeps_framework_octaves() {
    let resolution = keymap_loader().user_str("[midi]\nenable_strict = true\n").resolve().unwrap();
    assert!(resolution.is_enabled(Symbol::MidiEnableStrict));
    let config = keymap_loader().user_str("[midi]\nenable_strict = true\n").load().unwrap();
    assert_eq!(config.midi.unwrap().tone_keycode_octaves, 3);
}
