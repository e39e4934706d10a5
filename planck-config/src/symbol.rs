//! The symbols of the configuration surface.
//!
//! Symbol names are the identifiers the firmware branches on, so
//! [`Symbol`]'s string form must never change.

use serde_derive::Deserialize;
use strum::{Display, EnumIter, IntoStaticStr};

/// A named build-time definition read by the firmware.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    AudioEnable,
    StartupSong,
    DefaultLayerSongs,
    MidiEnable,
    MidiBasic,
    MidiAdvanced,
    MidiEnableStrict,
    MidiToneKeycodeOctaves,
    EncoderResolution,
    MousekeyDelay,
    MousekeyInterval,
    MousekeyMaxSpeed,
    MousekeyTimeToMax,
    MousekeyWheelMaxSpeed,
    MousekeyWheelTimeToMax,
    MousekeyMoveMax,
    MousekeyWheelMax,
    MousekeyMoveDelta,
    MousekeyWheelDelta,
}

/// Shape of the value a symbol carries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolKind {
    /// Presence/absence of the definition
    Flag,
    /// Integer literal
    Integer,
    /// `SONG(NAME)`
    Song,
    /// `{ SONG(A), SONG(B) }`
    SongList,
}

/// Firmware subsystem that reads a symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Audio,
    Midi,
    Encoder,
    MouseKey,
}

impl Symbol {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn kind(self) -> SymbolKind {
        match self {
            Symbol::AudioEnable
            | Symbol::MidiEnable
            | Symbol::MidiBasic
            | Symbol::MidiAdvanced
            | Symbol::MidiEnableStrict => SymbolKind::Flag,
            Symbol::StartupSong => SymbolKind::Song,
            Symbol::DefaultLayerSongs => SymbolKind::SongList,
            _ => SymbolKind::Integer,
        }
    }

    pub fn subsystem(self) -> Subsystem {
        match self {
            Symbol::AudioEnable | Symbol::StartupSong | Symbol::DefaultLayerSongs => Subsystem::Audio,
            Symbol::MidiEnable
            | Symbol::MidiBasic
            | Symbol::MidiAdvanced
            | Symbol::MidiEnableStrict
            | Symbol::MidiToneKeycodeOctaves => Subsystem::Midi,
            Symbol::EncoderResolution => Subsystem::Encoder,
            _ => Subsystem::MouseKey,
        }
    }

    /// The build-system flag that must be enabled for this symbol to take effect
    pub fn requires(self) -> Option<Symbol> {
        match self {
            Symbol::StartupSong | Symbol::DefaultLayerSongs => Some(Symbol::AudioEnable),
            Symbol::MidiBasic | Symbol::MidiAdvanced | Symbol::MidiEnableStrict | Symbol::MidiToneKeycodeOctaves => {
                Some(Symbol::MidiEnable)
            }
            _ => None,
        }
    }

    /// Build-system flags come from the feature set, they never appear in `config.h`
    pub fn is_build_flag(self) -> bool {
        matches!(self, Symbol::AudioEnable | Symbol::MidiEnable)
    }

    /// Dotted path of the symbol in a layer toml, used in error messages
    pub fn config_key(self) -> &'static str {
        match self {
            Symbol::AudioEnable => "audio.enable",
            Symbol::StartupSong => "audio.startup_song",
            Symbol::DefaultLayerSongs => "audio.default_layer_songs",
            Symbol::MidiEnable => "midi.enable",
            Symbol::MidiBasic => "midi.basic",
            Symbol::MidiAdvanced => "midi.advanced",
            Symbol::MidiEnableStrict => "midi.enable_strict",
            Symbol::MidiToneKeycodeOctaves => "midi.tone_keycode_octaves",
            Symbol::EncoderResolution => "encoder.resolution",
            Symbol::MousekeyDelay => "mouse_key.delay",
            Symbol::MousekeyInterval => "mouse_key.interval",
            Symbol::MousekeyMaxSpeed => "mouse_key.max_speed",
            Symbol::MousekeyTimeToMax => "mouse_key.time_to_max",
            Symbol::MousekeyWheelMaxSpeed => "mouse_key.wheel_max_speed",
            Symbol::MousekeyWheelTimeToMax => "mouse_key.wheel_time_to_max",
            Symbol::MousekeyMoveMax => "mouse_key.move_max",
            Symbol::MousekeyWheelMax => "mouse_key.wheel_max",
            Symbol::MousekeyMoveDelta => "mouse_key.move_delta",
            Symbol::MousekeyWheelDelta => "mouse_key.wheel_delta",
        }
    }
}
