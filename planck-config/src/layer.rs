use std::fmt;

use crate::error::ConfigResult;
use crate::song::{SongId, parse_song_list};
use crate::symbol::Symbol;
use crate::{LayerTomlConfig, SongListTomlConfig};

/// Where a layer comes from. Layers are resolved in include order, not by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Cargo features, the build system's own switches
    Build,
    /// User or board overrides
    User,
    /// Defaults of this keymap
    Keymap,
    /// Built-in defaults of the firmware
    Framework,
}

/// How a define treats an earlier definition of the same symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinePolicy {
    /// `#ifndef SYM / #define SYM / #endif`
    Guarded,
    /// `#define SYM`, replaces an earlier definition
    Unconditional,
}

/// Value carried by a symbol
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// `true` is defined, `false` is explicitly left undefined
    Flag(bool),
    Integer(i64),
    Song(SongId),
    SongList(Vec<SongId>),
}

impl Value {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Flag(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Song(song) => write!(f, "{}", song),
            Value::SongList(songs) => {
                let songs: Vec<String> = songs.iter().map(ToString::to_string).collect();
                write!(f, "{{ {} }}", songs.join(", "))
            }
        }
    }
}

/// One definition made by a layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Define {
    pub symbol: Symbol,
    pub value: Value,
    pub policy: DefinePolicy,
}

/// A named set of defines
#[derive(Clone, Debug)]
pub struct Layer {
    pub name: String,
    pub kind: LayerKind,
    pub defines: Vec<Define>,
}

impl Layer {
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            defines: Vec::new(),
        }
    }

    /// Add a define, replacing an earlier one of the same symbol in this layer
    pub fn define(mut self, symbol: Symbol, value: Value, policy: DefinePolicy) -> Self {
        self.defines.retain(|d| d.symbol != symbol);
        self.defines.push(Define { symbol, value, policy });
        self
    }

    /// Build a layer from its toml form. Songs are parsed here.
    pub fn from_toml(name: impl Into<String>, kind: LayerKind, config: &LayerTomlConfig) -> ConfigResult<Self> {
        let unconditional = config
            .defines
            .as_ref()
            .map(|d| d.unconditional.clone())
            .unwrap_or_default();
        let policy_of = |symbol: Symbol| {
            if unconditional.contains(&symbol) {
                DefinePolicy::Unconditional
            } else {
                DefinePolicy::Guarded
            }
        };

        let mut values: Vec<(Symbol, Value)> = Vec::new();
        let flag = |symbol, v: Option<bool>, values: &mut Vec<(Symbol, Value)>| {
            if let Some(b) = v {
                values.push((symbol, Value::Flag(b)));
            }
        };
        let integer = |symbol, v: Option<i64>, values: &mut Vec<(Symbol, Value)>| {
            if let Some(i) = v {
                values.push((symbol, Value::Integer(i)));
            }
        };

        if let Some(audio) = &config.audio {
            flag(Symbol::AudioEnable, audio.enable, &mut values);
            if let Some(song) = &audio.startup_song {
                values.push((Symbol::StartupSong, Value::Song(SongId::parse(song)?)));
            }
            if let Some(list) = &audio.default_layer_songs {
                let songs = match list {
                    SongListTomlConfig::List(items) => {
                        items.iter().map(|s| SongId::parse(s)).collect::<ConfigResult<Vec<_>>>()?
                    }
                    SongListTomlConfig::Text(text) => parse_song_list(text)?,
                };
                values.push((Symbol::DefaultLayerSongs, Value::SongList(songs)));
            }
        }

        if let Some(midi) = &config.midi {
            flag(Symbol::MidiEnable, midi.enable, &mut values);
            flag(Symbol::MidiBasic, midi.basic, &mut values);
            flag(Symbol::MidiAdvanced, midi.advanced, &mut values);
            flag(Symbol::MidiEnableStrict, midi.enable_strict, &mut values);
            integer(Symbol::MidiToneKeycodeOctaves, midi.tone_keycode_octaves, &mut values);
        }

        if let Some(encoder) = &config.encoder {
            integer(Symbol::EncoderResolution, encoder.resolution, &mut values);
        }

        if let Some(mouse_key) = &config.mouse_key {
            integer(Symbol::MousekeyDelay, mouse_key.delay, &mut values);
            integer(Symbol::MousekeyInterval, mouse_key.interval, &mut values);
            integer(Symbol::MousekeyMaxSpeed, mouse_key.max_speed, &mut values);
            integer(Symbol::MousekeyTimeToMax, mouse_key.time_to_max, &mut values);
            integer(Symbol::MousekeyWheelMaxSpeed, mouse_key.wheel_max_speed, &mut values);
            integer(Symbol::MousekeyWheelTimeToMax, mouse_key.wheel_time_to_max, &mut values);
            integer(Symbol::MousekeyMoveMax, mouse_key.move_max, &mut values);
            integer(Symbol::MousekeyWheelMax, mouse_key.wheel_max, &mut values);
            integer(Symbol::MousekeyMoveDelta, mouse_key.move_delta, &mut values);
            integer(Symbol::MousekeyWheelDelta, mouse_key.wheel_delta, &mut values);
        }

        let mut layer = Layer::new(name, kind);
        for (symbol, value) in values {
            layer = layer.define(symbol, value, policy_of(symbol));
        }
        Ok(layer)
    }

    /// The build layer: subsystem switches set by the build, defined ahead of every other layer
    pub fn build(audio: bool, midi: bool) -> Self {
        Layer::new("build", LayerKind::Build)
            .define(Symbol::AudioEnable, Value::Flag(audio), DefinePolicy::Unconditional)
            .define(Symbol::MidiEnable, Value::Flag(midi), DefinePolicy::Unconditional)
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Define> {
        self.defines.iter().find(|d| d.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_from_toml_marks_unconditional_symbols() {
        let config = LayerTomlConfig::from_toml_str(
            r#"
            [mouse_key]
            move_max = 127
            move_delta = 5

            [defines]
            unconditional = ["MOUSEKEY_MOVE_MAX"]
            "#,
            "test",
        )
        .unwrap();
        let layer = Layer::from_toml("keymap", LayerKind::Keymap, &config).unwrap();
        assert_eq!(layer.defines.len(), 2);
        let move_max = layer.get(Symbol::MousekeyMoveMax).unwrap();
        assert_eq!(move_max.value, Value::Integer(127));
        assert_eq!(move_max.policy, DefinePolicy::Unconditional);
        assert_eq!(layer.get(Symbol::MousekeyMoveDelta).unwrap().policy, DefinePolicy::Guarded);
    }

    #[test]
    fn test_layer_from_toml_accepts_both_song_list_forms() {
        let config = LayerTomlConfig::from_toml_str(
            r#"
            [audio]
            default_layer_songs = "{ SONG(QWERTY_SOUND), SONG(DVORAK_SOUND) }"
            "#,
            "test",
        )
        .unwrap();
        let text = Layer::from_toml("a", LayerKind::User, &config).unwrap();

        let config = LayerTomlConfig::from_toml_str(
            r#"
            [audio]
            default_layer_songs = ["QWERTY_SOUND", "SONG(DVORAK_SOUND)"]
            "#,
            "test",
        )
        .unwrap();
        let list = Layer::from_toml("b", LayerKind::User, &config).unwrap();

        assert_eq!(
            text.get(Symbol::DefaultLayerSongs).unwrap().value,
            list.get(Symbol::DefaultLayerSongs).unwrap().value
        );
    }

    #[test]
    fn test_unknown_symbol_in_defines_is_rejected() {
        let err = LayerTomlConfig::from_toml_str(
            r#"
            [defines]
            unconditional = ["MOUSEKEY_MOVE_MAXX"]
            "#,
            "test",
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_misspelled_key_is_rejected() {
        let err = LayerTomlConfig::from_toml_str(
            r#"
            [mouse_key]
            max_sped = 10
            "#,
            "test",
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_value_display() {
        let songs = Value::SongList(vec![SongId::new("QWERTY_SOUND"), SongId::new("DVORAK_SOUND")]);
        assert_eq!(songs.to_string(), "{ SONG(QWERTY_SOUND), SONG(DVORAK_SOUND) }");
        assert_eq!(Value::Integer(5).to_string(), "5");
    }
}
