//! # planck-config
//!
//! Build-time configuration of the Planck keymap: the audio, MIDI, encoder
//! and mouse key parameters read by the firmware.
//!
//! Configuration comes from ordered layers (build flags, user overrides,
//! keymap defaults, framework defaults). [`Resolver`] walks them the way the
//! firmware's preprocessor would, [`KeymapConfig`] is the validated result,
//! and [`header`] / [`codegen`] turn it back into `config.h` or Rust constants.

use serde_derive::Deserialize;

pub mod codegen;
pub mod defaults;
pub mod error;
pub mod header;
pub mod keymap_config;
pub mod layer;
pub mod loader;
pub mod resolve;
pub mod song;
pub mod symbol;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use keymap_config::{AudioConfig, EncoderConfig, KeymapConfig, MidiConfig, MouseKeyConfig};
pub use layer::{Define, DefinePolicy, Layer, LayerKind, Value};
pub use loader::ConfigLoader;
pub use resolve::{Diagnostic, Resolution, Resolved, Resolver};
pub use song::SongId;
pub use symbol::{Subsystem, Symbol, SymbolKind};
pub use validation::RangeMode;

/// One configuration layer as written in toml.
///
/// Every field is optional: a layer only defines what it sets.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerTomlConfig {
    /// Audio config
    pub audio: Option<AudioTomlConfig>,
    /// MIDI config
    pub midi: Option<MidiTomlConfig>,
    /// Rotary encoder config
    pub encoder: Option<EncoderTomlConfig>,
    /// Mouse key config
    pub mouse_key: Option<MouseKeyTomlConfig>,
    /// Define policy of this layer
    pub defines: Option<DefinesTomlConfig>,
}

impl LayerTomlConfig {
    /// Parse a layer from a toml string, `origin` is only used in error messages
    pub fn from_toml_str(s: &str, origin: &str) -> ConfigResult<Self> {
        toml::from_str(s).map_err(|e| ConfigError::TomlParse {
            path: origin.to_string(),
            message: e.message().to_string(),
        })
    }
}

/// Configurations for audio
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioTomlConfig {
    /// Build-system switch of the audio subsystem
    pub enable: Option<bool>,
    /// Played once at boot
    pub startup_song: Option<String>,
    /// Played when the default layer changes, indexed by layer
    pub default_layer_songs: Option<SongListTomlConfig>,
}

/// A song list, either a toml array or a single C initializer string
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SongListTomlConfig {
    List(Vec<String>),
    Text(String),
}

/// Configurations for MIDI
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MidiTomlConfig {
    /// Build-system switch of the MIDI subsystem
    pub enable: Option<bool>,
    /// MIDI notes can be sent when music mode is on
    pub basic: Option<bool>,
    /// MIDI keycodes in the keymap, octave shift, transpose, sustain, etc.
    pub advanced: Option<bool>,
    /// Prevent use of disabled MIDI features in the keymap
    pub enable_strict: Option<bool>,
    /// Number of tone keycode octaves, each adds 12 keycodes
    pub tone_keycode_octaves: Option<i64>,
}

/// Configurations for rotary encoders
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncoderTomlConfig {
    /// Detents per reported step
    pub resolution: Option<i64>,
}

/// Configurations for mouse keys
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MouseKeyTomlConfig {
    /// Delay in ms before the cursor starts moving
    pub delay: Option<i64>,
    /// Time in ms between cursor movements
    pub interval: Option<i64>,
    /// Maximum cursor speed, in deltas per interval
    pub max_speed: Option<i64>,
    /// Intervals until the cursor reaches max speed
    pub time_to_max: Option<i64>,
    /// Maximum wheel speed
    pub wheel_max_speed: Option<i64>,
    /// Intervals until the wheel reaches max speed
    pub wheel_time_to_max: Option<i64>,
    /// Largest cursor step in one report
    pub move_max: Option<i64>,
    /// Largest wheel step in one report
    pub wheel_max: Option<i64>,
    /// Cursor step per movement
    pub move_delta: Option<i64>,
    /// Wheel step per movement
    pub wheel_delta: Option<i64>,
}

/// Define policy of a layer
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinesTomlConfig {
    /// Symbols this layer defines even if an earlier layer already did
    #[serde(default)]
    pub unconditional: Vec<Symbol>,
}
