use crate::defaults::KEYCODES_PER_OCTAVE;
use crate::error::{ConfigError, ConfigResult};
use crate::layer::Value;
use crate::resolve::Resolution;
use crate::song::SongId;
use crate::symbol::Symbol;
use crate::validation::{self, RangeMode};

/// Validated configuration of the keymap, one struct per firmware subsystem.
///
/// Subsystems are independent: each struct is built only from its own symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeymapConfig {
    /// `None` when audio is not enabled
    pub audio: Option<AudioConfig>,
    /// `None` when MIDI is not enabled
    pub midi: Option<MidiConfig>,
    pub encoder: EncoderConfig,
    pub mouse_key: MouseKeyConfig,
}

/// Songs of the audio subsystem
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AudioConfig {
    /// Played once at boot
    pub startup_song: Option<SongId>,
    /// Played on default layer change, indexed by layer
    pub default_layer_songs: Vec<SongId>,
}

impl AudioConfig {
    pub fn layer_song(&self, layer: usize) -> Option<&SongId> {
        self.default_layer_songs.get(layer)
    }
}

/// MIDI feature tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MidiConfig {
    pub basic: bool,
    pub advanced: bool,
    pub strict: bool,
    pub tone_keycode_octaves: u8,
}

impl MidiConfig {
    /// Number of tone keycodes, each octave adds 12
    pub fn tone_keycode_count(&self) -> u16 {
        self.tone_keycode_octaves as u16 * KEYCODES_PER_OCTAVE as u16
    }
}

/// Rotary encoder config
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Detents per reported step
    pub resolution: u8,
}

/// Mouse key speed curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseKeyConfig {
    pub delay: u16,
    pub interval: u8,
    pub max_speed: u8,
    pub time_to_max: u8,
    pub wheel_max_speed: u8,
    pub wheel_time_to_max: u8,
    pub move_max: u8,
    pub wheel_max: u8,
    pub move_delta: u8,
    pub wheel_delta: u8,
}

impl KeymapConfig {
    /// Validate a resolution and convert it into typed config
    pub fn from_resolution(resolution: &Resolution, mode: RangeMode) -> ConfigResult<Self> {
        Ok(Self {
            audio: AudioConfig::from_resolution(resolution)?,
            midi: MidiConfig::from_resolution(resolution, mode)?,
            encoder: EncoderConfig::from_resolution(resolution, mode)?,
            mouse_key: MouseKeyConfig::from_resolution(resolution, mode)?,
        })
    }
}

impl AudioConfig {
    fn from_resolution(resolution: &Resolution) -> ConfigResult<Option<Self>> {
        if !resolution.is_enabled(Symbol::AudioEnable) {
            return Ok(None);
        }

        let startup_song = match resolution.value(Symbol::StartupSong) {
            Some(Value::Song(song)) => Some(song.clone()),
            Some(other) => return Err(unexpected(Symbol::StartupSong, other, "a song")),
            None => None,
        };
        let default_layer_songs = match resolution.value(Symbol::DefaultLayerSongs) {
            Some(Value::SongList(songs)) => {
                validation::validate_song_list(Symbol::DefaultLayerSongs, songs.len())?;
                songs.clone()
            }
            Some(other) => return Err(unexpected(Symbol::DefaultLayerSongs, other, "a song list")),
            None => Vec::new(),
        };

        Ok(Some(Self {
            startup_song,
            default_layer_songs,
        }))
    }
}

impl MidiConfig {
    fn from_resolution(resolution: &Resolution, mode: RangeMode) -> ConfigResult<Option<Self>> {
        if !resolution.is_enabled(Symbol::MidiEnable) {
            return Ok(None);
        }
        validation::validate_midi(resolution)?;

        Ok(Some(Self {
            basic: resolution.is_enabled(Symbol::MidiBasic),
            advanced: resolution.is_enabled(Symbol::MidiAdvanced),
            strict: resolution.is_enabled(Symbol::MidiEnableStrict),
            tone_keycode_octaves: validation::validate_integer(resolution, Symbol::MidiToneKeycodeOctaves, mode)?
                as u8,
        }))
    }
}

impl EncoderConfig {
    fn from_resolution(resolution: &Resolution, mode: RangeMode) -> ConfigResult<Self> {
        Ok(Self {
            resolution: validation::validate_integer(resolution, Symbol::EncoderResolution, mode)? as u8,
        })
    }
}

impl MouseKeyConfig {
    fn from_resolution(resolution: &Resolution, mode: RangeMode) -> ConfigResult<Self> {
        // All ranges fit in the target type, see `validation::range_of`
        let byte = |symbol| validation::validate_integer(resolution, symbol, mode).map(|v| v as u8);
        Ok(Self {
            delay: validation::validate_integer(resolution, Symbol::MousekeyDelay, mode)? as u16,
            interval: byte(Symbol::MousekeyInterval)?,
            max_speed: byte(Symbol::MousekeyMaxSpeed)?,
            time_to_max: byte(Symbol::MousekeyTimeToMax)?,
            wheel_max_speed: byte(Symbol::MousekeyWheelMaxSpeed)?,
            wheel_time_to_max: byte(Symbol::MousekeyWheelTimeToMax)?,
            move_max: byte(Symbol::MousekeyMoveMax)?,
            wheel_max: byte(Symbol::MousekeyWheelMax)?,
            move_delta: byte(Symbol::MousekeyMoveDelta)?,
            wheel_delta: byte(Symbol::MousekeyWheelDelta)?,
        })
    }
}

fn unexpected(symbol: Symbol, value: &Value, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: symbol.config_key().to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}
