//! Centralized validation for the keymap configuration
//!
//! Range checks run on the resolved table, so a value is checked no matter
//! which layer it came from.

use log::warn;

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};
use crate::layer::{LayerKind, Value};
use crate::resolve::Resolution;
use crate::symbol::Symbol;

/// What to do with an out-of-range integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RangeMode {
    /// Reject with [`ConfigError::InvalidValue`]
    #[default]
    Strict,
    /// Clamp into range and log a warning
    Clamp,
}

/// Inclusive range of an integer symbol. Deltas are bounded by their max, see [`validate_integer`].
pub fn range_of(symbol: Symbol) -> Option<(i64, i64)> {
    let range = match symbol {
        Symbol::EncoderResolution => defaults::ENCODER_RESOLUTION_RANGE,
        Symbol::MidiToneKeycodeOctaves => defaults::MIDI_TONE_KEYCODE_OCTAVES_RANGE,
        Symbol::MousekeyDelay => defaults::MOUSEKEY_DELAY_RANGE,
        Symbol::MousekeyInterval | Symbol::MousekeyMaxSpeed | Symbol::MousekeyWheelMaxSpeed => {
            defaults::MOUSEKEY_POSITIVE_BYTE_RANGE
        }
        Symbol::MousekeyTimeToMax | Symbol::MousekeyWheelTimeToMax => defaults::MOUSEKEY_TIME_TO_MAX_RANGE,
        Symbol::MousekeyMoveMax | Symbol::MousekeyWheelMax => (1, defaults::HID_AXIS_MAX),
        Symbol::MousekeyMoveDelta | Symbol::MousekeyWheelDelta => (0, defaults::HID_AXIS_MAX),
        _ => return None,
    };
    Some(range)
}

/// Check `value` of `symbol` against `(min, max)`
pub fn check_range(symbol: Symbol, value: i64, (min, max): (i64, i64), mode: RangeMode) -> ConfigResult<i64> {
    if (min..=max).contains(&value) {
        return Ok(value);
    }
    match mode {
        RangeMode::Strict => Err(ConfigError::InvalidValue {
            field: format!("{} ({})", symbol.config_key(), symbol),
            value: value.to_string(),
            expected: format!("{} to {}", min, max),
        }),
        RangeMode::Clamp => {
            let clamped = value.clamp(min, max);
            warn!("{} = {} is out of range {}..={}, clamped to {}", symbol, value, min, max, clamped);
            Ok(clamped)
        }
    }
}

/// Fetch and range-check an integer symbol. Missing integers are an error,
/// the framework layer normally defines all of them.
pub fn validate_integer(resolution: &Resolution, symbol: Symbol, mode: RangeMode) -> ConfigResult<i64> {
    let value = match resolution.value(symbol) {
        Some(Value::Integer(i)) => *i,
        Some(other) => {
            return Err(ConfigError::InvalidValue {
                field: symbol.config_key().to_string(),
                value: other.to_string(),
                expected: "an integer".to_string(),
            });
        }
        None => {
            return Err(ConfigError::MissingField {
                field: format!("{} ({})", symbol.config_key(), symbol),
            });
        }
    };

    let range = match symbol {
        // A delta can never exceed the max it is capped by
        Symbol::MousekeyMoveDelta => (0, validate_integer(resolution, Symbol::MousekeyMoveMax, mode)?),
        Symbol::MousekeyWheelDelta => (0, validate_integer(resolution, Symbol::MousekeyWheelMax, mode)?),
        _ => range_of(symbol).unwrap_or((i64::MIN, i64::MAX)),
    };
    check_range(symbol, value, range, mode)
}

/// Validates cross-field rules of the MIDI section
pub fn validate_midi(resolution: &Resolution) -> ConfigResult<()> {
    if !resolution.is_enabled(Symbol::MidiEnableStrict) || resolution.is_enabled(Symbol::MidiAdvanced) {
        return Ok(());
    }

    if let Some(octaves) = resolution.get(Symbol::MidiToneKeycodeOctaves) {
        if octaves.kind != LayerKind::Framework {
            return Err(ConfigError::Validation {
                field: Symbol::MidiToneKeycodeOctaves.config_key().to_string(),
                message: format!(
                    "{} is set by layer {} but {} is disabled and {} is on",
                    Symbol::MidiToneKeycodeOctaves,
                    octaves.layer,
                    Symbol::MidiAdvanced,
                    Symbol::MidiEnableStrict
                ),
            });
        }
    }
    Ok(())
}

/// Validates a song list's length
pub fn validate_song_list(symbol: Symbol, len: usize) -> ConfigResult<()> {
    if len == 0 {
        return Err(ConfigError::Validation {
            field: symbol.config_key().to_string(),
            message: format!("{} must contain at least one song", symbol),
        });
    }
    if len > defaults::MAX_LAYER_SONGS {
        return Err(ConfigError::Validation {
            field: symbol.config_key().to_string(),
            message: format!(
                "{} has {} songs, at most {} default layers exist",
                symbol,
                len,
                defaults::MAX_LAYER_SONGS
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::{DefinePolicy, Layer};
    use crate::resolve::Resolver;

    fn resolution_with(defines: &[(Symbol, i64)]) -> Resolution {
        let mut layer = Layer::new("user", LayerKind::User);
        for (symbol, value) in defines {
            layer = layer.define(*symbol, Value::Integer(*value), DefinePolicy::Guarded);
        }
        Resolver::new().layer(layer).resolve()
    }

    #[test]
    fn test_check_range_strict_and_clamp() {
        let range = (1, 127);
        assert_eq!(check_range(Symbol::MousekeyMoveMax, 127, range, RangeMode::Strict), Ok(127));
        assert!(matches!(
            check_range(Symbol::MousekeyMoveMax, 130, range, RangeMode::Strict),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(check_range(Symbol::MousekeyMoveMax, 130, range, RangeMode::Clamp), Ok(127));
        assert_eq!(check_range(Symbol::MousekeyMoveMax, -3, range, RangeMode::Clamp), Ok(1));
    }

    #[test]
    fn test_delta_is_bounded_by_max() {
        let resolution = resolution_with(&[(Symbol::MousekeyMoveMax, 10), (Symbol::MousekeyMoveDelta, 12)]);
        let err = validate_integer(&resolution, Symbol::MousekeyMoveDelta, RangeMode::Strict).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                field: "mouse_key.move_delta (MOUSEKEY_MOVE_DELTA)".to_string(),
                value: "12".to_string(),
                expected: "0 to 10".to_string(),
            }
        );
        assert_eq!(
            validate_integer(&resolution, Symbol::MousekeyMoveDelta, RangeMode::Clamp),
            Ok(10)
        );
    }

    #[test]
    fn test_missing_integer() {
        let resolution = resolution_with(&[]);
        assert!(matches!(
            validate_integer(&resolution, Symbol::EncoderResolution, RangeMode::Strict),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_song_list_length() {
        assert!(validate_song_list(Symbol::DefaultLayerSongs, 0).is_err());
        assert!(validate_song_list(Symbol::DefaultLayerSongs, 3).is_ok());
        assert!(validate_song_list(Symbol::DefaultLayerSongs, 33).is_err());
    }
}
