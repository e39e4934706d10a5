//! # Planck keymap parameters
//!
//! Audio, MIDI, rotary encoder and mouse key parameters of the Planck keymap,
//! resolved from `keymap.toml` at build time.
//!
//! Set `PLANCK_USER_TOML_PATH` to a toml file to override any keymap default.
//! Single values can also be overridden from the environment, e.g.
//! `PLANCK_CFG_MOUSE_KEY__MAX_SPEED=20`.
//! Audio and MIDI are switched on by the `audio` and `midi` features, without
//! them none of their parameters exist.

#![no_std]

#[allow(dead_code)]
mod constants {
    include!(concat!(env!("OUT_DIR"), "/constants.rs"));
}

#[cfg(feature = "audio")]
pub mod audio;
pub mod encoder;
#[cfg(feature = "midi")]
pub mod midi;
pub mod mouse_key;

/// The generated `config.h` for the C firmware build
pub const CONFIG_HEADER: &str = include_str!(concat!(env!("OUT_DIR"), "/config.h"));
