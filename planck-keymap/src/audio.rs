//! Startup and default layer songs

/// A song of the firmware's song catalogue, e.g. `PLANCK_SOUND`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Song {
    pub name: &'static str,
}

impl Song {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// Played on power up, `None` when no startup song is defined
pub const STARTUP_SONG: Option<Song> = crate::constants::STARTUP_SONG;

/// Played when the default layer changes, indexed by layer
pub const DEFAULT_LAYER_SONGS: &[Song] = crate::constants::DEFAULT_LAYER_SONGS;

/// The song of default layer `layer`, if it has one
pub fn layer_song(layer: usize) -> Option<Song> {
    DEFAULT_LAYER_SONGS.get(layer).copied()
}
