use std::collections::HashMap;
use std::fmt;

use log::warn;
use once_cell::sync::Lazy;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{ConfigError, ConfigResult};

#[derive(Parser)]
#[grammar = "song.pest"]
struct SongParser;

/// Songs shipped with the firmware's audio subsystem, keyed by lower-case name
pub static SONG_CATALOG: Lazy<HashMap<&str, &str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    macro_rules! add_song {
        ($song:tt) => {
            m.insert(paste::paste!{ stringify!([<$song:lower>]) }, stringify!($song));
        };
        ($song:tt = $( $alias:expr),*) => {
            add_song!($song);
            $(
                m.insert($alias, stringify!($song));
            )*
        };
    }

    add_song!(STARTUP_SOUND);
    add_song!(GOODBYE_SOUND);
    add_song!(NO_SOUND = "silent", "none");
    add_song!(PLANCK_SOUND);
    add_song!(PREONIC_SOUND);
    add_song!(QWERTY_SOUND);
    add_song!(COLEMAK_SOUND);
    add_song!(DVORAK_SOUND);
    add_song!(WORKMAN_SOUND);
    add_song!(PLOVER_SOUND);
    add_song!(PLOVER_GOODBYE_SOUND);
    add_song!(MUSIC_ON_SOUND);
    add_song!(MUSIC_OFF_SOUND);
    add_song!(AUDIO_ON_SOUND);
    add_song!(AUDIO_OFF_SOUND);
    add_song!(MUSIC_SCALE_SOUND);
    add_song!(CAPS_LOCK_ON_SOUND);
    add_song!(CAPS_LOCK_OFF_SOUND);
    add_song!(SCROLL_LOCK_ON_SOUND);
    add_song!(SCROLL_LOCK_OFF_SOUND);
    add_song!(NUM_LOCK_ON_SOUND);
    add_song!(NUM_LOCK_OFF_SOUND);
    add_song!(AG_NORM_SOUND);
    add_song!(AG_SWAP_SOUND);
    add_song!(UNICODE_WINDOWS);
    add_song!(UNICODE_LINUX);
    add_song!(TERMINAL_SOUND);
    add_song!(CHROMATIC_SOUND);
    add_song!(MAJOR_SOUND);
    add_song!(MINOR_SOUND);
    add_song!(GUITAR_SOUND);
    add_song!(VIOLIN_SOUND);
    add_song!(MARIO_THEME);
    add_song!(MARIO_GAMEOVER);
    add_song!(MARIO_MUSHROOM);
    add_song!(E1M1_DOOM);
    add_song!(DISNEY_SONG);
    add_song!(NUMBER_ONE);
    add_song!(CABBAGE_SONG);
    add_song!(OLD_SPICE);
    add_song!(VICTORY_FANFARE_SHORT);
    add_song!(ALL_STAR);
    add_song!(RICK_ROLL);
    add_song!(FF_PRELUDE);
    add_song!(TO_BOLDLY_GO);
    add_song!(KATAWARE_DOKI);
    add_song!(MEGALOVANIA);
    add_song!(MICHISHIRUBE);
    add_song!(LIEBE_SOLL);
    add_song!(ZELDA_PUZZLE);
    add_song!(ZELDA_TREASURE);
    add_song!(OVERWATCH_THEME);

    m
});

/// A symbolic song identifier, always upper case
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SongId(String);

impl SongId {
    /// Canonicalise a song name. Catalogue aliases resolve to their song,
    /// other names are upper-cased and kept, since keymaps may declare their own songs.
    pub fn new(name: &str) -> Self {
        match SONG_CATALOG.get(name.to_lowercase().as_str()) {
            Some(canonical) => SongId(canonical.to_string()),
            None => {
                let canonical = name.to_uppercase();
                warn!("Song {} is not in the firmware song catalogue", canonical);
                SongId(canonical)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_known(&self) -> bool {
        SONG_CATALOG.contains_key(self.0.to_lowercase().as_str())
    }

    /// Parse `NAME` or `SONG(NAME)`
    pub fn parse(input: &str) -> ConfigResult<Self> {
        let pairs = SongParser::parse(Rule::song, input).map_err(|e| ConfigError::SongParse {
            input: input.to_string(),
            message: e.to_string(),
        })?;
        collect_songs(pairs)?
            .into_iter()
            .next()
            .ok_or_else(|| ConfigError::SongParse {
                input: input.to_string(),
                message: "no song name found".to_string(),
            })
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SONG({})", self.0)
    }
}

/// Parse a song list, either comma separated or in `{ SONG(A), SONG(B) }` form
pub fn parse_song_list(input: &str) -> ConfigResult<Vec<SongId>> {
    let pairs = SongParser::parse(Rule::song_list, input).map_err(|e| ConfigError::SongParse {
        input: input.to_string(),
        message: e.to_string(),
    })?;
    collect_songs(pairs)
}

fn collect_songs(pairs: pest::iterators::Pairs<Rule>) -> ConfigResult<Vec<SongId>> {
    let mut songs = Vec::new();
    for pair in pairs {
        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::song_call => {
                    if let Some(name) = inner_pair.into_inner().next() {
                        songs.push(SongId::new(name.as_str()));
                    }
                }
                Rule::song_name => songs.push(SongId::new(inner_pair.as_str())),
                Rule::EOI => {}
                rule => {
                    return Err(ConfigError::SongParse {
                        input: inner_pair.as_str().to_string(),
                        message: format!("unexpected rule {:?}", rule),
                    });
                }
            }
        }
    }
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_and_macro_form() {
        assert_eq!(SongId::parse("PLANCK_SOUND").unwrap().name(), "PLANCK_SOUND");
        assert_eq!(SongId::parse(" SONG( planck_sound ) ").unwrap().name(), "PLANCK_SOUND");
        assert_eq!(SongId::parse("song(NO_SOUND)").unwrap().to_string(), "SONG(NO_SOUND)");
    }

    #[test]
    fn test_alias_resolves_to_catalogue_song() {
        assert_eq!(SongId::parse("silent").unwrap().name(), "NO_SOUND");
    }

    #[test]
    fn test_name_starting_with_song_is_not_a_call() {
        let song = SongId::parse("SONGBIRD_SOUND").unwrap();
        assert_eq!(song.name(), "SONGBIRD_SOUND");
        assert!(!song.is_known());
    }

    #[test]
    fn test_parse_c_initializer_list() {
        let songs =
            parse_song_list("{ SONG(QWERTY_SOUND),\n  SONG(COLEMAK_SOUND),\n  SONG(DVORAK_SOUND)\n}").unwrap();
        let names: Vec<_> = songs.iter().map(SongId::name).collect();
        assert_eq!(names, ["QWERTY_SOUND", "COLEMAK_SOUND", "DVORAK_SOUND"]);
    }

    #[test]
    fn test_parse_plain_list_with_trailing_comma() {
        let songs = parse_song_list("QWERTY_SOUND, SONG(DVORAK_SOUND),").unwrap();
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[1].name(), "DVORAK_SOUND");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(SongId::parse(""), Err(ConfigError::SongParse { .. })));
        assert!(matches!(SongId::parse("SONG(A"), Err(ConfigError::SongParse { .. })));
        assert!(matches!(SongId::parse("A B"), Err(ConfigError::SongParse { .. })));
        assert!(matches!(parse_song_list("{ A,, B }"), Err(ConfigError::SongParse { .. })));
    }
}
