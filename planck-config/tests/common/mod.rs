use planck_config::{ConfigLoader, Layer, LayerKind, LayerTomlConfig};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Defaults of the Planck keymap crate
pub const KEYMAP_TOML: &str = include_str!("../../../planck-keymap/keymap.toml");

/// Loader with both subsystems enabled and the real keymap defaults
pub fn keymap_loader() -> ConfigLoader {
    ConfigLoader::new().build_flags(true, true).keymap_str(KEYMAP_TOML)
}

pub fn layer(name: &str, kind: LayerKind, toml: &str) -> Layer {
    let config = LayerTomlConfig::from_toml_str(toml, name).unwrap();
    Layer::from_toml(name, kind, &config).unwrap()
}
