use std::path::Path;
use std::{env, fs};

use planck_config::{ConfigLoader, KeymapConfig, codegen, header};

fn main() {
    // Ensure build.rs is re-run when files change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=keymap.toml");
    println!("cargo:rerun-if-env-changed=PLANCK_USER_TOML_PATH");
    for var in ConfigLoader::env_override_vars() {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let audio = env::var("CARGO_FEATURE_AUDIO").is_ok();
    let midi = env::var("CARGO_FEATURE_MIDI").is_ok();

    let mut loader = ConfigLoader::new().build_flags(audio, midi);
    // User overrides are included before the keymap defaults
    if let Ok(toml_path) = env::var("PLANCK_USER_TOML_PATH") {
        println!("cargo:rerun-if-changed={toml_path}");
        loader = loader.user_file(toml_path);
    }
    // `PLANCK_CFG_<SECTION>__<KEY>` overrides apply on top of the user file
    loader = loader.user_env();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    loader = loader.keymap_file(Path::new(&manifest_dir).join("keymap.toml"));

    let resolution = loader
        .resolve()
        .unwrap_or_else(|e| panic!("Failed to load keymap config: {e}"));
    for diagnostic in resolution.diagnostics() {
        println!("cargo:warning={diagnostic}");
    }
    let config = KeymapConfig::from_resolution(&resolution, loader.mode())
        .unwrap_or_else(|e| panic!("Invalid keymap config: {e}"));

    let out_dir = env::var("OUT_DIR").unwrap();
    fs::write(Path::new(&out_dir).join("constants.rs"), codegen::constants_str(&config))
        .expect("Failed to write constants.rs file");
    fs::write(Path::new(&out_dir).join("config.h"), header::render(&resolution))
        .expect("Failed to write config.h file");
}
