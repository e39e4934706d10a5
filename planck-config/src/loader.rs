// Configuration loader, assembles layers in include order

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use log::debug;
use strum::IntoEnumIterator;

use crate::defaults::{ENV_PREFIX, ENV_SEPARATOR, FRAMEWORK_DEFAULTS, FRAMEWORK_LAYER_NAME};
use crate::error::{ConfigError, ConfigResult};
use crate::keymap_config::KeymapConfig;
use crate::layer::{Layer, LayerKind};
use crate::resolve::{Resolution, Resolver};
use crate::symbol::Symbol;
use crate::validation::RangeMode;
use crate::LayerTomlConfig;

#[derive(Clone, Debug)]
enum Source {
    File(PathBuf),
    Str(String),
}

/// Loads the keymap configuration.
///
/// Layers are included in this order:
///
/// 1. **build**: subsystem switches from the build ([`ConfigLoader::build_flags`])
/// 2. **user**: override file and/or environment, merged by the `config` crate
/// 3. **keymap**: the keymap's own defaults
/// 4. **framework**: built-in defaults, always present
///
/// # Example
///
/// ```no_run
/// use planck_config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .build_flags(true, true)
///     .keymap_file("keymap.toml")
///     .load()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigLoader {
    build: Option<Layer>,
    user: Vec<Source>,
    env: Option<Environment>,
    keymap: Option<Source>,
    mode: RangeMode,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the audio and MIDI subsystems, as the build system would
    pub fn build_flags(mut self, audio: bool, midi: bool) -> Self {
        self.build = Some(Layer::build(audio, midi));
        self
    }

    /// Add a user override file. Later files override earlier ones.
    pub fn user_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.user.push(Source::File(path.as_ref().to_path_buf()));
        self
    }

    /// Add user overrides from a toml string
    pub fn user_str(mut self, s: &str) -> Self {
        self.user.push(Source::Str(s.to_string()));
        self
    }

    /// Read user overrides from `PLANCK_CFG_<SECTION>__<KEY>` environment variables
    pub fn user_env(self) -> Self {
        self.user_env_source(Self::default_environment())
    }

    /// Read user overrides from a custom environment source, applied after all user files
    pub fn user_env_source(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn keymap_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.keymap = Some(Source::File(path.as_ref().to_path_buf()));
        self
    }

    pub fn keymap_str(mut self, s: &str) -> Self {
        self.keymap = Some(Source::Str(s.to_string()));
        self
    }

    pub fn range_mode(mut self, mode: RangeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> RangeMode {
        self.mode
    }

    /// The environment source used by [`ConfigLoader::user_env`]
    pub fn default_environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("audio.default_layer_songs")
            .with_list_parse_key("defines.unconditional")
    }

    /// Names of every variable [`ConfigLoader::user_env`] reads, for `cargo:rerun-if-env-changed`
    pub fn env_override_vars() -> Vec<String> {
        Symbol::iter()
            .map(Symbol::config_key)
            .chain(["defines.unconditional"])
            .map(|key| format!("{}_{}", ENV_PREFIX, key.replace('.', ENV_SEPARATOR).to_uppercase()))
            .collect()
    }

    /// Assemble the layers in include order
    pub fn resolver(&self) -> ConfigResult<Resolver> {
        let mut resolver = Resolver::new();
        if let Some(build) = &self.build {
            resolver = resolver.layer(build.clone());
        }
        if let Some(user) = self.load_user_layer()? {
            resolver = resolver.layer(user);
        }
        if let Some(keymap) = &self.keymap {
            let (origin, config) = Self::load_source(keymap)?;
            debug!("Loaded keymap layer from {}", origin);
            resolver = resolver.layer(Layer::from_toml("keymap", LayerKind::Keymap, &config)?);
        }
        let framework = LayerTomlConfig::from_toml_str(FRAMEWORK_DEFAULTS, FRAMEWORK_LAYER_NAME)?;
        resolver = resolver.layer(Layer::from_toml(FRAMEWORK_LAYER_NAME, LayerKind::Framework, &framework)?);
        Ok(resolver)
    }

    pub fn resolve(&self) -> ConfigResult<Resolution> {
        Ok(self.resolver()?.resolve())
    }

    /// Resolve and validate
    pub fn load(&self) -> ConfigResult<KeymapConfig> {
        KeymapConfig::from_resolution(&self.resolve()?, self.mode)
    }

    fn load_source(source: &Source) -> ConfigResult<(String, LayerTomlConfig)> {
        match source {
            Source::File(path) => {
                let origin = path.display().to_string();
                let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
                    path: origin.clone(),
                    message: e.to_string(),
                })?;
                let config = LayerTomlConfig::from_toml_str(&content, &origin)?;
                Ok((origin, config))
            }
            Source::Str(s) => Ok(("<string>".to_string(), LayerTomlConfig::from_toml_str(s, "<string>")?)),
        }
    }

    /// Merge all user sources into one layer, `None` if there are none
    fn load_user_layer(&self) -> ConfigResult<Option<Layer>> {
        if self.user.is_empty() && self.env.is_none() {
            return Ok(None);
        }

        let mut builder = Config::builder();
        let mut origins = Vec::new();
        for source in &self.user {
            match source {
                Source::File(path) => {
                    let origin = path.display().to_string();
                    if !path.exists() {
                        return Err(ConfigError::FileRead {
                            path: origin,
                            message: "file not found".to_string(),
                        });
                    }
                    builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
                    origins.push(origin);
                }
                Source::Str(s) => {
                    builder = builder.add_source(File::from_str(s, FileFormat::Toml));
                    origins.push("<string>".to_string());
                }
            }
        }
        if let Some(env) = &self.env {
            builder = builder.add_source(env.clone());
            origins.push("<environment>".to_string());
        }

        let origin = origins.join(", ");
        let config: LayerTomlConfig = builder
            .build()
            .map_err(|e| ConfigError::Merge {
                source: origin.clone(),
                message: e.to_string(),
            })?
            .try_deserialize()
            .map_err(|e| ConfigError::Merge {
                source: origin.clone(),
                message: e.to_string(),
            })?;
        debug!("Loaded user layer from {}", origin);

        Ok(Some(Layer::from_toml("user", LayerKind::User, &config)?))
    }
}
