use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{presentation::Styles, utils, validation::Validation};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Record the flicker is constructed from; checked at construction.
    #[serde(default)]
    pub flicker: Value,
    #[serde(default)]
    pub validation: Option<Validation>,
    #[serde(default)]
    pub styles: Styles,
}

impl Config {
    /// Load the embedded defaults, then any `config.*` file found in the
    /// config directory on top of them.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(utils::get_config_dir())
    }

    pub fn from_dir(config_dir: PathBuf) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let mut builder = config::Config::builder();

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        Ok(cfg)
    }

    /// The configuration embedded in the binary.
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Fill unset flicker fields and styles from `defaults`. A user flicker
    /// section that is not a record is kept as is so construction reports it.
    pub fn merge_defaults(&mut self, defaults: &Config) {
        self.styles.merge_defaults(&defaults.styles);
        match (&mut self.flicker, &defaults.flicker) {
            (Value::Null, default) => self.flicker = default.clone(),
            (Value::Object(user), Value::Object(default)) => {
                for (key, value) in default {
                    user.entry(key.clone()).or_insert_with(|| value.clone());
                }
            }
            _ => {}
        }
    }

    /// Overlay `overrides` onto the flicker record.
    pub fn override_flicker(&mut self, overrides: Map<String, Value>) {
        if overrides.is_empty() {
            return;
        }
        match &mut self.flicker {
            Value::Object(record) => record.extend(overrides),
            other => *other = Value::Object(overrides),
        }
    }

    pub fn validation(&self) -> Validation {
        self.validation.unwrap_or_default()
    }
}
