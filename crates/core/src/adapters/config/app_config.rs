use std::collections::HashMap;
use std::path::PathBuf;

use config::Config;
use error_stack::{Report, Result, ResultExt};
use serde::de::IntoDeserializer;
use serde::Deserialize;
use serde_path_to_error::{Deserializer as PathDeserializer, Segment, Track};
use thiserror::Error;

use crate::domain::ChainRef;

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const BUNDLE_LOCATION_ENV: &str = "BUNDLE_LOCATION";
pub const ENV_PREFIX: &str = "WALLET_SHELL";

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Error reading config file '{path}'")]
    ReadFailed { path: String },
    #[error("Failed to deserialize config file '{path}' at field '{field}'")]
    InvalidField { path: String, field: String },
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub main: MainConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ShellConfig {
    /// Directory holding the bundled UI, including the isolation bridge.
    #[serde(default = "ShellConfig::default_bundle_location")]
    pub bundle_location: PathBuf,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct MainConfig {
    /// Keyed by chain type, then by chain id.
    #[serde(default)]
    pub networks: HashMap<String, HashMap<String, NetworkConfig>>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub explorer: Option<String>,
}

impl ShellConfig {
    fn default_bundle_location() -> PathBuf {
        PathBuf::from("bundle")
    }

    pub fn preload_path(&self) -> PathBuf {
        self.bundle_location.join("bridge.js")
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            bundle_location: Self::default_bundle_location(),
        }
    }
}

impl AppConfig {
    pub fn default_path() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "Config".to_string())
    }

    /// Reads `config_path` (any format the `config` crate knows) and layers
    /// `WALLET_SHELL__*` variables and `BUNDLE_LOCATION` on top.
    pub fn load(config_path: &str) -> Result<Self, AppConfigError> {
        let read_failed = || AppConfigError::ReadFailed {
            path: config_path.to_string(),
        };

        let config = Config::builder()
            .add_source(config::File::with_name(config_path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option(
                "shell.bundle_location",
                std::env::var(BUNDLE_LOCATION_ENV).ok(),
            )
            .change_context_lazy(read_failed)?
            .build()
            .change_context_lazy(read_failed)
            .attach_printable("Make sure the file exists and is well formed")?;

        let value = config
            .try_deserialize::<serde_json::Value>()
            .change_context_lazy(read_failed)?;

        Self::from_value(config_path, value)
    }

    fn from_value(config_path: &str, value: serde_json::Value) -> Result<Self, AppConfigError> {
        let mut track = Track::new();
        let path_de = PathDeserializer::new(value.into_deserializer(), &mut track);
        match AppConfig::deserialize(path_de) {
            Ok(config) => Ok(config),
            Err(e) => {
                let field = track
                    .path()
                    .iter()
                    .map(|seg| match seg {
                        Segment::Seq { index } => format!("[{}]", index),
                        Segment::Map { key } => format!(".{}", key),
                        Segment::Enum { variant } => format!("::{}", variant),
                        Segment::Unknown => String::from("<?>"),
                    })
                    .collect::<String>();
                Err(Report::new(AppConfigError::InvalidField {
                    path: config_path.to_string(),
                    field: field.trim_start_matches('.').to_string(),
                })
                .attach_printable(e.to_string()))
            }
        }
    }

    pub fn network(&self, chain: &ChainRef) -> Option<&NetworkConfig> {
        self.main
            .networks
            .get(chain.chain_type.as_ref())?
            .get(&chain.id.to_string())
    }

    pub fn explorer_url(&self, chain: &ChainRef) -> Option<String> {
        self.network(chain)?.explorer.clone()
    }
}
