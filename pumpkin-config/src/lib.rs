use log::warn;
use pumpkin_util::GameMode;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub mod creative;
pub mod logging;

pub use creative::CreativeConfig;
pub use logging::LoggingConfig;

const CONFIG_ROOT_FOLDER: &str = "config/";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Couldn't access configuration at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "Couldn't parse config at {path:?}. Reason: {message}. This is probably caused by a config update; just delete the old config and start Pumpkin again"
    )]
    Parse { path: PathBuf, message: String },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Features that can be turned on or off depending on your needs.
/// Important: The configuration should match vanilla by default.
#[derive(Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AdvancedConfiguration {
    pub logging: LoggingConfig,
    pub creative: CreativeConfig,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BasicConfiguration {
    /// The default gamemode for players.
    pub default_gamemode: GameMode,
}

pub trait LoadConfiguration {
    /// Reads the configuration from `<exec_dir>/config/`, writing the defaults if the file does
    /// not exist yet.
    fn load(exec_dir: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config_dir = exec_dir.join(CONFIG_ROOT_FOLDER);
        if !config_dir.exists() {
            log::debug!("creating new config root folder");
            fs::create_dir(&config_dir).map_err(|source| ConfigError::Io {
                path: config_dir.clone(),
                source,
            })?;
        }
        let path = config_dir.join(Self::get_path());

        let config = if path.exists() {
            let file_content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|err| ConfigError::Parse {
                path: path.clone(),
                message: err.message().to_string(),
            })?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(&path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", &path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config: {err}"),
            }

            content
        };

        config.validate()?;
        Ok(config)
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), ConfigError>;
}

impl LoadConfiguration for AdvancedConfiguration {
    fn get_path() -> &'static Path {
        Path::new("features.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.creative.validate().map_err(ConfigError::Invalid)
    }
}

impl LoadConfiguration for BasicConfiguration {
    fn get_path() -> &'static Path {
        Path::new("configuration.toml")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}
