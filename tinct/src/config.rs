use async_std::path::Path;
use serde::Deserialize;
use thiserror::Error;

use tinct_color::{picker::default_color, HexColor, Hsl, PickerState, Swatches};

pub const DEFAULT_CONFIG_PATH: &str = "tinct.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("couldn't read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("history_capacity must be at least 1")]
    ZeroHistoryCapacity,
    #[error("swatches must list at least one color")]
    NoSwatches,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_color")]
    pub initial_color: Hsl,
    #[serde(default = "Config::default_history_capacity")]
    pub history_capacity: usize,
    /// Replaces the built-in quick colors when set
    pub swatches: Option<Vec<HexColor>>,
}
impl Config {
    const fn default_history_capacity() -> usize {
        tinct_color::DEFAULT_HISTORY_CAPACITY
    }
    pub fn parse(contents: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(contents)?;

        if config.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        if matches!(&config.swatches, Some(swatches) if swatches.is_empty()) {
            return Err(ConfigError::NoSwatches);
        }

        Ok(config)
    }
    pub async fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let contents = async_std::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let config = Config::parse(&contents)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
    /// Like `load`, but a missing file means defaults
    pub async fn load_if_exists(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        if path.exists().await {
            Config::load(path).await
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
    pub fn swatches(&self) -> Swatches {
        match &self.swatches {
            Some(colors) => Swatches::new(colors.clone()),
            None => Swatches::default(),
        }
    }
    pub fn picker_state(&self) -> PickerState {
        PickerState::new(self.initial_color, self.history_capacity)
    }
}
impl Default for Config {
    fn default() -> Config {
        Config {
            initial_color: default_color(),
            history_capacity: Config::default_history_capacity(),
            swatches: None,
        }
    }
}
