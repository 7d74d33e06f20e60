use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

const APP_DIR: &str = "share-selection";
const MAX_TICK_RATE_MS: u64 = 10_000;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selection: SelectionConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Follow symbolic links when summing directory sizes
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Ask before removing entries from the list
    pub confirm_delete: bool,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
            tick_rate_ms: 250,
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/share-selection/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");

        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.tui.tick_rate_ms == 0 || self.tui.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(ConfigError::Invalid(format!(
                "tui.tick_rate_ms must be 1-{}, got {}",
                MAX_TICK_RATE_MS, self.tui.tick_rate_ms
            )));
        }
        Ok(())
    }
}
