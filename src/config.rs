use chrono::Weekday;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};
use crate::ui::Theme;

const CONFIG_PATH_ENV_VAR: &str = "ALMANAC_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("almanac").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".almanac.toml"));
    }

    locations
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// First column of the month grid.
    pub week_start: Weekday,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            week_start: Weekday::Sun,
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Config::from_toml_str(&content).map_err(|e| {
            Error::new(
                ErrorKind::ConfigParse,
                &format!("{}: {}", path.display(), e.user_message()),
            )
        })
    }
}

/// Load the config at `path`, or the first existing default location.
///
/// An explicitly given path must exist; without one the built-in defaults
/// are used if no config file is found.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Loading config from '{}'", path.display());
        return Config::load(path);
    }

    match find_configfile_locations()
        .into_iter()
        .find(|location| location.is_file())
    {
        Some(location) => {
            log::info!("Loading config from '{}'", location.display());
            Config::load(&location)
        }
        None => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
