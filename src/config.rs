//! Application configuration.

use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the benefits API. `None` means the local backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Create Config pointing at the given API URL.
    pub fn new(api_url: Option<String>) -> Self {
        Config { api_url }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if !path.ends_with("config.json") {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path must end with config.json",
            ));
        }
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(path)
    }
}

/// Location of the configuration file: `~/.benefitx/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(".benefitx").join("config.json"))
}

/// Picks the environment to talk to.
///
/// Precedence: explicit flag, then the `BENEFITX_API_URL` variable, then the
/// config file, then the local backend.
pub fn resolve_environment(
    cli_url: Option<&str>,
    env_url: Option<&str>,
    config: Option<&Config>,
) -> Result<Environment, crate::environment::InvalidEnvironment> {
    let configured = config.and_then(|c| c.api_url.as_deref());
    match cli_url.or(env_url).or(configured) {
        Some(url) if !url.trim().is_empty() => url.parse(),
        _ => Ok(Environment::Local),
    }
}
