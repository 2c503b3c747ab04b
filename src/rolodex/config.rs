use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILE: &str = "contacts.json";
pub const DATA_FILE_ENV: &str = "ROLODEX_FILE";
pub const DATA_FILE_KEY: &str = "data-file";

/// Keys understood by [`RolodexConfig::get`] and [`RolodexConfig::set`].
pub const KEYS: &[&str] = &[DATA_FILE_KEY];

/// User configuration, stored as `config.json` in the platform config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Backing directory file used when no `--file` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.try_exists().map_err(RolodexError::Io)? {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            RolodexError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.try_exists().map_err(RolodexError::Io)? {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Parse)?;
        fs::write(config_path, content).map_err(RolodexError::Io)?;
        Ok(())
    }

    /// Display value of a key, `None` if the key is unknown.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            DATA_FILE_KEY => Some(match &self.data_file {
                Some(path) => path.display().to_string(),
                None => format!("{} (default)", DEFAULT_DATA_FILE),
            }),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty value resets it to the default.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            DATA_FILE_KEY => {
                let value = value.trim();
                self.data_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// Picks the backing file: explicit flag, then environment, then config, then the default.
    pub fn resolve_data_file(&self, flag: Option<&Path>, env_value: Option<&str>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
            return PathBuf::from(value);
        }
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}
