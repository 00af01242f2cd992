use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default = "default_hours_precision")]
    pub hours_precision: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_hours_precision() -> usize {
    2
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            hours_precision: default_hours_precision(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftclock.conf")
    }

    /// Return the full path of the JSON record store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("shifts.json")
    }

    /// Load configuration from file, or return defaults if missing/unreadable
    pub fn load() -> Self {
        let path = Self::config_file();
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Initialize configuration and store files.
    /// In test mode the config file on disk is left untouched.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Report config-file fields that are missing on disk (they would be
    /// silently filled with defaults at load time).
    pub fn missing_fields() -> AppResult<Vec<String>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

        let mapping = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("config file is not a YAML mapping".to_string()))?;

        let mut missing = Vec::new();
        for field in ["store", "hours_precision", "separator_char"] {
            if !mapping.contains_key(&serde_yaml::Value::from(field)) {
                missing.push(field.to_string());
            }
        }
        Ok(missing)
    }
}
