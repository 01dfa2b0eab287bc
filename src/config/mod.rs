use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration, stored as YAML in the platform config dir.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Root directory of the JSON document store.
    pub data_dir: String,
    /// The organization's fixed UTC offset in minutes. "Today" is always
    /// computed in this offset, never in the machine's local zone.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,
    /// Dashboard refresh interval for `watch`.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_utc_offset() -> i32 {
    120
}

fn default_poll_interval() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            utc_offset_minutes: default_utc_offset(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rollcall")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    /// Default root of the document store.
    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Create the config file and the data directory. `is_test` skips the
    /// config write so test runs never touch the real home dir.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let data_dir = match custom_data_dir {
            Some(d) => PathBuf::from(d),
            None => Self::data_dir_default(),
        };
        fs::create_dir_all(&data_dir)?;

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }
}
