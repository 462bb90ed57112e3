use crate::core::normalizer::{DEFAULT_DATE_FORMAT, DEFAULT_PROJECT, DEFAULT_TIME_FORMAT};
use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Projekt value for sheets without a project column
    #[serde(default = "default_project")]
    pub default_project: String,
    /// Number of converted entries echoed after a run
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_project() -> String {
    DEFAULT_PROJECT.to_string()
}
fn default_preview_rows() -> usize {
    5
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_project: default_project(),
            preview_rows: default_preview_rows(),
            date_format: default_date_format(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wh2csv")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".wh2csv")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wh2csv.conf")
    }

    /// Load the configuration from `path`, or return defaults if the file
    /// does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject strftime patterns chrono cannot render.
    pub fn validate(&self) -> AppResult<()> {
        for pattern in [&self.date_format, &self.time_format] {
            if pattern.trim().is_empty()
                || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
            {
                return Err(AppError::InvalidFormat(pattern.clone()));
            }
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .map_err(|e| AppError::ConfigSave(format!("{}: {e}", dir.display())))?;
        }

        let yaml = self.to_yaml()?;
        fs::write(path, yaml)
            .map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))?;
        Ok(())
    }
}
