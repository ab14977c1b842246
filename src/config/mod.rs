use crate::errors::{AppError, AppResult};
use crate::import::Delimiter;
use crate::utils::time::is_valid_format;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// `auto`, `tab` or a single character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// chrono formats tried after the built-in `Von`/`Bis` formats.
    #[serde(default)]
    pub extra_timestamp_formats: Vec<String>,
    /// Format of `Von`/`Bis` in the printed data grid.
    #[serde(default = "default_display_datetime_format")]
    pub display_datetime_format: String,
    /// Width of the share bars in the report tables.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_delimiter() -> String {
    "auto".to_string()
}
fn default_display_datetime_format() -> String {
    "%d-%m-%y %H:%M".to_string()
}
fn default_bar_width() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            extra_timestamp_formats: Vec::new(),
            display_datetime_format: default_display_datetime_format(),
            bar_width: default_bar_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
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

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    pub fn delimiter(&self) -> AppResult<Delimiter> {
        Delimiter::parse(&self.delimiter)
    }

    /// Reject values that would only fail later, mid-report.
    pub fn validate(&self) -> AppResult<()> {
        self.delimiter()?;

        if !is_valid_format(&self.display_datetime_format) {
            return Err(AppError::Config(format!(
                "invalid display_datetime_format '{}'",
                self.display_datetime_format
            )));
        }

        if let Some(bad) = self
            .extra_timestamp_formats
            .iter()
            .find(|f| !is_valid_format(f))
        {
            return Err(AppError::Config(format!("invalid timestamp format '{bad}'")));
        }

        Ok(())
    }
}
