//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. KIOSK_CONFIG environment variable
//! 3. Default: config/kiosk.toml

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/kiosk.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DataConfig {
    /// Directory holding dinosaurs.json, rooms.json and tickets.json.
    /// Bundled example data is used when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
struct TomlConfig {
    #[serde(default)]
    data: DataConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

/// Kiosk configuration.
#[derive(Debug, Clone)]
pub struct KioskConfig {
    data_dir: Option<PathBuf>,
    log_level: String,
    config_file: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: default_log_level(),
            config_file: "(defaults)".to_string(),
        }
    }
}

impl KioskConfig {
    /// Determine config file path from args or environment
    pub fn resolve_config_path(args: &[String]) -> String {
        for (i, arg) in args.iter().enumerate() {
            if arg == "--config" {
                if let Some(path) = args.get(i + 1) {
                    return path.clone();
                }
            }
            if let Some(path) = arg.strip_prefix("--config=") {
                return path.to_string();
            }
        }

        if let Ok(path) = env::var("KIOSK_CONFIG") {
            return path;
        }

        DEFAULT_CONFIG_PATH.to_string()
    }

    /// Load configuration from a TOML file
    ///
    /// A relative `[data].dir` is resolved against the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let data_dir = toml_config.data.dir.map(|dir| {
            if dir.is_relative() {
                path.parent().map(|parent| parent.join(&dir)).unwrap_or(dir)
            } else {
                dir
            }
        });

        Ok(Self {
            data_dir,
            log_level: toml_config.logging.level,
            config_file: path.display().to_string(),
        })
    }

    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_config_flag_with_space() {
        let path = KioskConfig::resolve_config_path(&args(&["kiosk", "--config", "a.toml"]));
        assert_eq!(path, "a.toml");
    }

    #[test]
    fn test_resolve_config_flag_with_equals() {
        let path = KioskConfig::resolve_config_path(&args(&["kiosk", "--config=b.toml"]));
        assert_eq!(path, "b.toml");
    }

    #[test]
    fn test_defaults() {
        let config = KioskConfig::default();
        assert!(config.data_dir().is_none());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = KioskConfig::from_file("/nonexistent/kiosk.toml").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to read config file /nonexistent/kiosk.toml"
        );
    }
}
