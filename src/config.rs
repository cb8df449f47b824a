/// Application configuration
///
/// Read once at startup from `config.json` in the user's config directory:
/// - Linux: ~/.config/bite/config.json
/// - macOS: ~/Library/Application Support/bite/config.json
/// - Windows: %APPDATA%\bite\config.json
///
/// `BITE_CONFIG` overrides the location. The file is optional and never
/// written back.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{BiteError, Result};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "BITE_CONFIG";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window size in logical pixels
    pub window_width: f32,
    pub window_height: f32,
    /// How long the splash stays up before onboarding
    pub splash_delay_ms: u64,
    /// Simulated ingredient analysis time after a capture
    pub capture_delay_ms: u64,
    pub dark_theme: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 430.0,
            window_height: 900.0,
            // 600ms intro animation followed by a 1.5s hold
            splash_delay_ms: 2100,
            capture_delay_ms: 1500,
            dark_theme: false,
        }
    }
}

impl Config {
    /// Load the config, falling back to defaults on any problem
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    /// Where the config file is expected
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir()?;
        path.push("bite");
        path.push("config.json");
        Some(path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| BiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json).map_err(|source| BiteError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn capture_delay(&self) -> Duration {
        Duration::from_millis(self.capture_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "splash_delay_ms": 10, "dark_theme": true }"#).unwrap();
        assert_eq!(config.splash_delay(), Duration::from_millis(10));
        assert!(config.dark_theme);
        assert_eq!(config.capture_delay_ms, 1500);
        assert_eq!(config.window_width, 430.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Config::from_json("{ splash_delay_ms: }").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::from_file(Path::new("/nonexistent/bite/config.json")).unwrap_err();
        assert!(matches!(err, BiteError::Io { .. }));
    }

    #[test]
    fn test_bad_file_is_json_error() {
        let path = std::env::temp_dir().join(format!("bite-config-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let err = Config::from_file(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, BiteError::Json { .. }));
    }
}
