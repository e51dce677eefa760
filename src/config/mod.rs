//! Configuration module for llama-fetch
//!
//! Loads config from `$XDG_CONFIG_HOME/llama-fetch/config.toml` or
//! `~/.config/llama-fetch/config.toml`. Falls back to embedded defaults if
//! the file doesn't exist. Partial configs are merged with defaults using
//! serde's default attributes.
//!
//! # Example
//!
//! ```no_run
//! use llama_fetch::config::Config;
//!
//! let config = Config::load().expect("Failed to load config");
//! println!("Target dir: {}", config.download.target_dir);
//! ```

pub mod schema;

pub use schema::Config;

use crate::error::{FetchError, Result};
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        toml::from_str(&content)
            .map_err(|e| FetchError::Config(format!("Failed to parse {}: {e}", path.display())))
    }
}

/// Config file path, honoring `XDG_CONFIG_HOME`
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    let base = if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config)
    } else {
        dirs::config_dir()?
    };

    Some(base.join("llama-fetch/config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.download.target_dir, "./.models");
    }

    #[test]
    fn test_load_from_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[download]\ntarget_dir = \"/srv/models\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.download.target_dir, "/srv/models");
    }

    #[test]
    fn test_load_from_empty_file_merges_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.download.target_dir, "./.models");
    }

    #[test]
    fn test_load_from_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[download\ntarget_dir = 3").unwrap();

        let result = Config::load_from(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Config error"));
    }

    #[test]
    #[serial]
    fn test_config_path_honors_xdg() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", "/tmp/xdg-test");

        let path = config_path().unwrap();
        assert_eq!(path, PathBuf::from("/tmp/xdg-test/llama-fetch/config.toml"));

        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    #[serial]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let config = Config::load().unwrap();
        assert_eq!(config.download.target_dir, "./.models");

        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
}
