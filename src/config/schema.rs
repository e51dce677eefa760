use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub download: DownloadConfig,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct DownloadConfig {
    #[serde(default = "default_target_dir")]
    pub target_dir: String,
}

// Default value functions
fn default_target_dir() -> String {
    "./.models".to_string()
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download: DownloadConfig::default(),
        }
    }
}
