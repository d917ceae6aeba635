use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Default base URL for the GitHub API
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://api.github.com";

/// Directory name under the data and config roots
const APP_DIR: &str = "version-snippet";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub github: GitHubConfig,
    pub cache: CacheConfig,
    /// Drop a leading `v` from resolved tags
    pub strip_v: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github: GitHubConfig::default(),
            cache: CacheConfig::default(),
            strip_v: true,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// GitHub API configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GitHubConfig {
    pub base_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GITHUB_BASE_URL.to_string(),
        }
    }
}

/// Session cache configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Named session shared across invocations; in-memory when unset
    pub session: Option<String>,
}

/// Returns the path to the data directory for version-snippet.
/// Uses $XDG_DATA_HOME/version-snippet if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-snippet,
/// or ./version-snippet if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the session cache database.
pub fn db_path() -> PathBuf {
    data_dir().join("sessions.db")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-snippet.log")
}

/// Returns the default config file location.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.json")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_DIR)
}
