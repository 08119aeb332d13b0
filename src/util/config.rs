use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub activity: ActivityConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_per_page")]
    pub per_page: u8,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityConfig {
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_username() -> String {
    "iamnotsomting".to_string()
}
fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_per_page() -> u8 {
    10
}
fn default_timeout() -> u64 {
    10
}
fn default_refresh_interval() -> u64 {
    300
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            api_url: default_api_url(),
            per_page: default_per_page(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let mut candidates = Vec::new();

        // 1. ~/.config/termfolio/config.toml
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/termfolio/config.toml"));
        }

        // 2. Platform-specific path (macOS: ~/Library/Application Support/termfolio/)
        if let Some(proj_dirs) = ProjectDirs::from("", "", "termfolio") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn store_path(&self) -> PathBuf {
        if let Some(ref path) = self.store.path {
            return path.clone();
        }
        if let Some(proj_dirs) = ProjectDirs::from("", "", "termfolio") {
            return proj_dirs.data_dir().join("store.json");
        }
        PathBuf::from(".local/share/termfolio/store.json")
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "termfolio") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/termfolio/logs")
    }
}
