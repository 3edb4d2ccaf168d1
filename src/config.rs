use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::render::BrowserKind;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) browser: Option<BrowserKind>,
    #[serde(default)]
    pub(crate) headless: bool,
    #[serde(default)]
    pub(crate) browser_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) driver_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
    #[serde(default)]
    pub(crate) referer: Option<String>,
    #[serde(default)]
    pub(crate) scroll_passes: Option<u32>,
    #[serde(default)]
    pub(crate) request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) body_timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) page_timeout_secs: Option<u64>,
}

impl Config {
    /// First config file that exists and parses; defaults otherwise
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        debug!(path = %path.display(), "loaded config");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to parse config, ignoring it");
                    }
                }
            }
        }

        Self::default()
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/sessiongrab/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("sessiongrab").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("sessiongrab").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.sessiongrab.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".sessiongrab.toml"));
        }

        paths
    }
}
