//! External configuration
//!
//! Located at ~/.config/gallery-studio/config.json. Every field is optional;
//! a missing or unparsable file falls back to defaults.

use std::path::{Path, PathBuf};

/// External config from Home Manager or other sources
#[derive(Debug, Default, serde::Deserialize)]
pub struct StudioConfig {
    /// Full URL of the gallery index
    #[serde(default)]
    pub index_url: Option<String>,
    /// GUI scale factor (0.8 - 1.5)
    #[serde(default)]
    pub font_scale: Option<f32>,
}

impl StudioConfig {
    /// Path of the external config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gallery-studio").join("config.json"))
    }

    /// Load config from ~/.config/gallery-studio/config.json if it exists
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path
    pub fn load_from(config_path: &Path) -> Option<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path).ok()?;
            match serde_json::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded config from {:?}", config_path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config.json: {}", e);
                    None
                }
            }
        } else {
            log::debug!("No external config at {:?}", config_path);
            None
        }
    }
}
