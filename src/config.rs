/// Gallery configuration
///
/// Read once at startup from a JSON file in the user's config directory:
/// - Linux: ~/.config/photo-gallery/config.json
/// - macOS: ~/Library/Application Support/photo-gallery/config.json
/// - Windows: %APPDATA%\photo-gallery\config.json
///
/// Every field is optional. Gallery state itself is never written back.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ConfigError;
use crate::state::drag::DEFAULT_DRAG_THRESHOLD;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Folder to build the gallery from instead of the bundled photo list
    pub photos_dir: Option<PathBuf>,
    /// Pointer travel (logical pixels) before a press turns into a drag
    pub drag_threshold: f32,
    /// Render the first tile as a 2×2 hero tile
    pub hero_tile: bool,
    /// Longest edge of decoded tile thumbnails
    pub thumbnail_size: u32,
    pub window_width: f32,
    pub window_height: f32,
    pub dark_theme: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photos_dir: None,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            hero_tile: true,
            thumbnail_size: 320,
            window_width: 1100.0,
            window_height: 800.0,
            dark_theme: false,
        }
    }
}

impl GalleryConfig {
    /// Load the config from the user's config directory
    ///
    /// A missing file (or no config directory at all) yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("⚙️  Loaded config from {}", path.display());
        Ok(config)
    }

    /// Where the config file is expected to live
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("photo-gallery");
        path.push("config.json");
        Some(path)
    }
}
