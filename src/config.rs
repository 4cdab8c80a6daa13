//! Dashboard configuration persistence
//!
//! Stores user preferences in `~/.config/gridboard/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::enrich::FULL_WIDTH_MAX_COLS;
use crate::store::{LAYOUT_STORAGE_KEY, SAVE_DEBOUNCE_MS};

/// Dashboard configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Storage key the layout is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Quiet period before a dragged/resized layout is written (ms)
    #[serde(default = "default_save_debounce_ms")]
    pub save_debounce_ms: u64,

    /// Viewport width assumed at startup (pixels)
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    /// Height of the grid container (pixels), used for row height
    #[serde(default = "default_container_height")]
    pub container_height: u32,

    /// At or below this column count widgets go full width
    #[serde(default = "default_full_width_max_cols")]
    pub full_width_max_cols: u32,
}

fn default_storage_key() -> String {
    LAYOUT_STORAGE_KEY.to_string()
}

fn default_save_debounce_ms() -> u64 {
    SAVE_DEBOUNCE_MS
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_container_height() -> u32 {
    900
}

fn default_full_width_max_cols() -> u32 {
    FULL_WIDTH_MAX_COLS
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            save_debounce_ms: default_save_debounce_ms(),
            viewport_width: default_viewport_width(),
            container_height: default_container_height(),
            full_width_max_cols: default_full_width_max_cols(),
        }
    }
}

impl DashboardConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
