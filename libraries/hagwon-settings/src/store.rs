//! Settings persistence
//!
//! One JSON file at a caller-chosen path. A missing file means defaults; a
//! present but unreadable or malformed file is an error, surfaced to the
//! caller rather than silently resetting preferences.

use std::path::{Path, PathBuf};

use hagwon_core::Result;
use tokio::fs;
use tracing::{debug, info};

use crate::types::DisplaySettings;

/// JSON-file store for display settings
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store over a settings file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub async fn load(&self) -> Result<DisplaySettings> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}; using defaults", self.path.display());
                return Ok(DisplaySettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&raw)?)
    }

    /// Write settings as pretty JSON, creating parent directories
    pub async fn save(&self, settings: &DisplaySettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw).await?;

        info!("Saved display settings to {}", self.path.display());
        Ok(())
    }
}
