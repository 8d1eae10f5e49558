//! Application settings that persist across sessions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{DateStyle, Error, Result};

/// User preferences stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Format for dates older than a few days.
    pub date_style: DateStyle,
    /// Whether list rows show a marker for unread conversations.
    pub show_unread_marker: bool,
    /// Maximum characters of the last message shown in list rows.
    pub preview_length: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            date_style: DateStyle::default(),
            show_unread_marker: true,
            preview_length: 60,
        }
    }
}

impl AppSettings {
    /// Default settings location under the user's config directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the platform has no config directory.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("parley").join("settings.json"))
            .ok_or_else(|| Error::Config("no configuration directory available".to_string()))
    }

    /// Loads settings, falling back to defaults when the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)?;
        debug!("Settings loaded from {}", path.display());
        Ok(settings)
    }

    /// Writes settings as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parley").join("settings.json");
        let settings = AppSettings {
            date_style: DateStyle::Medium,
            show_unread_marker: false,
            preview_length: 20,
        };
        settings.save(&path).unwrap();
        assert_eq!(AppSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_default_date_style_matches_enum_default() {
        assert_eq!(AppSettings::default().date_style, DateStyle::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"date_style":"medium"}"#).unwrap();
        assert_eq!(settings.date_style, DateStyle::Medium);
        assert!(settings.show_unread_marker);
        assert_eq!(settings.preview_length, 60);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(AppSettings::load(&path), Err(Error::Serde(_))));
    }
}
