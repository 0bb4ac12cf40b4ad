//! # Settings Handlers
//!
//! Loading and saving the theme configuration file.

use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::ui::theme::ThemeConfig;

/// Get default config file path
pub fn get_config_path() -> PathBuf {
    PathBuf::from("./superapp-config.json")
}

/// Load settings from the default path, falling back to defaults
pub fn load_settings() -> ThemeConfig {
    load_settings_from(&get_config_path())
}

/// Load settings from `path`; a missing or unreadable file yields defaults
pub fn load_settings_from(path: &Path) -> ThemeConfig {
    match ThemeConfig::load_from_file(path) {
        Ok(config) => {
            tracing::info!("Loaded theme configuration from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load theme config from {:?}: {}. Using defaults.", path, e);
            ThemeConfig::default()
        }
    }
}

/// Save settings to the default path
pub fn save_settings(config: &ThemeConfig) -> Result<()> {
    let path = get_config_path();
    config.save_to_file(&path)?;
    tracing::info!("Saved theme configuration to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_local_json() {
        assert_eq!(get_config_path(), PathBuf::from("./superapp-config.json"));
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ accent: ").unwrap();

        assert_eq!(load_settings_from(&path), ThemeConfig::default());
    }

    #[test]
    fn test_saved_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        let config = ThemeConfig {
            red: [200, 10, 10],
            ..ThemeConfig::default()
        };
        config.save_to_file(&path).unwrap();

        assert_eq!(load_settings_from(&path), config);
    }
}
