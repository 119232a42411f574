// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[overlays]` - Overlay images loaded at startup
//! - `[export]` - Export file name and last used directory
//!
//! # Examples
//!
//! ```no_run
//! use face_replacer::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("zh-CN".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::element::ElementKind;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Overlay images assigned automatically at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OverlaysConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_left: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_right: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouth: Option<PathBuf>,
}

impl OverlaysConfig {
    /// Preset path for `kind`, if any.
    #[must_use]
    pub fn preset(&self, kind: ElementKind) -> Option<&Path> {
        match kind {
            ElementKind::EyeLeft => self.eye_left.as_deref(),
            ElementKind::EyeRight => self.eye_right.as_deref(),
            ElementKind::Mouth => self.mouth.as_deref(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// File name proposed by the save dialog.
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Directory of the last successful export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            last_directory: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub overlays: OverlaysConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    eprintln!("[config] Failed to load {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("zh-CN".to_string()),
                theme_mode: ThemeMode::Light,
            },
            overlays: OverlaysConfig {
                eye_left: Some(PathBuf::from("/presets/eye.png")),
                eye_right: None,
                mouth: Some(PathBuf::from("/presets/mouth.svg")),
            },
            export: ExportConfig {
                file_name: "face.png".to_string(),
                last_directory: Some(PathBuf::from("/exports")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"en-US\"\n").expect("parse");
        assert_eq!(config.export.file_name, DEFAULT_EXPORT_FILE_NAME);
        assert_eq!(config.overlays, OverlaysConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn overlay_presets_are_keyed_by_element() {
        let overlays = OverlaysConfig {
            eye_left: None,
            eye_right: Some(PathBuf::from("right.png")),
            mouth: None,
        };
        assert_eq!(overlays.preset(ElementKind::EyeRight), Some(Path::new("right.png")));
        assert_eq!(overlays.preset(ElementKind::Mouth), None);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        config.export.last_directory = Some(PathBuf::from("/tmp/out"));

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_returns_warning_for_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert!(warning.is_none());
    }
}
