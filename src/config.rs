//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.
//! All settings are optional: a missing or default config yields a fully
//! working panel on the traditional felt colors.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::felt::FeltPalette;
use crate::models::RgbColor;

/// Theme display mode preference for the UI chrome around the felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Chrome theme mode
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Felt color overrides, all optional hex strings ("#RRGGBB").
///
/// Anything left unset falls back to the traditional felt color. Overrides
/// are applied before the panel is constructed, so the panel's default color
/// table captures exactly what will be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FeltConfig {
    /// Zero pocket background
    #[serde(default)]
    pub green: Option<String>,
    /// Red pocket background
    #[serde(default)]
    pub red: Option<String>,
    /// Black pocket background
    #[serde(default)]
    pub black: Option<String>,
    /// Undo control background
    #[serde(default)]
    pub undo: Option<String>,
    /// Hover highlight background
    #[serde(default)]
    pub highlight: Option<String>,
    /// Hover highlight foreground
    #[serde(default)]
    pub highlight_foreground: Option<String>,
    /// Foreground of controls not hovered
    #[serde(default)]
    pub neutral_foreground: Option<String>,
}

impl FeltConfig {
    /// Resolves the configured overrides onto the traditional palette.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending setting when an override is not
    /// a valid hex color.
    pub fn resolve_palette(&self) -> Result<FeltPalette> {
        let mut palette = FeltPalette::default();
        Self::apply(&mut palette.green, self.green.as_deref(), "felt.green")?;
        Self::apply(&mut palette.red, self.red.as_deref(), "felt.red")?;
        Self::apply(&mut palette.black, self.black.as_deref(), "felt.black")?;
        Self::apply(&mut palette.undo, self.undo.as_deref(), "felt.undo")?;
        Self::apply(
            &mut palette.highlight,
            self.highlight.as_deref(),
            "felt.highlight",
        )?;
        Self::apply(
            &mut palette.highlight_foreground,
            self.highlight_foreground.as_deref(),
            "felt.highlight_foreground",
        )?;
        Self::apply(
            &mut palette.neutral_foreground,
            self.neutral_foreground.as_deref(),
            "felt.neutral_foreground",
        )?;
        Ok(palette)
    }

    fn apply(slot: &mut RgbColor, hex: Option<&str>, setting: &str) -> Result<()> {
        if let Some(hex) = hex {
            *slot = RgbColor::from_hex(hex).context(format!("Invalid color for '{setting}'"))?;
        }
        Ok(())
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Feltboard/config.toml`
/// - macOS: `~/Library/Application Support/Feltboard/config.toml`
/// - Windows: `%APPDATA%\Feltboard\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Felt color overrides
    #[serde(default)]
    pub felt: FeltConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Feltboard");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or not valid TOML. Callers
    /// that want first-run behavior fall back to `Config::default()`.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Saves the configuration to the default location, creating the config
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .context(format!("Failed to create config directory {}", dir.display()))?;
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves the configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .context(format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.felt, FeltConfig::default());
        // Default config resolves to the traditional felt
        assert_eq!(
            config.felt.resolve_palette().unwrap(),
            FeltPalette::default()
        );
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        config.felt.highlight = Some("#FFD700".to_string());

        config.save_to(&config_file).unwrap();
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(Config::load_from(&missing).is_err());
    }

    #[test]
    fn test_partial_config_parses() {
        // Only one table present; everything else defaults
        let config: Config = toml::from_str("[ui]\ntheme_mode = \"Light\"\n").unwrap();
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
        assert_eq!(config.felt, FeltConfig::default());

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_felt_overrides_resolve() {
        let mut felt = FeltConfig::default();
        felt.undo = Some("#112233".to_string());
        felt.highlight = Some("FFD700".to_string());
        let palette = felt.resolve_palette().unwrap();
        assert_eq!(palette.undo, RgbColor::new(0x11, 0x22, 0x33));
        assert_eq!(palette.highlight, RgbColor::new(0xFF, 0xD7, 0x00));
        // Untouched slots keep the traditional colors
        assert_eq!(palette.green, FeltPalette::default().green);
    }

    #[test]
    fn test_invalid_override_names_the_setting() {
        let mut felt = FeltConfig::default();
        felt.red = Some("not-a-color".to_string());
        let err = felt.resolve_palette().unwrap_err();
        assert!(format!("{err:#}").contains("felt.red"));
    }
}
