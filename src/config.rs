//! Configuration management for the application.
//!
//! This module handles loading and saving the user's preferences in TOML
//! format with platform-specific directory resolution, and defines the
//! durable preference store abstraction the theme component writes through.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable overriding the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// Persisted theme preference.
///
/// Absence of a stored preference means "follow the OS appearance"; only an
/// explicit toggle writes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark presentation (the implicit default)
    Dark,
    /// Light presentation
    Light,
}

impl ThemePreference {
    /// The opposite preference, used by the toggle control.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stable string form ("dark" / "light").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Unknown theme '{other}' (expected 'dark' or 'light')"),
        }
    }
}

/// Durable storage for the theme preference.
///
/// The theme component is written against this trait so it can be unit
/// tested with [`MemoryStore`] instead of touching the real config file.
pub trait PreferenceStore {
    /// Returns the stored preference, if any.
    fn theme(&self) -> Option<ThemePreference>;

    /// Persists a new preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be written to the backing
    /// storage. Callers that cannot surface errors may log and continue;
    /// the in-document theme state is already applied at that point.
    fn set_theme(&mut self, theme: ThemePreference) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    theme: Option<ThemePreference>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a preference.
    #[must_use]
    pub fn with_theme(theme: ThemePreference) -> Self {
        Self { theme: Some(theme) }
    }
}

impl PreferenceStore for MemoryStore {
    fn theme(&self) -> Option<ThemePreference> {
        self.theme
    }

    fn set_theme(&mut self, theme: ThemePreference) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme preference; `None` follows the OS appearance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreference>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Folio/config.toml`
/// - macOS: `~/Library/Application Support/Folio/config.toml`
/// - Windows: `%APPDATA%\Folio\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// Honors the `FOLIO_CONFIG_DIR` environment variable when set.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Folio");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }
}

/// File-backed preference store persisting through [`Config`].
#[derive(Debug, Default)]
pub struct ConfigStore {
    config: Config,
}

impl ConfigStore {
    /// Wraps an already-loaded configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the configuration from disk (defaults when absent).
    pub fn load() -> Result<Self> {
        Ok(Self::new(Config::load()?))
    }
}

impl PreferenceStore for ConfigStore {
    fn theme(&self) -> Option<ThemePreference> {
        self.config.ui.theme
    }

    fn set_theme(&mut self, theme: ThemePreference) -> Result<()> {
        self.config.ui.theme = Some(theme);
        self.config.save()
    }
}
