//! The main config loading module for the globber.
//!
//! Handles loading and deserializing settings from `globber.toml` into the
//! [Config] struct, and writing the default file for `--init`.

use crate::config::{Display, General, Keys};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

pub const CONFIG_ENV: &str = "GLOBBER_CONFIG";

/// Raw configuration as read from the toml file.
/// Every table is optional and falls back to its defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    keys: Keys,
}

/// Main configuration struct for the globber
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    general: General,
    display: Display,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display,
            keys: raw.keys,
        }
    }
}

const DEFAULT_TOML: &str = r##"# globber.toml - default configuration for the globber

# Note:
# Commented values are the internal defaults.

[general]
# Show dotfiles and dot-directories
# show_hidden = false
# Ask "Yes/No" before quitting
# confirm_quit = true

[display]
# Folder/file glyphs in front of each entry
# emojis = true
# Show the ".." entry to go up one directory
# parent_entry = true

[keys]
# Key that asks to quit. Every other printable key types into the path.
# quit = "$"
"##;

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    tracing::warn!(path = %path.display(), error = %e, "invalid config");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the GLOBBER_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/globber/globber.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("globber/globber.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/globber/globber.toml");
        }
        PathBuf::from("globber.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}
