use crate::entry::{EntryTag, IconRef, Label, MenuEntry};
use crate::geometry::Gravity;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EntryConfig {
    pub icon: IconRef,
    pub label: Label,
    /// Defaults to the label text.
    #[serde(default)]
    pub tag: Option<EntryTag>,
}

impl EntryConfig {
    pub fn to_entry(&self) -> MenuEntry {
        match &self.tag {
            Some(tag) => MenuEntry::new(self.icon.clone(), self.label.clone(), tag.clone()),
            None => MenuEntry::labelled(self.icon.clone(), self.label.clone()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    pub gravity: Gravity,
    pub action_bar_size: f32,
    pub text_translation: f32,
    pub animation_duration_ms: u64,
    /// Layout direction reported by hosts that have no environment of their own.
    pub rtl: bool,
    pub items: Vec<EntryConfig>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            gravity: Gravity::default(),
            action_bar_size: 56.0,
            text_translation: 32.0,
            animation_duration_ms: 100,
            rtl: false,
            items: Vec::new(),
        }
    }
}

impl MenuConfig {
    /// The configuration shipped with the crate.
    pub fn bundled() -> Result<Self, ConfigError> {
        let bundled = config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml);
        let s = config::Config::builder().add_source(bundled).build()?;
        Ok(s.try_deserialize()?)
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    pub fn entries(&self) -> Result<Vec<MenuEntry>, ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        Ok(self.items.iter().map(EntryConfig::to_entry).collect())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Menu has no items")]
    NoItems,
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "foldout", "foldout").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Loads `path`, or the user config file when `path` is `None`, layered with
/// `FOLDOUT_*` environment variables. A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> Result<MenuConfig, ConfigError> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("FOLDOUT"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Like [`load_config`], falling back to the bundled configuration when
/// loading fails or the result has no items.
pub fn load_or_bundled(path: Option<&Path>) -> Result<MenuConfig, ConfigError> {
    match load_config(path) {
        Ok(c) if !c.items.is_empty() => Ok(c),
        Ok(_) => {
            log::info!("No menu items configured, using bundled menu");
            MenuConfig::bundled()
        }
        Err(e) => {
            log::warn!("Failed to load config, using bundled menu: {}", e);
            MenuConfig::bundled()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
