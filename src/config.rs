//! Configuration management for genre-reel
//!
//! Handles config file loading and addon path resolution.
//! Config is stored at ~/.config/genre-reel/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::router::DEFAULT_CATEGORY;

/// Environment variable overriding the addon installation directory
pub const ADDON_PATH_ENV: &str = "GENRE_REEL_ADDON_PATH";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Addon installation directory (holds resources/images)
    pub addon_path: Option<PathBuf>,
    /// Category label of the root listing
    pub category_label: Option<String>,
    /// Catalog TOML to use instead of the built-in one
    pub catalog_file: Option<PathBuf>,
}

impl Config {
    /// Get config file path (~/.config/genre-reel/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("genre-reel").join("config.toml"))
    }

    /// Load config from the default location, or defaults if there is none
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from an explicit file. The file must exist and parse.
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = toml::from_str(&s)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Addon directory with fallback chain:
    /// 1. Environment variable GENRE_REEL_ADDON_PATH
    /// 2. `addon_path` from the config file
    /// 3. Directory containing the executable
    pub fn addon_path(&self) -> PathBuf {
        self.resolve_addon_path(std::env::var(ADDON_PATH_ENV).ok())
    }

    fn resolve_addon_path(&self, env: Option<String>) -> PathBuf {
        if let Some(path) = env.filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }

        if let Some(ref path) = self.addon_path {
            return path.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Category label, falling back to the default
    pub fn category_label(&self) -> &str {
        self.category_label.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.addon_path.is_none());
        assert!(config.catalog_file.is_none());
        assert_eq!(config.category_label(), "Public Domain Movies");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "addon_path = \"/opt/addon\"\ncategory_label = \"Filmes\"\ncatalog_file = \"/opt/catalog.toml\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.addon_path, Some(PathBuf::from("/opt/addon")));
        assert_eq!(config.category_label(), "Filmes");
        assert_eq!(config.catalog_file, Some(PathBuf::from("/opt/catalog.toml")));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "addon_path = [").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(Config::load_from(Path::new("/nonexistent/config.toml")).is_err());
    }

    #[test]
    fn test_addon_path_precedence() {
        let config = Config {
            addon_path: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_addon_path(Some("/from/env".to_string())),
            PathBuf::from("/from/env")
        );
        assert_eq!(config.resolve_addon_path(None), PathBuf::from("/from/config"));
        // Empty env var does not count
        assert_eq!(
            config.resolve_addon_path(Some(String::new())),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn test_addon_path_falls_back_to_exe_dir() {
        let path = Config::default().resolve_addon_path(None);
        assert!(!path.as_os_str().is_empty());
    }
}
