use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};

use super::model::{CONFIG_FILE_NAME, Config};
use super::validation::validate_config_version;

/// A configuration plus the file it came from (`None` for defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<LoadedConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadedConfig>;
}

const USER_CONFIG_NAME: &str = "config.toml";

/// Parse and version-check config text without touching its paths.
///
/// # Errors
/// Returns an error for invalid TOML or an unsupported version.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_config_version(&config)?;
    Ok(config)
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform configuration directory for drawing-audit:
    /// - Windows: `%APPDATA%\drawing-audit`
    /// - macOS: `~/Library/Application Support/drawing-audit`
    /// - Linux: `~/.config/drawing-audit` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "drawing-audit")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.drawing-audit.toml` in the current directory
/// 2. `config.toml` in the platform config directory
/// 3. `Config::default()` if neither exists
///
/// Relative paths inside a loaded file are resolved against that file's directory.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    /// Directory that relative config paths hang off.
    fn base_dir(&self, path: &Path) -> PathBuf {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if parent.is_absolute() {
            return parent.to_path_buf();
        }
        self.fs
            .current_dir()
            .map_or_else(|_| parent.to_path_buf(), |cwd| cwd.join(parent))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadedConfig> {
        if let Some(local_path) = self.local_config_path()
            && self.fs.exists(&local_path)
        {
            return self.load_from_path(&local_path);
        }

        if let Some(user_path) = self.user_config_path()
            && self.fs.exists(&user_path)
        {
            return self.load_from_path(&user_path);
        }

        Ok(LoadedConfig {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadedConfig> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| AuditError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = parse_config(&content)?;
        config.resolve_paths(&self.base_dir(path));

        Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
