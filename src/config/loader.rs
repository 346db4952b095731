use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{BarDataError, Result};

use super::ViewConfig;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<ViewConfig>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<ViewConfig>;
}

/// Name of the config file looked up in the working directory.
pub const LOCAL_CONFIG_NAME: &str = ".bar-data.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
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
}

/// Loads configuration from the filesystem.
///
/// `load` reads `.bar-data.toml` from the current directory and falls back to
/// `ViewConfig::default()` when there is none.
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
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<ViewConfig> {
        match self.local_config_path() {
            Some(path) if self.fs.exists(&path) => self.load_from_path(&path),
            _ => {
                debug!("No {LOCAL_CONFIG_NAME} found, using default view config");
                Ok(ViewConfig::default())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<ViewConfig> {
        debug!("Loading view config from {}", path.display());
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| BarDataError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        ViewConfig::from_toml_str(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
