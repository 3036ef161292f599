//! The [`ConfigStore`]: named configurations loaded from a data directory.
//!
//! Each configuration is one `<name>.yml` file. The store caches parsed
//! records in memory; reads during steady-state operation hit the cache,
//! and explicit `reload` calls pick up files edited on disk. A write
//! failure leaves the in-memory record intact so the caller can retry at
//! its next natural save point.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::schema::BorderConfig;
use crate::ConfigError;

/// File extension used for configuration documents.
const CONFIG_EXTENSION: &str = "yml";

/// A directory of named [`BorderConfig`] documents.
#[derive(Debug)]
pub struct ConfigStore {
    /// The data directory holding the `.yml` files.
    dir: PathBuf,
    /// Parsed configurations, keyed by file stem.
    configs: BTreeMap<String, BorderConfig>,
}

impl ConfigStore {
    /// Open a store over the given data directory, creating the directory
    /// if needed, and load every `.yml` file found in it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the directory cannot be created or
    /// read, or [`ConfigError::Yaml`] if a file fails to parse.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let dir = dir.into();
        if !dir.exists() {
            info!(dir = %dir.display(), "creating config data directory");
            std::fs::create_dir_all(&dir)?;
        }

        let mut store = Self {
            dir,
            configs: BTreeMap::new(),
        };
        store.reload_all()?;
        Ok(store)
    }

    /// The path of the file backing a named configuration.
    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{CONFIG_EXTENSION}"))
    }

    /// Return whether a configuration with the given name is loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// Return the names of all loaded configurations, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.configs.keys().map(String::as_str).collect()
    }

    /// Create a configuration with default contents if none exists yet.
    ///
    /// Returns whether a new configuration was created.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Yaml`] if writing the
    /// fresh file fails.
    pub fn create_if_absent(&mut self, name: &str) -> Result<bool, ConfigError> {
        if self.contains(name) {
            return Ok(false);
        }

        let _ = self.configs.insert(name.to_owned(), BorderConfig::default());
        self.save(name)?;
        info!(config = name, "created default configuration");
        Ok(true)
    }

    /// Borrow a configuration by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no configuration with the name
    /// is loaded. Never fatal to the engine; callers degrade.
    pub fn get(&self, name: &str) -> Result<&BorderConfig, ConfigError> {
        self.configs.get(name).ok_or_else(|| ConfigError::NotFound {
            name: name.to_owned(),
        })
    }

    /// Mutably borrow a configuration by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no configuration with the name
    /// is loaded.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut BorderConfig, ConfigError> {
        self.configs
            .get_mut(name)
            .ok_or_else(|| ConfigError::NotFound {
                name: name.to_owned(),
            })
    }

    /// Write a named configuration back to its file.
    ///
    /// On failure the in-memory record is untouched; the caller logs and
    /// retries at its next natural save point.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] for an unknown name, or
    /// [`ConfigError::Io`]/[`ConfigError::Yaml`] if serialization or the
    /// write fails.
    pub fn save(&self, name: &str) -> Result<(), ConfigError> {
        let config = self.get(name)?;
        let yaml = config.to_yaml()?;
        std::fs::write(self.path_for(name), yaml)?;
        Ok(())
    }

    /// Re-read a named configuration from disk, replacing the cached copy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the name is not loaded, or an
    /// I/O / YAML error if the file cannot be re-read.
    pub fn reload(&mut self, name: &str) -> Result<(), ConfigError> {
        if !self.contains(name) {
            return Err(ConfigError::NotFound {
                name: name.to_owned(),
            });
        }

        let config = Self::read_file(&self.path_for(name))?;
        let _ = self.configs.insert(name.to_owned(), config);
        Ok(())
    }

    /// Drop the cache and re-read every `.yml` file in the data directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the directory cannot be listed, or a
    /// parse error for an unreadable file.
    pub fn reload_all(&mut self) -> Result<(), ConfigError> {
        self.configs.clear();

        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let is_config = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(CONFIG_EXTENSION));
            if !is_config {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %path.display(), "skipping config file with unreadable name");
                continue;
            };

            let config = Self::read_file(&path)?;
            let _ = self.configs.insert(stem.to_owned(), config);
        }

        Ok(())
    }

    /// Read and parse one configuration file.
    fn read_file(path: &Path) -> Result<BorderConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        BorderConfig::parse(&contents)
    }
}
