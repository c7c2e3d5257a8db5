//! Configuration for Rollbook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{RecordError, Result};

/// Main configuration for a Rollbook database
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Primary data file (read on open, written on save)
    pub data_file: PathBuf,

    /// Files probed in order when `data_file` does not exist
    pub fallback_files: Vec<PathBuf>,

    /// Directory that receives backups
    pub backup_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Number of slots allocated up front (doubles when full)
    pub initial_capacity: usize,

    // -------------------------------------------------------------------------
    // Auto-save Configuration
    // -------------------------------------------------------------------------
    /// Background save strategy
    pub auto_save: AutoSaveStrategy,
}

/// Auto-save strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoSaveStrategy {
    /// Only save when asked to
    Disabled,

    /// Save every `interval_ms` milliseconds if there are unsaved changes
    Every { interval_ms: u64 },
}

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/students.txt";

/// Default slot count for a new store
pub const INITIAL_CAPACITY: usize = 10;

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            fallback_files: vec![
                PathBuf::from("students.txt"),
                PathBuf::from(DEFAULT_DATA_FILE),
            ],
            backup_dir: PathBuf::from("data"),
            initial_capacity: INITIAL_CAPACITY,
            auto_save: AutoSaveStrategy::Disabled,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the primary data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Replace the fallback files probed when the data file is missing
    pub fn fallback_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.fallback_files = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Set the backup directory
    pub fn backup_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.backup_dir = path.into();
        self
    }

    /// Set the initial slot capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the auto-save strategy
    pub fn auto_save(mut self, strategy: AutoSaveStrategy) -> Self {
        self.config.auto_save = strategy;
        self
    }

    pub fn build(self) -> Result<Config> {
        if self.config.initial_capacity == 0 {
            return Err(RecordError::Config(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        if let AutoSaveStrategy::Every { interval_ms: 0 } = self.config.auto_save {
            return Err(RecordError::Config(
                "auto-save interval must be non-zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
