//! Database Module
//!
//! Facade that ties a store to its data file.
//!
//! ## Responsibilities
//! - Create the store and load the data file (with fallbacks) on open
//! - Share the store with the auto-saver under a single mutex
//! - Save, export, back up and close on request

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};

use crate::autosave::{AutoSaver, SharedStore};
use crate::config::{AutoSaveStrategy, Config};
use crate::error::Result;
use crate::persistence::{self, LoadOutcome};
use crate::store::StudentStore;

/// A student store bound to a data file
///
/// All access goes through `store()`, which locks the store for the
/// lifetime of the guard. Keep guards short when auto-save is enabled.
pub struct Database {
    /// Database configuration
    config: Config,

    /// The records, shared with the auto-saver
    store: SharedStore,

    /// Background saver, if configured
    auto_saver: Option<AutoSaver>,

    /// What happened when the data file was read on open
    load_outcome: LoadOutcome,
}

impl Database {
    /// Open a database with the given config
    ///
    /// On startup:
    /// 1. Allocate the store with the configured capacity
    /// 2. Load the data file, probing fallbacks if it is missing
    /// 3. Start the auto-saver if enabled
    pub fn open(config: Config) -> Result<Self> {
        let mut store = StudentStore::with_capacity(config.initial_capacity)?;

        let load_outcome =
            persistence::load(&mut store, &config.data_file, &config.fallback_files)?;

        let store = Arc::new(Mutex::new(store));

        let auto_saver = match config.auto_save {
            AutoSaveStrategy::Disabled => None,
            AutoSaveStrategy::Every { interval_ms } => Some(AutoSaver::spawn(
                Arc::clone(&store),
                config.data_file.clone(),
                Duration::from_millis(interval_ms),
            )?),
        };

        Ok(Self {
            config,
            store,
            auto_saver,
            load_outcome,
        })
    }

    /// Open with a data file (convenience method)
    ///
    /// Uses the default config with the given file and no fallbacks.
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .data_file(path)
            .fallback_files(Vec::<PathBuf>::new())
            .build()?;
        Self::open(config)
    }

    /// Lock the store
    pub fn store(&self) -> MutexGuard<'_, StudentStore> {
        self.store.lock()
    }

    /// Another handle to the shared store
    pub fn shared_store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// Save to the configured data file
    pub fn save(&self) -> Result<usize> {
        let mut store = self.store.lock();
        persistence::save(&mut store, &self.config.data_file)
    }

    /// Discard in-memory state and re-read the data file
    pub fn reload(&self) -> Result<LoadOutcome> {
        let mut store = self.store.lock();
        persistence::load(&mut store, &self.config.data_file, &self.config.fallback_files)
    }

    /// Write the CSV export to `path`
    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        let store = self.store.lock();
        persistence::export_csv(&store, path)
    }

    /// Write a backup named `file_name` into the backup directory
    pub fn backup(&self, file_name: &str) -> Result<PathBuf> {
        let store = self.store.lock();
        persistence::create_backup(&store, &self.config.backup_dir, file_name)
    }

    /// Stop auto-saving and save any unsaved changes
    pub fn close(mut self) -> Result<()> {
        if let Some(saver) = self.auto_saver.take() {
            saver.stop();
        }

        let mut store = self.store.lock();
        if store.has_unsaved_changes() {
            persistence::save(&mut store, &self.config.data_file)?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Saves performed by the auto-saver, if one is running
    pub fn auto_save_count(&self) -> Option<usize> {
        self.auto_saver.as_ref().map(AutoSaver::save_count)
    }
}
