//! Background auto-save
//!
//! A worker thread wakes on a fixed interval and saves the shared store
//! when it has unsaved changes. The store mutex is held for the whole
//! write, so a save never observes a half-applied mutation and no
//! mutation lands between the write and the flag reset.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{bounded, select, tick, Receiver, Sender};
use parking_lot::Mutex;

use crate::error::Result;
use crate::persistence;
use crate::store::StudentStore;

/// Store handle shared between callers and the auto-saver
pub type SharedStore = Arc<Mutex<StudentStore>>;

/// Save `store` to `path` if it has unsaved changes
///
/// Returns whether a save happened.
pub fn save_if_dirty(store: &Mutex<StudentStore>, path: &Path) -> Result<bool> {
    let mut guard = store.lock();
    if !guard.has_unsaved_changes() {
        return Ok(false);
    }
    persistence::save(&mut guard, path)?;
    Ok(true)
}

/// Handle to the auto-save thread; stops the thread when dropped
pub struct AutoSaver {
    /// Dropping the sender wakes the worker and ends its loop
    shutdown: Option<Sender<()>>,

    handle: Option<JoinHandle<()>>,

    /// Completed saves (for callers that want to observe progress)
    saves: Arc<AtomicUsize>,
}

impl AutoSaver {
    /// Start saving `store` to `path` every `interval`
    pub fn spawn(store: SharedStore, path: PathBuf, interval: Duration) -> Result<Self> {
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
        let saves = Arc::new(AtomicUsize::new(0));
        let worker_saves = Arc::clone(&saves);

        let handle = thread::Builder::new()
            .name("rollbook-autosave".to_string())
            .spawn(move || run(store, path, interval, shutdown_rx, worker_saves))?;

        tracing::debug!(?interval, "auto-save started");

        Ok(Self {
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
            saves,
        })
    }

    /// Number of saves performed so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Stop the worker and wait for it to finish
    pub fn stop(mut self) {
        self.shutdown_worker();
    }

    fn shutdown_worker(&mut self) {
        // Disconnecting the channel is the stop signal
        self.shutdown.take();

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("auto-save thread panicked");
            }
            tracing::debug!("auto-save stopped");
        }
    }
}

impl Drop for AutoSaver {
    fn drop(&mut self) {
        self.shutdown_worker();
    }
}

fn run(
    store: SharedStore,
    path: PathBuf,
    interval: Duration,
    shutdown: Receiver<()>,
    saves: Arc<AtomicUsize>,
) {
    let ticker = tick(interval);

    loop {
        select! {
            recv(ticker) -> _ => match save_if_dirty(&store, &path) {
                Ok(true) => {
                    saves.fetch_add(1, Ordering::SeqCst);
                }
                Ok(false) => {}
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "auto-save failed"),
            },
            recv(shutdown) -> _ => break,
        }
    }
}
