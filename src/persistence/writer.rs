//! Data file writer

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::StudentStore;

use super::{format_marks, HEADER};

/// Write the store to `path` and clear its unsaved-changes flag
///
/// Missing parent directories are created. Returns the number of
/// records written. On error the flag is left untouched.
pub fn save(store: &mut StudentStore, path: &Path) -> Result<usize> {
    let written = write_records(store, path)?;
    store.mark_saved();

    tracing::info!(records = written, path = %path.display(), "store saved");
    Ok(written)
}

/// Write a copy of the store to `dir/file_name`
///
/// The unsaved-changes flag is not cleared: the primary data file is
/// still behind the in-memory state.
pub fn create_backup(store: &StudentStore, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let written = write_records(store, &path)?;

    tracing::info!(records = written, path = %path.display(), "backup written");
    Ok(path)
}

/// Header plus one line per occupied slot, synced to disk
fn write_records(store: &StudentStore, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", HEADER)?;

    let slots = store.slots();
    for student in slots {
        writeln!(
            writer,
            "{},{},{},{}",
            student.roll_number(),
            student.name(),
            format_marks(student.marks()),
            student.status()
        )?;
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    Ok(slots.len())
}
