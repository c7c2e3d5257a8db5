//! CSV export

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::store::StudentStore;

use super::{format_marks, CSV_HEADER};

/// Export every occupied slot as CSV with a quoted name and a grade column
///
/// Exporting does not count as saving; the unsaved-changes flag is kept.
pub fn export_csv(store: &StudentStore, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", CSV_HEADER)?;

    let slots = store.slots();
    for student in slots {
        writeln!(
            writer,
            "{},\"{}\",{},{},{}",
            student.roll_number(),
            student.name(),
            format_marks(student.marks()),
            student.status(),
            student.grade()
        )?;
    }
    writer.flush()?;

    tracing::info!(records = slots.len(), path = %path.display(), "csv exported");
    Ok(slots.len())
}
