//! Sample data for first runs

use std::path::Path;

use crate::error::Result;
use crate::store::StudentStore;

use super::save;

/// `(name, roll number, marks)` of the bundled sample students
pub const SAMPLE_STUDENTS: [(&str, i64, f64); 10] = [
    ("Wisdom Chimezie", 101, 85.90),
    ("Jane Smith", 102, 92.75),
    ("Bob Johnson", 103, 78.25),
    ("Alice Brown", 104, 67.50),
    ("Charlie Wilson", 105, 34.00),
    ("Diana Davis", 106, 88.75),
    ("Edward Miller", 107, 45.25),
    ("Fiona Garcia", 108, 91.00),
    ("George Martinez", 109, 29.75),
    ("Helen Rodriguez", 110, 73.50),
];

/// Add the sample students that are not already present and save to `path`
///
/// Returns how many were added.
pub fn initialize_sample_data(store: &mut StudentStore, path: &Path) -> Result<usize> {
    let mut added = 0;
    for (name, roll_number, marks) in SAMPLE_STUDENTS {
        match store.add(name, roll_number, marks) {
            Ok(_) => added += 1,
            Err(e) => tracing::debug!(roll_number, error = %e, "sample student skipped"),
        }
    }

    save(store, path)?;
    tracing::info!(added, "sample data initialized");
    Ok(added)
}
