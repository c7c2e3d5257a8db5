//! Persistence Module
//!
//! Line-oriented text storage for a `StudentStore`.
//!
//! ## Responsibilities
//! - Write every occupied slot, in array order, behind a header line
//! - Load tolerantly: several line parsers are tried in order and lines
//!   that match none are logged, counted and skipped
//! - Export a CSV view with a computed grade column
//! - Probe fallback locations when the data file is missing
//!
//! ## Data File Format
//! ```text
//! Roll Number,Name,Marks,Status        <- optional on load
//! 101,Wisdom Chimezie,85.90,Pass
//! 102,Jane Smith,92.75,Pass
//! ```
//!
//! ## CSV Export Format
//! ```text
//! Roll Number,Student Name,Marks Obtained,Pass/Fail Status,Grade
//! 101,"Wisdom Chimezie",85.90,Pass,B
//! ```
//!
//! Marks are written with two decimals unless that would change the
//! value, in which case the shortest exact form is used (see
//! `format_marks`), so a save followed by a load reproduces every valid
//! record exactly.
//!
//! The writer exports inactive slots too (full audit trail); loading
//! re-adds every line through `StudentStore::add`, so invalid or
//! duplicate records in a file are dropped on the way back in.

mod export;
mod reader;
mod sample;
mod writer;

pub use export::export_csv;
pub use reader::{load, parse_line, LoadOutcome, LoadReport, ParseStrategy, ParsedRecord};
pub use sample::{initialize_sample_data, SAMPLE_STUDENTS};
pub use writer::{create_backup, save};

/// Header line of the data file
pub const HEADER: &str = "Roll Number,Name,Marks,Status";

/// Header line of the CSV export
pub const CSV_HEADER: &str = "Roll Number,Student Name,Marks Obtained,Pass/Fail Status,Grade";

/// Marks as written to disk
///
/// Two decimals when that reads back as the same value, otherwise the
/// shortest representation that does (course averages such as 70.333...).
pub fn format_marks(marks: f64) -> String {
    let fixed = format!("{:.2}", marks);
    if fixed.parse::<f64>().ok() == Some(marks) {
        fixed
    } else {
        marks.to_string()
    }
}
