//! Data file reader
//!
//! Each line is offered to the parse strategies in `ParseStrategy::ORDER`
//! until one accepts it. Accepted records go through `StudentStore::add`,
//! so validation and duplicate checks apply exactly as for interactive
//! input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::StudentStore;

/// Result of a load attempt
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum LoadOutcome {
    /// Neither the requested file nor any fallback exists; the store was
    /// not touched
    NoData,

    /// A file was read into the store
    Loaded(LoadReport),
}

impl LoadOutcome {
    /// Number of students added to the store
    pub fn loaded(&self) -> usize {
        match self {
            LoadOutcome::NoData => 0,
            LoadOutcome::Loaded(report) => report.loaded,
        }
    }
}

/// Per-file load counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// File actually read (may be a fallback)
    pub path: PathBuf,

    /// Lines added to the store
    pub loaded: usize,

    /// Lines parsed but refused by validation or the duplicate check
    pub rejected: usize,

    /// Lines no parse strategy accepted
    pub malformed: usize,
}

/// A line split into its four fields; status is informational only
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub roll_number: i64,
    pub name: String,
    pub marks: f64,
    pub status: String,
}

/// Line parsers, tried in `ORDER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// `roll,name,marks,status` with no padding
    Strict,

    /// Four fields with whitespace around the commas
    Spaced,

    /// Comma tokens (empty ones skipped), lenient numbers, optional
    /// double quotes around the name, extra trailing fields ignored
    Tokenized,
}

impl ParseStrategy {
    pub const ORDER: [ParseStrategy; 3] = [
        ParseStrategy::Strict,
        ParseStrategy::Spaced,
        ParseStrategy::Tokenized,
    ];

    pub fn parse(self, line: &str) -> Option<ParsedRecord> {
        match self {
            ParseStrategy::Strict => parse_strict(line),
            ParseStrategy::Spaced => parse_spaced(line),
            ParseStrategy::Tokenized => parse_tokenized(line),
        }
    }
}

/// Run the strategies in order; first match wins
pub fn parse_line(line: &str) -> Option<(ParseStrategy, ParsedRecord)> {
    ParseStrategy::ORDER
        .iter()
        .find_map(|&strategy| strategy.parse(line).map(|record| (strategy, record)))
}

/// Replace the store's contents with the records in `path`
///
/// When `path` does not exist the `fallbacks` are probed in order. If no
/// candidate exists the store is left untouched and `NoData` is
/// returned. Otherwise the store is cleared first, every line is
/// offered to the parsers, and the unsaved-changes flag is cleared at
/// the end.
pub fn load(store: &mut StudentStore, path: &Path, fallbacks: &[PathBuf]) -> Result<LoadOutcome> {
    let Some(source) = resolve_source(path, fallbacks) else {
        tracing::info!(path = %path.display(), "no data file found, starting empty");
        return Ok(LoadOutcome::NoData);
    };

    let mut reader = BufReader::new(File::open(&source)?);
    store.clear();

    let mut report = LoadReport {
        path: source,
        loaded: 0,
        rejected: 0,
        malformed: 0,
    };

    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim_end_matches(['\n', '\r']);

        if line_no == 1 && is_header(line) {
            tracing::trace!("skipping header line");
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let Some((strategy, record)) = parse_line(line) else {
            tracing::warn!(line_no, line, "skipping malformed line");
            report.malformed += 1;
            continue;
        };
        tracing::trace!(line_no, ?strategy, roll_number = record.roll_number, "line parsed");

        match store.add(&record.name, record.roll_number, record.marks) {
            Ok(_) => report.loaded += 1,
            Err(e) => {
                tracing::warn!(line_no, error = %e, "record rejected");
                report.rejected += 1;
            }
        }
    }

    store.mark_saved();
    tracing::info!(
        path = %report.path.display(),
        loaded = report.loaded,
        rejected = report.rejected,
        malformed = report.malformed,
        "store loaded"
    );

    Ok(LoadOutcome::Loaded(report))
}

// =============================================================================
// Private Helpers
// =============================================================================

fn resolve_source(path: &Path, fallbacks: &[PathBuf]) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    tracing::debug!(path = %path.display(), "data file missing, probing fallbacks");

    fallbacks.iter().find(|p| p.is_file()).cloned()
}

fn is_header(line: &str) -> bool {
    line.contains("Roll Number") || line.contains("Name") || line.contains("Marks")
}

fn parse_strict(line: &str) -> Option<ParsedRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    let [roll, name, marks, status] = fields.as_slice() else {
        return None;
    };

    if name.is_empty() || name.starts_with(char::is_whitespace) || name.starts_with('"') {
        return None;
    }
    if status.is_empty() || status.contains(char::is_whitespace) {
        return None;
    }

    Some(ParsedRecord {
        roll_number: roll.parse().ok()?,
        name: name.to_string(),
        marks: marks.parse().ok()?,
        status: status.to_string(),
    })
}

fn parse_spaced(line: &str) -> Option<ParsedRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [roll, name, marks, status] = fields.as_slice() else {
        return None;
    };

    if name.is_empty() || name.starts_with('"') {
        return None;
    }
    if status.is_empty() || status.contains(char::is_whitespace) {
        return None;
    }

    Some(ParsedRecord {
        roll_number: roll.parse().ok()?,
        name: name.to_string(),
        marks: marks.parse().ok()?,
        status: status.to_string(),
    })
}

fn parse_tokenized(line: &str) -> Option<ParsedRecord> {
    let mut tokens = line.split(',').filter(|t| !t.is_empty());

    let roll = tokens.next()?;
    let name = tokens.next()?;
    let marks = tokens.next()?;
    let status = tokens.next()?;

    Some(ParsedRecord {
        roll_number: leading_integer(roll),
        name: unquote(name).to_string(),
        marks: leading_float(marks),
        status: status.trim().to_string(),
    })
}

/// Strip one leading double quote and cut at the last remaining one
fn unquote(token: &str) -> &str {
    let token = token.trim_start();
    match token.strip_prefix('"') {
        Some(rest) => match rest.rfind('"') {
            Some(end) => &rest[..end],
            None => rest,
        },
        None => token,
    }
}

/// Integer prefix of `s` after leading whitespace; 0 when there is none
fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }
    s[..end].parse().unwrap_or(0)
}

/// Decimal prefix of `s` after leading whitespace, with an optional
/// exponent (`1e2`); 0.0 when there is none
fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_point = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}
