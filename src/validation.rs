//! Field validation
//!
//! Pure predicates over the primitive fields of a record, plus `check_*`
//! wrappers that turn a failed predicate into the matching `RecordError`.

use crate::error::{RecordError, Result};

/// Longest accepted student name, in characters
pub const MAX_NAME_LENGTH: usize = 99;

/// Longest accepted course name, in characters
pub const MAX_COURSE_NAME_LENGTH: usize = 49;

/// Smallest valid roll number
pub const MIN_ROLL_NUMBER: i64 = 1;

/// Largest valid roll number
pub const MAX_ROLL_NUMBER: i64 = 999_999;

pub const MIN_MARKS: f64 = 0.0;
pub const MAX_MARKS: f64 = 100.0;

// =============================================================================
// Predicates
// =============================================================================

/// Letters, spaces, hyphens and apostrophes; at least one non-space; at
/// most `MAX_NAME_LENGTH` characters.
pub fn is_valid_name(name: &str) -> bool {
    if name.trim().is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '-' || c == '\'')
}

pub fn is_valid_roll_number(roll_number: i64) -> bool {
    (MIN_ROLL_NUMBER..=MAX_ROLL_NUMBER).contains(&roll_number)
}

/// NaN and infinities are rejected along with out-of-range values
pub fn is_valid_marks(marks: f64) -> bool {
    marks.is_finite() && (MIN_MARKS..=MAX_MARKS).contains(&marks)
}

/// Non-blank, at most `MAX_COURSE_NAME_LENGTH` characters, no control
/// characters and no field delimiter.
pub fn is_valid_course_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name.chars().count() <= MAX_COURSE_NAME_LENGTH
        && !name.chars().any(|c| c.is_control() || c == ',')
}

// =============================================================================
// Checks
// =============================================================================

pub fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RecordError::NullInput);
    }
    if !is_valid_name(name) {
        return Err(RecordError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validates and narrows a roll number to its stored width
pub fn check_roll_number(roll_number: i64) -> Result<u32> {
    if !is_valid_roll_number(roll_number) {
        return Err(RecordError::InvalidRollNumber(roll_number));
    }
    u32::try_from(roll_number).map_err(|_| RecordError::InvalidRollNumber(roll_number))
}

pub fn check_marks(marks: f64) -> Result<()> {
    if !is_valid_marks(marks) {
        return Err(RecordError::InvalidMarks(marks));
    }
    Ok(())
}

pub fn check_course_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RecordError::NullInput);
    }
    if !is_valid_course_name(name) {
        return Err(RecordError::InvalidCourseName(name.to_string()));
    }
    Ok(())
}

/// Course scores share the marks range but report their own error
pub fn check_score(score: f64) -> Result<()> {
    if !is_valid_marks(score) {
        return Err(RecordError::InvalidScore(score));
    }
    Ok(())
}
