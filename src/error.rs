//! Error types for Rollbook
//!
//! Every expected failure is reported through `RecordError`; nothing in
//! the library panics on bad input.

use thiserror::Error;

/// Result type alias using RecordError
pub type Result<T> = std::result::Result<T, RecordError>;

/// Unified error type for record store operations
#[derive(Debug, Error)]
pub enum RecordError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Required input is empty")]
    NullInput,

    #[error("Invalid roll number: {0} (expected 1..=999999)")]
    InvalidRollNumber(i64),

    #[error("Invalid marks: {0} (expected 0..=100)")]
    InvalidMarks(f64),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Invalid course name: {0:?}")]
    InvalidCourseName(String),

    #[error("Invalid course score: {0} (expected 0..=100)")]
    InvalidScore(f64),

    // -------------------------------------------------------------------------
    // Key Errors
    // -------------------------------------------------------------------------
    #[error("Roll number {0} already exists")]
    DuplicateRollNumber(u32),

    #[error("Student with roll number {0} not found")]
    StudentNotFound(u32),

    #[error("Course {course:?} already exists for roll number {roll_number}")]
    DuplicateCourseName { roll_number: u32, course: String },

    #[error("Course {course:?} not found for roll number {roll_number}")]
    CourseNotFound { roll_number: u32, course: String },

    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    #[error("Student {0} already has the maximum number of courses")]
    MaxCoursesReached(u32),

    #[error("Allocation failed while growing to {0} slots")]
    AllocationFailure(usize),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
