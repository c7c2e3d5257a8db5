//! Validation Tests
//!
//! Tests verify:
//! - Name charset and length limits
//! - Roll number range
//! - Marks range, including non-finite values
//! - Course name rules
//! - Error variants produced by the check wrappers

use rollbook::validation::{
    check_course_name, check_marks, check_name, check_roll_number, check_score,
    is_valid_course_name, is_valid_marks, is_valid_name, is_valid_roll_number,
};
use rollbook::RecordError;

// =============================================================================
// Name Tests
// =============================================================================

#[test]
fn test_valid_names() {
    assert!(is_valid_name("Wisdom Chimezie"));
    assert!(is_valid_name("Mary-Jane O'Neil"));
    assert!(is_valid_name("A"));
}

#[test]
fn test_invalid_names() {
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("   "));
    assert!(!is_valid_name("R2D2"));
    assert!(!is_valid_name("Smith, John"));
    assert!(!is_valid_name("Zoë"));
}

#[test]
fn test_name_length_limit() {
    assert!(is_valid_name(&"a".repeat(99)));
    assert!(!is_valid_name(&"a".repeat(100)));
}

#[test]
fn test_check_name_errors() {
    assert!(matches!(check_name(""), Err(RecordError::NullInput)));
    assert!(matches!(check_name("  "), Err(RecordError::NullInput)));
    assert!(matches!(check_name("B0b"), Err(RecordError::InvalidName(_))));
    assert!(check_name("Bob").is_ok());
}

// =============================================================================
// Roll Number Tests
// =============================================================================

#[test]
fn test_roll_number_range() {
    assert!(!is_valid_roll_number(0));
    assert!(!is_valid_roll_number(-5));
    assert!(is_valid_roll_number(1));
    assert!(is_valid_roll_number(999_999));
    assert!(!is_valid_roll_number(1_000_000));
}

#[test]
fn test_check_roll_number_narrows() {
    assert_eq!(check_roll_number(101).unwrap(), 101u32);
    assert!(matches!(
        check_roll_number(0),
        Err(RecordError::InvalidRollNumber(0))
    ));
}

// =============================================================================
// Marks Tests
// =============================================================================

#[test]
fn test_marks_range() {
    assert!(is_valid_marks(0.0));
    assert!(is_valid_marks(100.0));
    assert!(!is_valid_marks(-0.01));
    assert!(!is_valid_marks(100.01));
    assert!(!is_valid_marks(f64::NAN));
    assert!(!is_valid_marks(f64::INFINITY));
}

#[test]
fn test_check_marks_and_score_errors() {
    assert!(matches!(check_marks(101.0), Err(RecordError::InvalidMarks(_))));
    assert!(matches!(check_score(-1.0), Err(RecordError::InvalidScore(_))));
    assert!(check_marks(40.0).is_ok());
    assert!(check_score(40.0).is_ok());
}

// =============================================================================
// Course Name Tests
// =============================================================================

#[test]
fn test_course_names() {
    assert!(is_valid_course_name("Mathematics 101"));
    assert!(is_valid_course_name(&"x".repeat(49)));
    assert!(!is_valid_course_name(&"x".repeat(50)));
    assert!(!is_valid_course_name("Art,History"));
    assert!(!is_valid_course_name("Line\nBreak"));
}

#[test]
fn test_check_course_name_errors() {
    assert!(matches!(check_course_name(""), Err(RecordError::NullInput)));
    assert!(matches!(
        check_course_name("a,b"),
        Err(RecordError::InvalidCourseName(_))
    ));
}
