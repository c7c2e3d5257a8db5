//! Course Tests
//!
//! Tests verify:
//! - Adding courses derives grade, status, GPA and overall marks
//! - Duplicate and capacity limits per student
//! - Removing and rescoring courses
//! - Marks recomputation rules on modify

use rollbook::grading::{Grade, Status};
use rollbook::store::MAX_COURSES;
use rollbook::{RecordError, StudentStore};

// =============================================================================
// Helper Functions
// =============================================================================

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn store_with_student() -> StudentStore {
    let mut store = StudentStore::new();
    store.add("Jane Smith", 102, 25.0).unwrap();
    store
}

// =============================================================================
// Add Course Tests
// =============================================================================

#[test]
fn test_add_course_derives_fields() {
    let mut store = store_with_student();

    let student = store.add_course(102, "Physics", 85.0).unwrap();

    assert_eq!(student.course_count(), 1);
    assert_close(student.marks(), 85.0);
    assert_eq!(student.status(), Status::Pass);
    assert_close(student.gpa(), 3.4);

    let course = student.course("Physics").unwrap();
    assert_eq!(course.grade(), Grade::B);
    assert_eq!(course.status(), Status::Pass);
    assert!(course.is_active());
}

#[test]
fn test_marks_become_course_average() {
    let mut store = store_with_student();
    store.add_course(102, "Physics", 80.0).unwrap();
    let student = store.add_course(102, "Chemistry", 100.0).unwrap();

    assert_close(student.marks(), 90.0);
    assert_close(student.gpa(), 3.6);
    assert_eq!(student.grade(), Grade::A);
}

#[test]
fn test_failing_course_status() {
    let mut store = store_with_student();
    let student = store.add_course(102, "History", 39.5).unwrap();

    let course = student.course("History").unwrap();
    assert_eq!(course.status(), Status::Fail);
    assert_eq!(course.grade(), Grade::F);
    assert_eq!(student.status(), Status::Fail);
}

#[test]
fn test_duplicate_course_name_rejected() {
    let mut store = store_with_student();
    store.add_course(102, "Physics", 80.0).unwrap();

    let result = store.add_course(102, "Physics", 60.0);

    assert!(matches!(result, Err(RecordError::DuplicateCourseName { roll_number: 102, .. })));
    assert_eq!(store.find(102).unwrap().course_count(), 1);
    assert_close(store.find(102).unwrap().course("Physics").unwrap().score(), 80.0);
}

#[test]
fn test_same_course_name_on_different_students() {
    let mut store = store_with_student();
    store.add("Bob Johnson", 103, 50.0).unwrap();

    store.add_course(102, "Physics", 80.0).unwrap();
    store.add_course(103, "Physics", 60.0).unwrap();

    assert_eq!(store.find(103).unwrap().course_count(), 1);
}

#[test]
fn test_max_courses_reached() {
    let mut store = store_with_student();
    for i in 0..MAX_COURSES {
        store.add_course(102, &format!("Course {i}"), 70.0).unwrap();
    }

    let result = store.add_course(102, "One Too Many", 70.0);

    assert!(matches!(result, Err(RecordError::MaxCoursesReached(102))));
    assert_eq!(store.find(102).unwrap().course_count(), MAX_COURSES);
}

#[test]
fn test_add_course_errors() {
    let mut store = store_with_student();

    assert!(matches!(store.add_course(999, "Physics", 50.0), Err(RecordError::StudentNotFound(999))));
    assert!(matches!(store.add_course(102, "", 50.0), Err(RecordError::NullInput)));
    assert!(matches!(store.add_course(102, "Art,Design", 50.0), Err(RecordError::InvalidCourseName(_))));
    assert!(matches!(store.add_course(102, "Physics", 100.01), Err(RecordError::InvalidScore(_))));
}

// =============================================================================
// Remove / Update Course Tests
// =============================================================================

#[test]
fn test_remove_course_frees_slot() {
    let mut store = store_with_student();
    for i in 0..MAX_COURSES {
        store.add_course(102, &format!("Course {i}"), 70.0).unwrap();
    }

    let removed = store.remove_course(102, "Course 3").unwrap();
    assert_eq!(removed.name(), "Course 3");
    assert!(!removed.is_active());

    store.add_course(102, "Replacement", 90.0).unwrap();
    let student = store.find(102).unwrap();
    assert_eq!(student.course_count(), MAX_COURSES);
    assert!(student.course("Course 3").is_none());
    assert!(student.course("Replacement").is_some());
}

#[test]
fn test_remove_course_recomputes_average() {
    let mut store = store_with_student();
    store.add_course(102, "Physics", 80.0).unwrap();
    store.add_course(102, "Chemistry", 40.0).unwrap();

    store.remove_course(102, "Chemistry").unwrap();

    let student = store.find(102).unwrap();
    assert_close(student.marks(), 80.0);
    assert_close(student.gpa(), 3.2);
}

#[test]
fn test_removing_last_course_keeps_marks() {
    let mut store = store_with_student();
    store.add_course(102, "Physics", 80.0).unwrap();

    store.remove_course(102, "Physics").unwrap();

    let student = store.find(102).unwrap();
    assert!(!student.has_courses());
    assert_close(student.marks(), 80.0);
    assert_eq!(student.gpa(), 0.0);
}

#[test]
fn test_remove_missing_course() {
    let mut store = store_with_student();
    assert!(matches!(
        store.remove_course(102, "Physics"),
        Err(RecordError::CourseNotFound { roll_number: 102, .. })
    ));
}

#[test]
fn test_update_course_score() {
    let mut store = store_with_student();
    store.add_course(102, "Physics", 30.0).unwrap();

    let student = store.update_course_score(102, "Physics", 95.0).unwrap();

    let course = student.course("Physics").unwrap();
    assert_eq!(course.grade(), Grade::A);
    assert_eq!(course.status(), Status::Pass);
    assert_close(student.marks(), 95.0);
    assert_close(student.gpa(), 3.8);

    assert!(matches!(
        store.update_course_score(102, "Biology", 50.0),
        Err(RecordError::CourseNotFound { .. })
    ));
}

// =============================================================================
// Modify Interaction Tests
// =============================================================================

#[test]
fn test_modify_with_courses_uses_course_average() {
    let mut store = store_with_student();
    store.add_course(102, "Physics", 60.0).unwrap();
    store.add_course(102, "Chemistry", 70.0).unwrap();

    let student = store.modify(102, "Jane Doe", 10.0).unwrap();

    assert_eq!(student.name(), "Jane Doe");
    assert_close(student.marks(), 65.0);
    assert_eq!(student.status(), Status::Pass);
}

#[test]
fn test_courses_listed_in_slot_order() {
    let mut store = store_with_student();
    store.add_course(102, "A", 50.0).unwrap();
    store.add_course(102, "B", 50.0).unwrap();
    store.add_course(102, "C", 50.0).unwrap();
    store.remove_course(102, "A").unwrap();
    store.add_course(102, "D", 50.0).unwrap();

    let names: Vec<&str> = store.find(102).unwrap().courses().map(|c| c.name()).collect();
    assert_eq!(names, vec!["D", "B", "C"]);
}
