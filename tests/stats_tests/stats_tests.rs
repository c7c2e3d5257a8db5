//! Statistics Engine Tests
//!
//! Tests verify:
//! - Zero-valued results on empty stores
//! - Average / extremes / pass-fail counts
//! - Median for odd and even counts
//! - Sample standard deviation
//! - Grade distribution buckets
//! - GPA averaging over students with courses only
//! - Removed students never contribute

use rollbook::grading::Grade;
use rollbook::stats::{
    average_gpa, average_marks, calculate_statistics, count_failed, count_passed,
    grade_distribution, highest_scorer, lowest_scorer, median_marks, pass_percentage,
    standard_deviation, Statistics,
};
use rollbook::StudentStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn store_with_marks(marks: &[f64]) -> StudentStore {
    let mut store = StudentStore::new();
    for (i, m) in marks.iter().enumerate() {
        store.add("Student", i as i64 + 1, *m).unwrap();
    }
    store
}

// =============================================================================
// Empty Store Tests
// =============================================================================

#[test]
fn test_empty_store_is_all_zero() {
    let store = StudentStore::new();

    assert_eq!(calculate_statistics(&store), Statistics::default());
    assert_eq!(average_marks(&store), 0.0);
    assert_eq!(median_marks(&store), 0.0);
    assert_eq!(standard_deviation(&store), 0.0);
    assert_eq!(pass_percentage(&store), 0.0);
    assert_eq!(average_gpa(&store), 0.0);
    assert_eq!(grade_distribution(&store).total(), 0);
    assert!(highest_scorer(&store).is_none());
    assert!(lowest_scorer(&store).is_none());
}

#[test]
fn test_store_emptied_by_removal_is_all_zero() {
    let mut store = store_with_marks(&[50.0, 60.0]);
    store.remove(1).unwrap();
    store.remove(2).unwrap();

    assert_eq!(calculate_statistics(&store), Statistics::default());
}

// =============================================================================
// Summary Statistics Tests
// =============================================================================

#[test]
fn test_two_student_statistics() {
    let mut store = StudentStore::new();
    store.add("Alice Brown", 104, 67.50).unwrap();
    store.add("Bob", 103, 78.25).unwrap();

    let stats = calculate_statistics(&store);

    assert_close(stats.average, 72.875);
    assert_close(stats.highest, 78.25);
    assert_close(stats.lowest, 67.50);
    assert_eq!(stats.total_count, 2);
    assert_eq!(stats.passed_count, 2);
    assert_eq!(stats.failed_count, 0);
    assert_close(stats.pass_percentage, 100.0);
}

#[test]
fn test_pass_fail_split() {
    let store = store_with_marks(&[39.99, 40.0, 10.0, 95.0]);

    let stats = calculate_statistics(&store);

    assert_eq!(stats.passed_count, 2);
    assert_eq!(stats.failed_count, 2);
    assert_close(stats.pass_percentage, 50.0);
    assert_eq!(count_passed(&store), 2);
    assert_eq!(count_failed(&store), 2);
    assert_close(pass_percentage(&store), 50.0);
}

#[test]
fn test_scorers_first_seen_wins_ties() {
    let mut store = StudentStore::new();
    store.add("First High", 1, 90.0).unwrap();
    store.add("Low", 2, 20.0).unwrap();
    store.add("Second High", 3, 90.0).unwrap();
    store.add("Second Low", 4, 20.0).unwrap();

    assert_eq!(highest_scorer(&store).unwrap().roll_number(), 1);
    assert_eq!(lowest_scorer(&store).unwrap().roll_number(), 2);
}

#[test]
fn test_removed_students_are_excluded() {
    let mut store = store_with_marks(&[100.0, 10.0, 50.0]);
    store.remove(1).unwrap();

    let stats = calculate_statistics(&store);

    assert_eq!(stats.total_count, 2);
    assert_close(stats.highest, 50.0);
    assert_close(stats.average, 30.0);
}

// =============================================================================
// Median / Deviation Tests
// =============================================================================

#[test]
fn test_median_odd_count() {
    let store = store_with_marks(&[85.9, 34.0, 67.5]);
    assert_close(median_marks(&store), 67.5);
}

#[test]
fn test_median_even_count() {
    let store = store_with_marks(&[67.5, 34.0]);
    assert_close(median_marks(&store), 50.75);
}

#[test]
fn test_median_does_not_reorder_store() {
    let store = store_with_marks(&[90.0, 10.0, 50.0]);
    let _ = median_marks(&store);

    let marks: Vec<f64> = store.iter_active().map(|s| s.marks()).collect();
    assert_eq!(marks, vec![90.0, 10.0, 50.0]);
}

#[test]
fn test_standard_deviation_uses_sample_formula() {
    // Mean 5, squared deviations sum to 32, n - 1 = 7
    let store = store_with_marks(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    assert_close(standard_deviation(&store), (32.0f64 / 7.0).sqrt());
}

#[test]
fn test_standard_deviation_single_student() {
    let store = store_with_marks(&[75.0]);
    assert_eq!(standard_deviation(&store), 0.0);
}

// =============================================================================
// Distribution / GPA Tests
// =============================================================================

#[test]
fn test_grade_distribution_buckets() {
    let store = store_with_marks(&[95.0, 90.0, 85.0, 72.0, 61.0, 45.0, 40.0, 39.0, 0.0]);

    let dist = grade_distribution(&store);

    assert_eq!(dist.count(Grade::A), 2);
    assert_eq!(dist.count(Grade::B), 1);
    assert_eq!(dist.count(Grade::C), 1);
    assert_eq!(dist.count(Grade::D), 1);
    assert_eq!(dist.count(Grade::E), 2);
    assert_eq!(dist.count(Grade::F), 2);
    assert_eq!(dist.total(), 9);

    let order: Vec<Grade> = dist.iter().map(|(g, _)| g).collect();
    assert_eq!(order, Grade::ALL.to_vec());
}

#[test]
fn test_average_gpa_ignores_students_without_courses() {
    let mut store = store_with_marks(&[50.0, 60.0, 70.0]);
    store.add_course(1, "Maths", 100.0).unwrap();
    store.add_course(2, "Maths", 50.0).unwrap();

    // (4.0 + 2.0) / 2; student 3 has no courses
    assert_close(average_gpa(&store), 3.0);
}
