//! Statistics Engine
//!
//! Aggregate scans over the active students of a store. An empty or
//! all-inactive store yields zero-valued results, never an error.

use crate::grading::{Grade, PASSING_MARKS};
use crate::sort::exchange_sort;
use crate::store::{Student, StudentStore};

/// Summary statistics over active students
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    pub average: f64,
    pub highest: f64,
    pub lowest: f64,
    pub total_count: usize,
    pub passed_count: usize,
    pub failed_count: usize,
    pub pass_percentage: f64,
}

/// Student counts per letter grade, in `Grade::ALL` order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GradeDistribution {
    counts: [usize; 6],
}

impl GradeDistribution {
    pub fn count(&self, grade: Grade) -> usize {
        self.counts[grade.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(grade, count)` pairs, best grade first
    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        Grade::ALL.iter().map(move |&g| (g, self.count(g)))
    }
}

/// Arithmetic mean of active marks
pub fn average_marks(store: &StudentStore) -> f64 {
    let (sum, n) = store
        .iter_active()
        .fold((0.0, 0usize), |(sum, n), s| (sum + s.marks(), n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Average, extremes and pass/fail counts in one pass
pub fn calculate_statistics(store: &StudentStore) -> Statistics {
    let mut stats = Statistics::default();
    let mut total_marks = 0.0;

    for student in store.iter_active() {
        let marks = student.marks();
        if stats.total_count == 0 {
            stats.highest = marks;
            stats.lowest = marks;
        } else {
            if marks > stats.highest {
                stats.highest = marks;
            }
            if marks < stats.lowest {
                stats.lowest = marks;
            }
        }

        total_marks += marks;
        stats.total_count += 1;
        if marks >= PASSING_MARKS {
            stats.passed_count += 1;
        } else {
            stats.failed_count += 1;
        }
    }

    if stats.total_count > 0 {
        let n = stats.total_count as f64;
        stats.average = total_marks / n;
        stats.pass_percentage = stats.passed_count as f64 / n * 100.0;
    }

    stats
}

/// Active student with the highest marks; the first one seen wins ties
pub fn highest_scorer(store: &StudentStore) -> Option<&Student> {
    let mut best: Option<&Student> = None;
    for student in store.iter_active() {
        if best.map_or(true, |b| student.marks() > b.marks()) {
            best = Some(student);
        }
    }
    best
}

/// Active student with the lowest marks; the first one seen wins ties
pub fn lowest_scorer(store: &StudentStore) -> Option<&Student> {
    let mut best: Option<&Student> = None;
    for student in store.iter_active() {
        if best.map_or(true, |b| student.marks() < b.marks()) {
            best = Some(student);
        }
    }
    best
}

pub fn count_passed(store: &StudentStore) -> usize {
    store
        .iter_active()
        .filter(|s| s.marks() >= PASSING_MARKS)
        .count()
}

pub fn count_failed(store: &StudentStore) -> usize {
    store.active_count() - count_passed(store)
}

pub fn pass_percentage(store: &StudentStore) -> f64 {
    let total = store.active_count();
    if total == 0 {
        return 0.0;
    }
    count_passed(store) as f64 / total as f64 * 100.0
}

/// Middle value of the active marks; mean of the two middle values for an
/// even count
pub fn median_marks(store: &StudentStore) -> f64 {
    let mut marks: Vec<f64> = store.iter_active().map(Student::marks).collect();
    if marks.is_empty() {
        return 0.0;
    }

    exchange_sort(&mut marks[..]);

    let mid = marks.len() / 2;
    if marks.len() % 2 == 1 {
        marks[mid]
    } else {
        (marks[mid - 1] + marks[mid]) / 2.0
    }
}

/// Sample standard deviation (n - 1 denominator); 0 for fewer than two
/// students
pub fn standard_deviation(store: &StudentStore) -> f64 {
    let n = store.active_count();
    if n <= 1 {
        return 0.0;
    }

    let mean = average_marks(store);
    let squared: f64 = store
        .iter_active()
        .map(|s| (s.marks() - mean).powi(2))
        .sum();

    (squared / (n - 1) as f64).sqrt()
}

/// Letter-grade histogram of active marks
pub fn grade_distribution(store: &StudentStore) -> GradeDistribution {
    let mut distribution = GradeDistribution::default();
    for student in store.iter_active() {
        distribution.counts[student.grade().index()] += 1;
    }
    distribution
}

/// Mean GPA over students with at least one active course
pub fn average_gpa(store: &StudentStore) -> f64 {
    let (sum, n) = store
        .iter_active()
        .filter(|s| s.has_courses())
        .fold((0.0, 0usize), |(sum, n), s| (sum + s.gpa(), n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
