//! Grading Engine
//!
//! Derives pass/fail status, letter grade and grade points from a score.
//! The same thresholds apply to a student's overall marks and to each
//! course score.

use std::fmt;

/// Marks at or above this value pass
pub const PASSING_MARKS: f64 = 40.0;

/// Top of the grade-point scale
pub const MAX_GRADE_POINTS: f64 = 4.0;

/// Pass/fail status derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    Pass,
    #[default]
    Fail,
}

impl Status {
    /// Status for a score
    pub fn from_score(score: f64) -> Self {
        if score >= PASSING_MARKS {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "Pass",
            Status::Fail => "Fail",
        }
    }

    pub fn is_pass(self) -> bool {
        self == Status::Pass
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade derived from a score
///
/// | Grade | Score |
/// |-------|-------|
/// | A     | ≥ 90  |
/// | B     | ≥ 80  |
/// | C     | ≥ 70  |
/// | D     | ≥ 60  |
/// | E     | ≥ 40  |
/// | F     | < 40  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    #[default]
    F,
}

impl Grade {
    /// All grades, best first (histogram bucket order)
    pub const ALL: [Grade; 6] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E, Grade::F];

    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else if score >= PASSING_MARKS {
            Grade::E
        } else {
            Grade::F
        }
    }

    /// Position of this grade in `Grade::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::E => 'E',
            Grade::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Linear mapping of a 0..=100 score onto the 0..=4 grade-point scale
pub fn grade_points(score: f64) -> f64 {
    score / 100.0 * MAX_GRADE_POINTS
}
