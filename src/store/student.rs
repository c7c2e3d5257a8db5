//! Student and course records
//!
//! Derived fields are only ever written by the store, so the structs
//! expose read-only accessors.

use crate::grading::{grade_points, Grade, Status};

/// Course slots per student
pub const MAX_COURSES: usize = 10;

/// A course result owned by exactly one student
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Course {
    name: String,
    score: f64,
    grade: Grade,
    status: Status,
    active: bool,
}

impl Course {
    pub(crate) fn new(name: &str, score: f64) -> Self {
        Self {
            name: name.to_string(),
            score,
            grade: Grade::from_score(score),
            status: Status::from_score(score),
            active: true,
        }
    }

    pub(crate) fn set_score(&mut self, score: f64) {
        self.score = score;
        self.grade = Grade::from_score(score);
        self.status = Status::from_score(score);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// A student record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Student {
    name: String,
    roll_number: u32,
    marks: f64,
    status: Status,
    courses: [Course; MAX_COURSES],
    course_count: usize,
    gpa: f64,
    active: bool,
}

impl Student {
    /// Build an active student with no courses
    pub(crate) fn new(name: &str, roll_number: u32, marks: f64) -> Self {
        Self {
            name: name.to_string(),
            roll_number,
            marks,
            status: Status::from_score(marks),
            active: true,
            ..Self::default()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_number(&self) -> u32 {
        self.roll_number
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Letter grade for the overall marks
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.marks)
    }

    /// Mean grade points over active courses, 0 without courses
    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn course_count(&self) -> usize {
        self.course_count
    }

    pub fn has_courses(&self) -> bool {
        self.course_count > 0
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Active courses in slot order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(|c| c.active)
    }

    /// Look up an active course by exact name
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.course_slot(name).map(|i| &self.courses[i])
    }

    // =========================================================================
    // Store-internal mutation
    // =========================================================================

    pub(crate) fn set_details(&mut self, name: &str, marks: f64) {
        self.name = name.to_string();
        self.marks = marks;
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    pub(crate) fn course_slot(&self, name: &str) -> Option<usize> {
        self.courses
            .iter()
            .position(|c| c.active && c.name == name)
    }

    /// Fill the first free course slot. Caller checks capacity and
    /// duplicates first.
    pub(crate) fn insert_course(&mut self, name: &str, score: f64) -> Option<usize> {
        let slot = self.courses.iter().position(|c| !c.active)?;
        self.courses[slot] = Course::new(name, score);
        self.course_count += 1;
        Some(slot)
    }

    pub(crate) fn take_course(&mut self, slot: usize) -> Course {
        let mut course = std::mem::take(&mut self.courses[slot]);
        course.active = false;
        self.course_count -= 1;
        course
    }

    pub(crate) fn course_mut(&mut self, slot: usize) -> &mut Course {
        &mut self.courses[slot]
    }

    /// Refresh GPA, course-averaged marks and status.
    ///
    /// With at least one active course the overall marks become the mean
    /// course score; without courses the marks are left as entered.
    pub(crate) fn recompute(&mut self) {
        if self.course_count > 0 {
            let (score_sum, point_sum) = self
                .courses()
                .fold((0.0, 0.0), |(s, p), c| (s + c.score, p + grade_points(c.score)));
            let n = self.course_count as f64;
            self.marks = score_sum / n;
            self.gpa = point_sum / n;
        } else {
            self.gpa = 0.0;
        }
        self.status = Status::from_score(self.marks);
    }
}
