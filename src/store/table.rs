//! StudentStore implementation
//!
//! Vec-backed slot array with tombstone flags and doubling growth.

use crate::config::INITIAL_CAPACITY;
use crate::error::{RecordError, Result};
use crate::validation;

use super::student::{Course, Student, MAX_COURSES};

/// Growable collection of student records
///
/// `slots.len()` is the capacity. Slots at `count..` are always inactive;
/// slots inside `0..count` are normally active but readers must still
/// honour the active flag.
#[derive(Debug, Clone)]
pub struct StudentStore {
    /// Backing slot array (length == capacity)
    slots: Vec<Student>,

    /// Logical length: upper bound of occupied slots
    count: usize,

    /// Set by every mutation, cleared by a successful save or load
    dirty: bool,
}

impl StudentStore {
    /// Create an empty store with `INITIAL_CAPACITY` inactive slots
    pub fn new() -> Self {
        Self {
            slots: vec![Student::default(); INITIAL_CAPACITY],
            count: 0,
            dirty: false,
        }
    }

    /// Create an empty store with `capacity` inactive slots
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RecordError::Config("store capacity must be at least 1".to_string()));
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| RecordError::AllocationFailure(capacity))?;
        slots.resize_with(capacity, Student::default);

        Ok(Self {
            slots,
            count: 0,
            dirty: false,
        })
    }

    // =========================================================================
    // Student CRUD
    // =========================================================================

    /// Add a new student
    ///
    /// Validates all fields, rejects a roll number already held by an
    /// active student, and doubles the capacity when the store is full.
    pub fn add(&mut self, name: &str, roll_number: i64, marks: f64) -> Result<&Student> {
        validation::check_name(name)?;
        let roll_number = validation::check_roll_number(roll_number)?;
        validation::check_marks(marks)?;

        if self.position(roll_number).is_some() {
            return Err(RecordError::DuplicateRollNumber(roll_number));
        }

        if self.count == self.slots.len() {
            self.grow()?;
        }

        let index = self.count;
        self.slots[index] = Student::new(name, roll_number, marks);
        self.count += 1;
        self.dirty = true;

        tracing::debug!(roll_number, index, "student added");
        Ok(&self.slots[index])
    }

    /// Find an active student by roll number (linear scan)
    pub fn find(&self, roll_number: u32) -> Option<&Student> {
        self.position(roll_number).map(|i| &self.slots[i])
    }

    /// Remove a student, shifting later students left by one
    ///
    /// Returns the removed record, tagged inactive.
    pub fn remove(&mut self, roll_number: u32) -> Result<Student> {
        let index = self
            .position(roll_number)
            .ok_or(RecordError::StudentNotFound(roll_number))?;

        // Moves the removed slot to count - 1 and everything after it left by one
        self.slots[index..self.count].rotate_left(1);
        self.count -= 1;

        let mut removed = std::mem::take(&mut self.slots[self.count]);
        removed.deactivate();
        self.dirty = true;

        tracing::debug!(roll_number, index, "student removed");
        Ok(removed)
    }

    /// Overwrite a student's name and marks
    ///
    /// A student with active courses has its marks replaced by the course
    /// average, so `marks` only sticks for students without courses.
    pub fn modify(&mut self, roll_number: u32, name: &str, marks: f64) -> Result<&Student> {
        validation::check_name(name)?;
        validation::check_marks(marks)?;

        let index = self
            .position(roll_number)
            .ok_or(RecordError::StudentNotFound(roll_number))?;

        let student = &mut self.slots[index];
        student.set_details(name, marks);
        student.recompute();
        self.dirty = true;

        tracing::debug!(roll_number, "student modified");
        Ok(&self.slots[index])
    }

    /// Deactivate every slot. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.deactivate();
        }
        self.count = 0;
        self.dirty = true;
    }

    // =========================================================================
    // Course Operations
    // =========================================================================

    /// Add a course to a student and refresh its derived fields
    pub fn add_course(&mut self, roll_number: u32, course_name: &str, score: f64) -> Result<&Student> {
        validation::check_course_name(course_name)?;
        validation::check_score(score)?;

        let index = self
            .position(roll_number)
            .ok_or(RecordError::StudentNotFound(roll_number))?;
        let student = &mut self.slots[index];

        if student.course_count() >= MAX_COURSES {
            return Err(RecordError::MaxCoursesReached(roll_number));
        }
        if student.course_slot(course_name).is_some() {
            return Err(RecordError::DuplicateCourseName {
                roll_number,
                course: course_name.to_string(),
            });
        }

        student
            .insert_course(course_name, score)
            .ok_or(RecordError::MaxCoursesReached(roll_number))?;
        student.recompute();
        self.dirty = true;

        tracing::debug!(roll_number, course = course_name, score, "course added");
        Ok(&self.slots[index])
    }

    /// Remove a course from a student
    ///
    /// Marks stay at their last value once the final course is removed.
    pub fn remove_course(&mut self, roll_number: u32, course_name: &str) -> Result<Course> {
        let index = self
            .position(roll_number)
            .ok_or(RecordError::StudentNotFound(roll_number))?;
        let student = &mut self.slots[index];

        let slot = student
            .course_slot(course_name)
            .ok_or_else(|| RecordError::CourseNotFound {
                roll_number,
                course: course_name.to_string(),
            })?;

        let removed = student.take_course(slot);
        student.recompute();
        self.dirty = true;

        tracing::debug!(roll_number, course = course_name, "course removed");
        Ok(removed)
    }

    /// Change the score of an existing course
    pub fn update_course_score(
        &mut self,
        roll_number: u32,
        course_name: &str,
        score: f64,
    ) -> Result<&Student> {
        validation::check_score(score)?;

        let index = self
            .position(roll_number)
            .ok_or(RecordError::StudentNotFound(roll_number))?;
        let student = &mut self.slots[index];

        let slot = student
            .course_slot(course_name)
            .ok_or_else(|| RecordError::CourseNotFound {
                roll_number,
                course: course_name.to_string(),
            })?;

        student.course_mut(slot).set_score(score);
        student.recompute();
        self.dirty = true;

        Ok(&self.slots[index])
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Logical length (occupied slots, active or not)
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of active students
    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Active students in array order
    pub fn iter_active(&self) -> impl Iterator<Item = &Student> {
        self.slots[..self.count].iter().filter(|s| s.is_active())
    }

    /// Every occupied slot in array order, inactive ones included
    pub fn slots(&self) -> &[Student] {
        &self.slots[..self.count]
    }

    // =========================================================================
    // Crate-internal access
    // =========================================================================

    /// Occupied slots for in-place reordering
    pub(crate) fn slots_mut(&mut self) -> &mut [Student] {
        &mut self.slots[..self.count]
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn mark_saved(&mut self) {
        self.dirty = false;
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Index of the active student holding `roll_number`
    fn position(&self, roll_number: u32) -> Option<usize> {
        self.slots[..self.count]
            .iter()
            .position(|s| s.is_active() && s.roll_number() == roll_number)
    }

    /// Double the slot array
    fn grow(&mut self) -> Result<()> {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .ok_or(RecordError::AllocationFailure(usize::MAX))?;

        self.slots
            .try_reserve_exact(new_capacity - old_capacity)
            .map_err(|_| RecordError::AllocationFailure(new_capacity))?;
        self.slots.resize_with(new_capacity, Student::default);

        tracing::debug!(old_capacity, new_capacity, "store grown");
        Ok(())
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}
