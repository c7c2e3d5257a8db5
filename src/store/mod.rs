//! Record Store Module
//!
//! In-memory collection of student records.
//!
//! ## Responsibilities
//! - Own the growable slot array and its active/inactive tagging
//! - Validate input and enforce unique roll numbers among active students
//! - Keep derived fields (status, GPA, course-averaged marks) current
//! - Track unsaved changes for the persistence layer
//!
//! ## Slot Layout
//! ```text
//!   0          count                     capacity
//!   ├──────────┼─────────────────────────┤
//!   │ students │  inactive (free) slots  │
//!   └──────────┴─────────────────────────┘
//! ```
//! Removal shifts later students left by one and tags the vacated tail
//! slot inactive. Growth doubles the capacity, so references into the
//! slot array must not be held across an `add`; the borrow checker
//! enforces this for safe callers.

mod student;
mod table;

pub use student::{Course, Student, MAX_COURSES};
pub use table::StudentStore;
