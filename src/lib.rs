//! # Rollbook
//!
//! An in-memory student record store with:
//! - CRUD over students with validation and duplicate roll-number checks
//! - Per-student course sub-records with derived grades and GPA
//! - In-place sorting by marks, name, or roll number
//! - Aggregate statistics (average, median, deviation, distribution)
//! - Line-oriented flat-file persistence with a tolerant loader
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   CLI / UI collaborators                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Database                              │
//! │           (shared store + optional auto-saver)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────┬──────────────┐
//!          │            │             │              │
//!          ▼            ▼             ▼              ▼
//!   ┌────────────┐ ┌─────────┐ ┌────────────┐ ┌─────────────┐
//!   │StudentStore│ │  Sort   │ │   Stats    │ │ Persistence │
//!   │ (+Grading) │ │ Engine  │ │   Engine   │ │ (text/CSV)  │
//!   └─────┬──────┘ └─────────┘ └────────────┘ └─────────────┘
//!         │
//!         ▼
//!   ┌────────────┐
//!   │ Validation │
//!   └────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod validation;
pub mod grading;
pub mod store;
pub mod sort;
pub mod stats;
pub mod persistence;
pub mod autosave;
pub mod database;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RecordError, Result};
pub use config::Config;
pub use database::Database;
pub use sort::SortCriterion;
pub use stats::Statistics;
pub use store::{Course, Student, StudentStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Rollbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
