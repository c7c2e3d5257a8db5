//! Sort Engine
//!
//! In-place reordering of the store's slot array.
//!
//! ## Algorithms
//! - Marks and roll number: partition-exchange (quicksort, last-element
//!   pivot). Recurses into the smaller partition and loops on the larger,
//!   so stack depth stays logarithmic on presorted input.
//! - Name: exchange sort (bubble sort) with early exit on a clean pass.
//!
//! ## Inactive Slots
//! Only active slots take part. The algorithms run over the positions of
//! the active slots, so tombstones stay exactly where they are.
//!
//! ## Ties
//! Equal primary keys fall back to roll number in the same direction.
//! Roll numbers are unique among active students, so each criterion is a
//! total order: the result is deterministic and the descending order is
//! the exact reverse of the ascending one.

mod exchange;
mod quicksort;

use std::cmp::Ordering;
use std::fmt;

use crate::store::{Student, StudentStore};

pub(crate) use exchange::exchange_sort;
pub(crate) use quicksort::quicksort;

/// Sort criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    #[default]
    MarksAsc,
    MarksDesc,
    NameAsc,
    NameDesc,
    RollAsc,
    RollDesc,
}

/// Field a criterion orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Marks,
    Name,
    RollNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 6] = [
        SortCriterion::MarksAsc,
        SortCriterion::MarksDesc,
        SortCriterion::NameAsc,
        SortCriterion::NameDesc,
        SortCriterion::RollAsc,
        SortCriterion::RollDesc,
    ];

    pub fn new(key: SortKey, direction: Direction) -> Self {
        match (key, direction) {
            (SortKey::Marks, Direction::Ascending) => SortCriterion::MarksAsc,
            (SortKey::Marks, Direction::Descending) => SortCriterion::MarksDesc,
            (SortKey::Name, Direction::Ascending) => SortCriterion::NameAsc,
            (SortKey::Name, Direction::Descending) => SortCriterion::NameDesc,
            (SortKey::RollNumber, Direction::Ascending) => SortCriterion::RollAsc,
            (SortKey::RollNumber, Direction::Descending) => SortCriterion::RollDesc,
        }
    }

    /// Parse a criterion name such as `marks-desc`
    ///
    /// Unrecognized names fall back to `MarksAsc`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "marks-asc" | "marks" => SortCriterion::MarksAsc,
            "marks-desc" => SortCriterion::MarksDesc,
            "name-asc" | "name" => SortCriterion::NameAsc,
            "name-desc" => SortCriterion::NameDesc,
            "roll-asc" | "roll" => SortCriterion::RollAsc,
            "roll-desc" => SortCriterion::RollDesc,
            other => {
                tracing::warn!(criterion = other, "unknown sort criterion, using marks-asc");
                SortCriterion::default()
            }
        }
    }

    pub fn key(self) -> SortKey {
        match self {
            SortCriterion::MarksAsc | SortCriterion::MarksDesc => SortKey::Marks,
            SortCriterion::NameAsc | SortCriterion::NameDesc => SortKey::Name,
            SortCriterion::RollAsc | SortCriterion::RollDesc => SortKey::RollNumber,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            SortCriterion::MarksAsc | SortCriterion::NameAsc | SortCriterion::RollAsc => {
                Direction::Ascending
            }
            _ => Direction::Descending,
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortCriterion::MarksAsc => "marks-asc",
            SortCriterion::MarksDesc => "marks-desc",
            SortCriterion::NameAsc => "name-asc",
            SortCriterion::NameDesc => "name-desc",
            SortCriterion::RollAsc => "roll-asc",
            SortCriterion::RollDesc => "roll-desc",
        };
        f.write_str(name)
    }
}

/// Sort the store in place
///
/// No-op (and no dirty flag) with fewer than two active students.
pub fn sort(store: &mut StudentStore, criterion: SortCriterion) {
    if store.active_count() < 2 {
        return;
    }

    {
        let mut view = ActiveSlots::new(store.slots_mut(), criterion);
        match criterion.key() {
            SortKey::Marks | SortKey::RollNumber => quicksort(&mut view),
            SortKey::Name => exchange_sort(&mut view),
        }
    }

    store.mark_dirty();
    tracing::debug!(%criterion, "students sorted");
}

// =============================================================================
// Sortable views
// =============================================================================

/// Indexed sequence the sort algorithms operate on
pub(crate) trait SortSlots {
    fn len(&self) -> usize;

    /// Order of element `a` relative to element `b` under the active criterion
    fn compare(&self, a: usize, b: usize) -> Ordering;

    fn swap(&mut self, a: usize, b: usize);
}

/// The active slots of a student array, ordered by one criterion
pub(crate) struct ActiveSlots<'a> {
    slots: &'a mut [Student],

    /// Slot index of each active student, in array order
    positions: Vec<usize>,

    criterion: SortCriterion,
}

impl<'a> ActiveSlots<'a> {
    pub(crate) fn new(slots: &'a mut [Student], criterion: SortCriterion) -> Self {
        let positions = slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active())
            .map(|(i, _)| i)
            .collect();
        Self {
            slots,
            positions,
            criterion,
        }
    }
}

impl SortSlots for ActiveSlots<'_> {
    fn len(&self) -> usize {
        self.positions.len()
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        let left = &self.slots[self.positions[a]];
        let right = &self.slots[self.positions[b]];

        let primary = match self.criterion.key() {
            SortKey::Marks => left.marks().total_cmp(&right.marks()),
            SortKey::Name => left.name().cmp(right.name()),
            SortKey::RollNumber => Ordering::Equal,
        };
        let ordering = primary.then(left.roll_number().cmp(&right.roll_number()));

        match self.criterion.direction() {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(self.positions[a], self.positions[b]);
    }
}

/// Plain ascending order over a marks buffer
impl SortSlots for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn compare(&self, a: usize, b: usize) -> Ordering {
        self[a].total_cmp(&self[b])
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[f64]>::swap(self, a, b)
    }
}
