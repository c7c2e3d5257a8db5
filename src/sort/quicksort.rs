//! Partition-exchange sort
//!
//! Lomuto partition with the last element as pivot. Not stable.

use std::cmp::Ordering;

use super::SortSlots;

/// Sort all elements of `slots`
pub(crate) fn quicksort<S: SortSlots + ?Sized>(slots: &mut S) {
    if slots.len() < 2 {
        return;
    }
    let high = slots.len() - 1;
    sort_range(slots, 0, high);
}

/// Sort the inclusive range `low..=high`
fn sort_range<S: SortSlots + ?Sized>(slots: &mut S, mut low: usize, mut high: usize) {
    while low < high {
        let pivot = partition(slots, low, high);
        let left_len = pivot - low;
        let right_len = high - pivot;

        if left_len < right_len {
            if left_len > 1 {
                sort_range(slots, low, pivot - 1);
            }
            low = pivot + 1;
        } else {
            if right_len > 1 {
                sort_range(slots, pivot + 1, high);
            }
            // left_len >= 1 here, so pivot > low
            high = pivot - 1;
        }
    }
}

/// Move every element not after the pivot in front of it; returns the
/// pivot's final index.
pub(crate) fn partition<S: SortSlots + ?Sized>(slots: &mut S, low: usize, high: usize) -> usize {
    let mut boundary = low;
    for j in low..high {
        if slots.compare(j, high) != Ordering::Greater {
            slots.swap(boundary, j);
            boundary += 1;
        }
    }
    slots.swap(boundary, high);
    boundary
}
