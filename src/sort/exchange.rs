//! Exchange sort (bubble sort)
//!
//! Swaps adjacent elements only on a strict order violation, so equal
//! elements keep their relative order.

use std::cmp::Ordering;

use super::SortSlots;

pub(crate) fn exchange_sort<S: SortSlots + ?Sized>(slots: &mut S) {
    let n = slots.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if slots.compare(j, j + 1) == Ordering::Greater {
                slots.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
