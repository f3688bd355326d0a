//! Utility functions for sorting operations

use std::cmp::Ordering;

/// Move the element at `from` to `to`, shifting the elements in between.
///
/// Mirrors a drag-and-drop list move: after the call the moved element sits at
/// index `to`. Returns `false` without touching the slice when either index is
/// out of bounds.
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }

    if from < to {
        items[from..=to].rotate_left(1);
    } else if from > to {
        items[to..=from].rotate_right(1);
    }
    true
}

/// Stable top-down merge sort.
///
/// Never panics, even when `compare` is not a total order (missing sort keys
/// tie with everything, which breaks transitivity).
pub fn merge_sort_by<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort_by(left, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // Ties take from the left run to keep equal elements in input order
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

/// Check if a slice is already sorted according to a comparison function
///
/// Returns true if the slice is already sorted, false otherwise.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|w| matches!(compare(&w[0], &w[1]), Ordering::Less | Ordering::Equal))
}
