//! Comparator engine: derives an order over rows from a rule set.

use super::{
    keys::compare_keys, rule_set::SortRuleSet, traits::SortableEntity,
    utils::{is_sorted_by, merge_sort_by},
};
use std::cmp::Ordering;

/// Compare two rows under `rules`.
///
/// The first criterion whose keys differ decides the result, reversed for
/// descending criteria. Rows that tie on every criterion compare equal.
pub fn compare_records<T: SortableEntity>(a: &T, b: &T, rules: &SortRuleSet) -> Ordering {
    for criterion in rules {
        let a_key = a.sort_key(criterion.field);
        let b_key = b.sort_key(criterion.field);
        let ord = compare_keys(a_key.as_ref(), b_key.as_ref());
        if ord != Ordering::Equal {
            return criterion.direction.apply(ord);
        }
    }
    Ordering::Equal
}

/// Sort rows in place; rows that compare equal keep their relative order.
pub fn sort_in_place<T: SortableEntity>(items: &mut Vec<T>, rules: &SortRuleSet) {
    if rules.is_empty() || items.len() < 2 {
        return;
    }
    let taken = std::mem::take(items);
    *items = merge_sort_by(taken, &mut |a: &T, b: &T| compare_records(a, b, rules));
}

/// Return a stably sorted copy of `items`, leaving the input untouched.
pub fn sort_records<T: SortableEntity + Clone>(items: &[T], rules: &SortRuleSet) -> Vec<T> {
    let mut sorted = items.to_vec();
    sort_in_place(&mut sorted, rules);
    sorted
}

/// Whether `items` already satisfy `rules`.
pub fn is_sorted_by_rules<T: SortableEntity>(items: &[T], rules: &SortRuleSet) -> bool {
    is_sorted_by(items, |a, b| compare_records(a, b, rules))
}
