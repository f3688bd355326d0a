//! Intentional query crate surface consumed by table front ends.

pub use super::filtering::{ClientTab, filter_by_tab};
pub use super::sorting::{
    RuleSetError, SortCriterion, SortDirection, SortField, SortKey,
    SortKeyKind, SortRuleSet, SortableEntity, compare_records, sort_records,
};
