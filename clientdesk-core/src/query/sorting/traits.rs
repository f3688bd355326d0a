//! Core trait for sortable entities
//!
//! Anything rendered as a table row implements [`SortableEntity`] so the
//! comparator engine can order it without knowing the concrete type.

use super::{fields::SortField, keys::SortKey};

/// Base trait for any sortable table row
pub trait SortableEntity {
    /// Extract the sort key for the given field
    ///
    /// Returns `None` when the row has no value for the field. Missing keys
    /// tie with everything, so the comparison falls through to the next
    /// criterion.
    fn sort_key(&self, field: SortField) -> Option<SortKey<'_>>;
}

impl<T: SortableEntity + ?Sized> SortableEntity for &T {
    fn sort_key(&self, field: SortField) -> Option<SortKey<'_>> {
        (**self).sort_key(field)
    }
}
