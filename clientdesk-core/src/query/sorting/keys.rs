//! Sort key types for comparing table rows
//!
//! Keys borrow from the row they were extracted from. Comparing two keys of
//! different kinds, or comparing against a missing key, yields a tie.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Natural ordering family of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKeyKind {
    /// Lexicographic text
    Text,
    /// Numeric identifiers
    Id,
    /// Chronological timestamps
    Date,
}

/// Value extracted from a row for a single sort field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Id(u64),
    Date(DateTime<Utc>),
}

impl SortKey<'_> {
    pub fn kind(&self) -> SortKeyKind {
        match self {
            SortKey::Text(_) => SortKeyKind::Text,
            SortKey::Id(_) => SortKeyKind::Id,
            SortKey::Date(_) => SortKeyKind::Date,
        }
    }

    /// Compare two keys of the same kind; `None` when the kinds differ.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => Some(a.cmp(b)),
            (SortKey::Id(a), SortKey::Id(b)) => Some(a.cmp(b)),
            (SortKey::Date(a), SortKey::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Compare two optional keys, treating missing or mismatched values as equal.
pub fn compare_keys(a: Option<&SortKey<'_>>, b: Option<&SortKey<'_>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ordering() {
        assert_eq!(
            SortKey::Text("apple").compare(&SortKey::Text("banana")),
            Some(Ordering::Less)
        );
        assert_eq!(
            SortKey::Id(10).compare(&SortKey::Id(9)),
            Some(Ordering::Greater)
        );

        let earlier = "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let later = "2024-06-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(
            SortKey::Date(earlier).compare(&SortKey::Date(later)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_missing_and_mismatched_keys_tie() {
        let text = SortKey::Text("a");
        let id = SortKey::Id(1);

        assert_eq!(text.compare(&id), None);
        assert_eq!(compare_keys(Some(&text), Some(&id)), Ordering::Equal);
        assert_eq!(compare_keys(Some(&text), None), Ordering::Equal);
        assert_eq!(compare_keys(None, Some(&id)), Ordering::Equal);
        assert_eq!(compare_keys(None, None), Ordering::Equal);
    }
}
