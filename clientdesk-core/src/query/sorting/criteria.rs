use super::{fields::SortField, keys::SortKeyKind};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient a natural-order comparison for this direction.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Human description of the resulting order for a field of `kind`.
    pub fn describe(self, kind: SortKeyKind) -> &'static str {
        match (kind, self) {
            (SortKeyKind::Text, SortDirection::Ascending) => "A-Z",
            (SortKeyKind::Text, SortDirection::Descending) => "Z-A",
            (SortKeyKind::Date, SortDirection::Ascending) => "Oldest to Newest",
            (SortKeyKind::Date, SortDirection::Descending) => "Newest to Oldest",
            (SortKeyKind::Id, SortDirection::Ascending) => "Lowest to Highest",
            (SortKeyKind::Id, SortDirection::Descending) => "Highest to Lowest",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text names no known direction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort direction '{0}' (expected asc or desc)")]
pub struct UnknownSortDirection(pub String);

impl FromStr for SortDirection {
    type Err = UnknownSortDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "up" => Ok(SortDirection::Ascending),
            "desc" | "descending" | "down" => Ok(SortDirection::Descending),
            other => Err(UnknownSortDirection(other.to_string())),
        }
    }
}

/// One (field, direction) sort instruction
///
/// The field is the criterion's identity; its label is derived from the field
/// so the two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CriterionWire", into = "CriterionWire")]
pub struct SortCriterion {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }
}

/// Persisted shape of a criterion: `{"key", "label", "direction"}`.
///
/// Older state used the label as the key, so reading falls back to the label
/// when the key does not resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CriterionWire {
    key: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    direction: SortDirection,
}

impl TryFrom<CriterionWire> for SortCriterion {
    type Error = super::fields::UnknownSortField;

    fn try_from(wire: CriterionWire) -> Result<Self, Self::Error> {
        let field = SortField::resolve(&wire.key)
            .or_else(|| wire.label.as_deref().and_then(SortField::resolve))
            .ok_or(super::fields::UnknownSortField(wire.key))?;
        Ok(SortCriterion::new(field, wire.direction))
    }
}

impl From<SortCriterion> for CriterionWire {
    fn from(criterion: SortCriterion) -> Self {
        CriterionWire {
            key: criterion.field.key().to_string(),
            label: Some(criterion.field.label().to_string()),
            direction: criterion.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_reverses_only_when_descending() {
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Equal),
            Ordering::Equal
        );
        assert_eq!(
            SortDirection::Ascending.toggled(),
            SortDirection::Descending
        );
    }

    #[test]
    fn criterion_persists_key_label_and_direction() {
        let criterion = SortCriterion::descending(SortField::CreatedAt);
        let value = serde_json::to_value(criterion).unwrap();

        assert_eq!(value["key"], "createdAt");
        assert_eq!(value["label"], "Created At");
        assert_eq!(value["direction"], "desc");
    }

    #[test]
    fn legacy_label_keyed_criterion_loads() {
        let json = r#"{"key":"Client Name","label":"Client Name","direction":"desc"}"#;
        let criterion: SortCriterion = serde_json::from_str(json).unwrap();
        assert_eq!(criterion, SortCriterion::descending(SortField::ClientName));
    }

    #[test]
    fn unknown_key_falls_back_to_label() {
        let json = r#"{"key":"clientName","label":"Client Name","direction":"asc"}"#;
        let criterion: SortCriterion = serde_json::from_str(json).unwrap();
        assert_eq!(criterion.field, SortField::ClientName);

        let bogus = r#"{"key":"shoeSize","label":"Shoe Size","direction":"asc"}"#;
        assert!(serde_json::from_str::<SortCriterion>(bogus).is_err());
    }

    #[test]
    fn date_directions_describe_chronology() {
        assert_eq!(
            SortDirection::Ascending.describe(SortKeyKind::Date),
            "Oldest to Newest"
        );
        assert_eq!(SortDirection::Descending.describe(SortKeyKind::Text), "Z-A");
    }
}
