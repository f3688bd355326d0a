//! Ordered, user-editable list of sort criteria
//!
//! The first criterion has the highest priority. A field appears at most once.

use super::{
    criteria::{SortCriterion, SortDirection},
    fields::SortField,
    utils::move_item,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    #[error("sort position {index} is out of range for {len} criteria")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("field '{0}' appears more than once")]
    DuplicateField(SortField),
}

/// Ordered sequence of criteria defining sort precedence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SortCriterion>", into = "Vec<SortCriterion>")]
pub struct SortRuleSet {
    criteria: Vec<SortCriterion>,
}

impl SortRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from existing criteria, rejecting duplicate fields.
    pub fn from_criteria(
        criteria: impl IntoIterator<Item = SortCriterion>,
    ) -> Result<Self, RuleSetError> {
        let mut set = Self::new();
        for criterion in criteria {
            if set.contains(criterion.field) {
                return Err(RuleSetError::DuplicateField(criterion.field));
            }
            set.criteria.push(criterion);
        }
        Ok(set)
    }

    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortCriterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn contains(&self, field: SortField) -> bool {
        self.position(field).is_some()
    }

    pub fn position(&self, field: SortField) -> Option<usize> {
        self.criteria.iter().position(|c| c.field == field)
    }

    pub fn get(&self, field: SortField) -> Option<&SortCriterion> {
        self.criteria.iter().find(|c| c.field == field)
    }

    /// Append `field` ascending. No-op when already present.
    pub fn add(&mut self, field: SortField) -> bool {
        if self.contains(field) {
            return false;
        }
        self.criteria.push(SortCriterion::ascending(field));
        true
    }

    /// Remove `field`. No-op when absent.
    pub fn remove(&mut self, field: SortField) -> bool {
        let before = self.criteria.len();
        self.criteria.retain(|c| c.field != field);
        self.criteria.len() != before
    }

    /// Set the direction of `field`. Returns whether anything changed.
    pub fn set_direction(&mut self, field: SortField, direction: SortDirection) -> bool {
        match self.criteria.iter_mut().find(|c| c.field == field) {
            Some(criterion) if criterion.direction != direction => {
                criterion.direction = direction;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_direction(&mut self, field: SortField) -> bool {
        match self.criteria.iter_mut().find(|c| c.field == field) {
            Some(criterion) => {
                criterion.direction = criterion.direction.toggled();
                true
            }
            None => false,
        }
    }

    /// Move the criterion at `from` to `to`, shifting the ones in between.
    ///
    /// Out-of-range positions leave the set untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), RuleSetError> {
        let len = self.criteria.len();
        for index in [from, to] {
            if index >= len {
                return Err(RuleSetError::IndexOutOfRange { index, len });
            }
        }
        move_item(&mut self.criteria, from, to);
        Ok(())
    }

    /// Drag-and-drop form of [`reorder`](Self::reorder): move `active` to the
    /// slot currently held by `over`.
    ///
    /// Dropping a field onto itself, or onto/from a field that is not in the
    /// set, changes nothing and returns `false`.
    pub fn move_field(&mut self, active: SortField, over: SortField) -> bool {
        if active == over {
            return false;
        }
        match (self.position(active), self.position(over)) {
            (Some(from), Some(to)) => self.reorder(from, to).is_ok(),
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    /// Offered fields that are not yet part of the set, in offered order.
    pub fn available_fields(&self, offered: &[SortField]) -> Vec<SortField> {
        offered
            .iter()
            .copied()
            .filter(|field| !self.contains(*field))
            .collect()
    }
}

impl TryFrom<Vec<SortCriterion>> for SortRuleSet {
    type Error = RuleSetError;

    fn try_from(criteria: Vec<SortCriterion>) -> Result<Self, Self::Error> {
        Self::from_criteria(criteria)
    }
}

impl From<SortRuleSet> for Vec<SortCriterion> {
    fn from(set: SortRuleSet) -> Self {
        set.criteria
    }
}

impl<'a> IntoIterator for &'a SortRuleSet {
    type Item = &'a SortCriterion;
    type IntoIter = std::slice::Iter<'a, SortCriterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.criteria.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(set: &SortRuleSet) -> Vec<SortField> {
        set.iter().map(|c| c.field).collect()
    }

    fn three_field_set() -> SortRuleSet {
        let mut set = SortRuleSet::new();
        set.add(SortField::ClientName);
        set.add(SortField::CreatedAt);
        set.add(SortField::ClientId);
        set
    }

    #[test]
    fn add_is_idempotent() {
        let mut set = SortRuleSet::new();
        assert!(set.add(SortField::ClientName));
        assert!(!set.add(SortField::ClientName));

        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(SortField::ClientName).map(|c| c.direction),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn add_keeps_existing_direction() {
        let mut set = SortRuleSet::new();
        set.add(SortField::Email);
        set.set_direction(SortField::Email, SortDirection::Descending);
        set.add(SortField::Email);

        assert_eq!(
            set.get(SortField::Email).map(|c| c.direction),
            Some(SortDirection::Descending)
        );
    }

    #[test]
    fn remove_and_set_direction_ignore_absent_fields() {
        let mut set = three_field_set();
        assert!(!set.remove(SortField::Status));
        assert!(!set.set_direction(SortField::Status, SortDirection::Descending));
        assert!(!set.toggle_direction(SortField::Status));
        assert_eq!(set, three_field_set());

        assert!(set.remove(SortField::CreatedAt));
        assert_eq!(fields(&set), vec![SortField::ClientName, SortField::ClientId]);
    }

    #[test]
    fn toggle_flips_direction() {
        let mut set = three_field_set();
        assert!(set.toggle_direction(SortField::ClientId));
        assert_eq!(
            set.get(SortField::ClientId).map(|c| c.direction),
            Some(SortDirection::Descending)
        );
        assert!(set.toggle_direction(SortField::ClientId));
        assert_eq!(
            set.get(SortField::ClientId).map(|c| c.direction),
            Some(SortDirection::Ascending)
        );
    }

    #[test]
    fn reorder_then_inverse_restores_order() {
        let original = three_field_set();
        for from in 0..original.len() {
            for to in 0..original.len() {
                let mut set = original.clone();
                set.reorder(from, to).unwrap();
                set.reorder(to, from).unwrap();
                assert_eq!(set, original, "reorder({from}, {to}) and back");
            }
        }
    }

    #[test]
    fn reorder_shifts_intermediate_criteria() {
        let mut set = three_field_set();
        set.reorder(2, 0).unwrap();
        assert_eq!(
            fields(&set),
            vec![SortField::ClientId, SortField::ClientName, SortField::CreatedAt]
        );
    }

    #[test]
    fn reorder_out_of_range_is_rejected_without_mutation() {
        let mut set = three_field_set();
        assert_eq!(
            set.reorder(0, 3),
            Err(RuleSetError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            set.reorder(7, 1),
            Err(RuleSetError::IndexOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(set, three_field_set());

        let mut empty = SortRuleSet::new();
        assert!(empty.reorder(0, 0).is_err());
    }

    #[test]
    fn move_field_follows_drag_semantics() {
        let mut set = three_field_set();
        assert!(set.move_field(SortField::ClientName, SortField::ClientId));
        assert_eq!(
            fields(&set),
            vec![SortField::CreatedAt, SortField::ClientId, SortField::ClientName]
        );

        assert!(!set.move_field(SortField::ClientId, SortField::ClientId));
        assert!(!set.move_field(SortField::Status, SortField::ClientId));
        assert!(!set.move_field(SortField::ClientId, SortField::Status));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = three_field_set();
        set.clear();
        assert!(set.is_empty());
        assert!(set.criteria().is_empty());
    }

    #[test]
    fn available_fields_excludes_present_ones() {
        let mut set = SortRuleSet::new();
        set.add(SortField::CreatedAt);
        assert_eq!(
            set.available_fields(&SortField::DEFAULT_OFFERED),
            vec![SortField::ClientName, SortField::UpdatedAt, SortField::ClientId]
        );
    }

    #[test]
    fn deserializing_duplicates_is_rejected() {
        let json = r#"[
            {"key":"name","label":"Client Name","direction":"asc"},
            {"key":"Client Name","label":"Client Name","direction":"desc"}
        ]"#;
        assert!(serde_json::from_str::<SortRuleSet>(json).is_err());
    }

    #[test]
    fn serializes_as_plain_criteria_array() {
        let mut set = SortRuleSet::new();
        set.add(SortField::ClientType);
        set.add(SortField::ClientName);
        set.set_direction(SortField::ClientName, SortDirection::Descending);

        let json = serde_json::to_string(&set).unwrap();
        let restored: SortRuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, set);
        assert!(json.starts_with('['));
    }
}
