use crate::query::{
    filtering::{ClientTab, filter_by_tab},
    sorting::{SortField, SortRuleSet, sort_in_place},
};
use clientdesk_model::ClientRecord;

/// Everything the client table needs to render.
///
/// The visible rows are not stored: [`visible_records`](Self::visible_records)
/// derives them from the source records, the active tab and the rule set on
/// every call, so they cannot drift from the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientTableState {
    pub records: Vec<ClientRecord>,
    pub active_tab: ClientTab,
    pub rule_set: SortRuleSet,
    pub sort_panel_open: bool,
    pub offered_fields: Vec<SortField>,
}

impl ClientTableState {
    pub fn new(records: Vec<ClientRecord>) -> Self {
        Self {
            records,
            active_tab: ClientTab::default(),
            rule_set: SortRuleSet::new(),
            sort_panel_open: false,
            offered_fields: SortField::DEFAULT_OFFERED.to_vec(),
        }
    }

    /// Rows for the active tab, ordered by the rule set.
    pub fn visible_records(&self) -> Vec<ClientRecord> {
        let mut rows = filter_by_tab(&self.records, self.active_tab);
        sort_in_place(&mut rows, &self.rule_set);
        rows
    }

    /// Count shown on the sort icon; hidden when no criteria are set.
    pub fn sort_badge(&self) -> Option<usize> {
        (!self.rule_set.is_empty()).then(|| self.rule_set.len())
    }

    /// Fields the sort panel can still add.
    pub fn available_fields(&self) -> Vec<SortField> {
        self.rule_set.available_fields(&self.offered_fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sorting::SortDirection;
    use clientdesk_model::{ClientType, fixtures::sample_clients};

    #[test]
    fn view_composes_tab_filter_and_sort() {
        let mut state = ClientTableState::new(sample_clients());
        state.active_tab = ClientTab::Company;
        state.rule_set.add(SortField::ClientName);
        state
            .rule_set
            .set_direction(SortField::ClientName, SortDirection::Descending);

        let rows = state.visible_records();
        assert!(rows.iter().all(|r| r.client_type == ClientType::Company));
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        let mut expected = names.clone();
        expected.sort_by(|a, b| b.cmp(a));
        assert_eq!(names, expected);
    }

    #[test]
    fn badge_tracks_rule_count() {
        let mut state = ClientTableState::new(Vec::new());
        assert_eq!(state.sort_badge(), None);
        state.rule_set.add(SortField::Email);
        state.rule_set.add(SortField::Status);
        assert_eq!(state.sort_badge(), Some(2));
    }

    #[test]
    fn available_fields_shrink_as_fields_are_added() {
        let mut state = ClientTableState::new(Vec::new());
        assert_eq!(state.available_fields().len(), 4);
        state.rule_set.add(SortField::ClientId);
        assert!(!state.available_fields().contains(&SortField::ClientId));
    }
}
