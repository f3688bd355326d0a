use super::{
    intent::{TableEvent, TableIntent},
    state::ClientTableState,
};
use crate::{
    persistence::{KeyValueStore, SortStateRepository},
    query::{
        filtering::ClientTab,
        sorting::{SortField, SortRuleSet, sort_records},
    },
};
use clientdesk_model::ClientRecord;
use tracing::{debug, info, warn};

/// Startup options for [`ClientTableController::hydrate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    pub default_tab: ClientTab,
    /// Fields the sort panel offers, in display order
    pub offered_fields: Vec<SortField>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            default_tab: ClientTab::All,
            offered_fields: SortField::DEFAULT_OFFERED.to_vec(),
        }
    }
}

/// Owns the table state and its persistence, and applies intents to both.
#[derive(Debug)]
pub struct ClientTableController<S> {
    state: ClientTableState,
    repository: SortStateRepository<S>,
}

impl<S: KeyValueStore> ClientTableController<S> {
    /// Build the controller, restoring the rule set from `repository`.
    ///
    /// A missing or unreadable rule set starts empty. A sorted snapshot left
    /// without one, or one that no longer matches the records, is stale and
    /// gets removed.
    pub fn hydrate(
        records: Vec<ClientRecord>,
        mut repository: SortStateRepository<S>,
        options: TableOptions,
    ) -> Self {
        let persisted = repository.load();

        let rule_set = match persisted.rule_set {
            Some(rules) => {
                if let Some(snapshot) = persisted.snapshot.as_deref()
                    && !snapshot_is_current(snapshot, &records, &rules)
                {
                    discard_stale_snapshot(
                        &mut repository,
                        "Discarding sorted snapshot that no longer matches the records",
                    );
                }
                info!("Restored sort rule set with {} criteria", rules.len());
                rules
            }
            None => {
                if persisted.snapshot.is_some() {
                    discard_stale_snapshot(
                        &mut repository,
                        "Discarding sorted snapshot persisted without a rule set",
                    );
                }
                SortRuleSet::new()
            }
        };

        let state = ClientTableState {
            records,
            active_tab: options.default_tab,
            rule_set,
            sort_panel_open: false,
            offered_fields: options.offered_fields,
        };

        Self { state, repository }
    }

    pub fn state(&self) -> &ClientTableState {
        &self.state
    }

    pub fn repository(&self) -> &SortStateRepository<S> {
        &self.repository
    }

    pub fn into_repository(self) -> SortStateRepository<S> {
        self.repository
    }

    pub fn visible_records(&self) -> Vec<ClientRecord> {
        self.state.visible_records()
    }

    pub fn sort_badge(&self) -> Option<usize> {
        self.state.sort_badge()
    }

    pub fn dispatch(&mut self, intent: TableIntent) -> TableEvent {
        debug!("Dispatching {:?}", intent);

        match intent {
            TableIntent::ChangeTab(tab) => {
                if self.state.active_tab == tab {
                    return TableEvent::Unchanged;
                }
                self.state.active_tab = tab;
                TableEvent::Updated
            }
            TableIntent::ToggleSortPanel => {
                self.state.sort_panel_open = !self.state.sort_panel_open;
                TableEvent::Updated
            }
            TableIntent::AddSortField(field) => updated_if(self.state.rule_set.add(field)),
            TableIntent::RemoveSortField(field) => {
                updated_if(self.state.rule_set.remove(field))
            }
            TableIntent::SetSortDirection(field, direction) => {
                updated_if(self.state.rule_set.set_direction(field, direction))
            }
            TableIntent::ToggleSortDirection(field) => {
                updated_if(self.state.rule_set.toggle_direction(field))
            }
            TableIntent::ReorderSortFields { from, to } => match self
                .state
                .rule_set
                .reorder(from, to)
            {
                Ok(()) => updated_if(from != to),
                Err(err) => {
                    debug!("Ignoring reorder: {}", err);
                    TableEvent::Unchanged
                }
            },
            TableIntent::DragSortField { active, over } => {
                updated_if(self.state.rule_set.move_field(active, over))
            }
            TableIntent::ApplySort => self.apply_sort(),
            TableIntent::ClearSort => self.clear_sort(),
            TableIntent::AddClient => {
                info!("Add client requested");
                TableEvent::AddClientRequested
            }
        }
    }

    fn apply_sort(&mut self) -> TableEvent {
        self.state.sort_panel_open = false;

        let sorted = sort_records(&self.state.records, &self.state.rule_set);
        if let Err(err) = self.repository.save(&self.state.rule_set, &sorted) {
            warn!("Failed to persist sort state: {}", err);
        }

        TableEvent::SortApplied {
            criteria: self.state.rule_set.len(),
        }
    }

    fn clear_sort(&mut self) -> TableEvent {
        self.state.rule_set.clear();
        if let Err(err) = self.repository.clear() {
            warn!("Failed to clear persisted sort state: {}", err);
        }
        TableEvent::SortCleared
    }
}

fn updated_if(changed: bool) -> TableEvent {
    if changed {
        TableEvent::Updated
    } else {
        TableEvent::Unchanged
    }
}

fn discard_stale_snapshot<S: KeyValueStore>(
    repository: &mut SortStateRepository<S>,
    reason: &str,
) {
    warn!("{}", reason);
    if let Err(err) = repository.discard_snapshot() {
        warn!("Failed to discard stale snapshot: {}", err);
    }
}

fn snapshot_is_current(
    snapshot: &[ClientRecord],
    records: &[ClientRecord],
    rules: &SortRuleSet,
) -> bool {
    snapshot.len() == records.len()
        && sort_records(records, rules)
            .iter()
            .zip(snapshot)
            .all(|(expected, stored)| expected.id == stored.id)
}
