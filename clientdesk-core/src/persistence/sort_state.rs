use super::store::KeyValueStore;
use crate::{error::Result, query::sorting::SortRuleSet};
use clientdesk_model::ClientRecord;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

/// Keys the sort state is written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Serialized rule set
    pub rule_set: String,
    /// Serialized record sequence as sorted at apply time
    pub sorted_records: String,
    /// Older rule-set key; read as a fallback and removed on clear
    pub legacy_rule_set: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            rule_set: "sortOptions".to_string(),
            sorted_records: "sortedClients".to_string(),
            legacy_rule_set: "sortCriteria".to_string(),
        }
    }
}

/// Sort state read back from the store. Absent parts are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSortState {
    pub rule_set: Option<SortRuleSet>,
    pub snapshot: Option<Vec<ClientRecord>>,
}

/// Reads and writes sort state through a [`KeyValueStore`].
///
/// Anything unreadable is treated as absent: loading never fails.
#[derive(Debug)]
pub struct SortStateRepository<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> SortStateRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn load(&self) -> PersistedSortState {
        let rule_set = self
            .read::<SortRuleSet>(&self.keys.rule_set)
            .or_else(|| self.read::<SortRuleSet>(&self.keys.legacy_rule_set));
        let snapshot = self.read::<Vec<ClientRecord>>(&self.keys.sorted_records);

        debug!(
            "Loaded sort state: rule_set={:?}, snapshot_len={:?}",
            rule_set.as_ref().map(SortRuleSet::len),
            snapshot.as_ref().map(Vec::len)
        );

        PersistedSortState { rule_set, snapshot }
    }

    pub fn save(&mut self, rules: &SortRuleSet, sorted: &[ClientRecord]) -> Result<()> {
        let rule_key = self.keys.rule_set.clone();
        let snapshot_key = self.keys.sorted_records.clone();
        self.write(&snapshot_key, sorted)?;
        self.write(&rule_key, rules)?;

        info!(
            "Saved sort state with {} criteria and {} records",
            rules.len(),
            sorted.len()
        );
        Ok(())
    }

    /// Remove every sort key, including the legacy one.
    ///
    /// All removals are attempted; the first failure is returned.
    pub fn clear(&mut self) -> Result<()> {
        let keys = [
            self.keys.rule_set.clone(),
            self.keys.sorted_records.clone(),
            self.keys.legacy_rule_set.clone(),
        ];

        let mut first_err = None;
        for key in &keys {
            if let Err(err) = self.store.remove(key) {
                warn!("Failed to remove sort state key {}: {}", key, err);
                first_err.get_or_insert(err);
            }
        }

        match first_err {
            Some(err) => Err(err),
            None => {
                info!("Cleared persisted sort state");
                Ok(())
            }
        }
    }

    /// Drop only the sorted snapshot, leaving the rule set in place.
    pub fn discard_snapshot(&mut self) -> Result<()> {
        let key = self.keys.sorted_records.clone();
        self.store.remove(&key)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("Failed to read sort state key {}: {}", key, err);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Ignoring malformed sort state under {}: {}", key, err);
                None
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ClientDeskError,
        persistence::{MemoryStore, store::MockKeyValueStore},
        query::sorting::{SortDirection, SortField, sort_records},
    };
    use clientdesk_model::fixtures::sample_clients;
    use mockall::predicate::eq;

    fn name_desc() -> SortRuleSet {
        let mut rules = SortRuleSet::new();
        rules.add(SortField::ClientName);
        rules.set_direction(SortField::ClientName, SortDirection::Descending);
        rules
    }

    #[test]
    fn save_then_load_round_trips() {
        let clients = sample_clients();
        let rules = name_desc();
        let sorted = sort_records(&clients, &rules);

        let mut repo = SortStateRepository::new(MemoryStore::new());
        repo.save(&rules, &sorted).unwrap();

        let state = repo.load();
        assert_eq!(state.rule_set, Some(rules));
        assert_eq!(state.snapshot, Some(sorted));
    }

    #[test]
    fn corrupt_rule_set_is_absent() {
        let mut store = MemoryStore::new();
        store.set("sortOptions", "{{ definitely not json".into()).unwrap();

        let repo = SortStateRepository::new(store);
        assert_eq!(repo.load(), PersistedSortState::default());
    }

    #[test]
    fn legacy_key_is_a_fallback() {
        let mut store = MemoryStore::new();
        store
            .set(
                "sortCriteria",
                r#"[{"key":"Created At","label":"Created At","direction":"desc"}]"#.into(),
            )
            .unwrap();

        let repo = SortStateRepository::new(store);
        let rules = repo.load().rule_set.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.criteria()[0].field, SortField::CreatedAt);
        assert_eq!(rules.criteria()[0].direction, SortDirection::Descending);
    }

    #[test]
    fn primary_key_wins_over_legacy() {
        let mut store = MemoryStore::new();
        store
            .set("sortCriteria", r#"[{"key":"email","direction":"asc"}]"#.into())
            .unwrap();
        store
            .set("sortOptions", r#"[{"key":"status","direction":"desc"}]"#.into())
            .unwrap();

        let rules = SortStateRepository::new(store).load().rule_set.unwrap();
        assert_eq!(rules.criteria()[0].field, SortField::Status);
    }

    #[test]
    fn clear_removes_every_key() {
        let mut repo = SortStateRepository::new(MemoryStore::new());
        repo.save(&name_desc(), &sample_clients()).unwrap();
        repo.clear().unwrap();

        assert!(repo.store().is_empty());
        assert_eq!(repo.load(), PersistedSortState::default());
    }

    #[test]
    fn read_failures_degrade_to_absent() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|key| Err(ClientDeskError::store(key, "disk on fire")));

        let repo = SortStateRepository::new(store);
        assert_eq!(repo.load(), PersistedSortState::default());
    }

    #[test]
    fn clear_attempts_all_keys_and_reports_failure() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_remove()
            .with(eq("sortOptions"))
            .times(1)
            .returning(|key| Err(ClientDeskError::store(key, "read-only")));
        store
            .expect_remove()
            .with(eq("sortedClients"))
            .times(1)
            .returning(|_| Ok(()));
        store
            .expect_remove()
            .with(eq("sortCriteria"))
            .times(1)
            .returning(|_| Ok(()));

        let mut repo = SortStateRepository::new(store);
        assert!(matches!(repo.clear(), Err(ClientDeskError::Store { .. })));
    }

    #[test]
    fn custom_keys_are_honoured() {
        let keys = StorageKeys {
            rule_set: "rules".into(),
            sorted_records: "rows".into(),
            legacy_rule_set: "old_rules".into(),
        };
        let mut repo = SortStateRepository::with_keys(MemoryStore::new(), keys);
        repo.save(&name_desc(), &[]).unwrap();

        assert!(repo.store().get("rules").unwrap().is_some());
        assert_eq!(repo.store().get("rows").unwrap().as_deref(), Some("[]"));
        assert!(repo.store().get("sortOptions").unwrap().is_none());
    }
}
