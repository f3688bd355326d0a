use clientdesk_core::{
    persistence::{JsonFileStore, KeyValueStore, SortStateRepository, StorageKeys},
    query::prelude::*,
    table::{ClientTableController, TableEvent, TableIntent, TableOptions},
};
use clientdesk_model::{ClientRecord, ClientType, fixtures::sample_clients};
use std::path::Path;

fn open_table(path: &Path) -> ClientTableController<JsonFileStore> {
    let store = JsonFileStore::open(path).expect("store opens");
    ClientTableController::hydrate(
        sample_clients(),
        SortStateRepository::new(store),
        TableOptions::default(),
    )
}

fn names(records: &[ClientRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

#[test]
fn applied_sort_is_restored_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let expected = {
        let mut table = open_table(&path);
        table.dispatch(TableIntent::AddSortField(SortField::ClientType));
        table.dispatch(TableIntent::AddSortField(SortField::ClientName));
        table.dispatch(TableIntent::SetSortDirection(
            SortField::ClientName,
            SortDirection::Descending,
        ));
        assert_eq!(
            table.dispatch(TableIntent::ApplySort),
            TableEvent::SortApplied { criteria: 2 }
        );
        table.visible_records()
    };

    let reopened = open_table(&path);
    assert_eq!(reopened.sort_badge(), Some(2));
    assert_eq!(names(&reopened.visible_records()), names(&expected));

    // Companies first, each group Z-A
    let rows = reopened.visible_records();
    let split = rows
        .iter()
        .position(|r| r.client_type == ClientType::Individual)
        .unwrap();
    assert!(rows[..split].iter().all(|r| r.is_company()));
    assert!(rows[split..].iter().all(|r| !r.is_company()));
}

#[test]
fn unapplied_edits_are_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut table = open_table(&path);
        table.dispatch(TableIntent::AddSortField(SortField::Email));
    }

    let reopened = open_table(&path);
    assert_eq!(reopened.sort_badge(), None);
    assert_eq!(reopened.visible_records(), sample_clients());
}

#[test]
fn clear_removes_state_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let mut table = open_table(&path);
        table.dispatch(TableIntent::AddSortField(SortField::CreatedAt));
        table.dispatch(TableIntent::ApplySort);
        table.dispatch(TableIntent::ClearSort);
    }

    let store = JsonFileStore::open(&path).unwrap();
    let keys = StorageKeys::default();
    assert!(store.get(&keys.rule_set).unwrap().is_none());
    assert!(store.get(&keys.sorted_records).unwrap().is_none());
}

#[test]
fn corrupted_state_file_falls_back_to_unsorted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, r#"{"sortOptions": "not a rule set"}"#).unwrap();

    let table = open_table(&path);
    assert!(table.state().rule_set.is_empty());
    assert_eq!(table.visible_records(), sample_clients());
}

#[test]
fn legacy_label_keyed_rules_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store
            .set(
                "sortCriteria",
                r#"[{"key":"Client Name","label":"Client Name","direction":"desc"}]"#.into(),
            )
            .unwrap();
    }

    let table = open_table(&path);
    let rules = &table.state().rule_set;
    assert_eq!(rules.criteria(), &[SortCriterion::descending(SortField::ClientName)]);
}
