mod common;

use common::{list, settle, temp_storage, TEST_DEBOUNCE};
use shoplist::model::{Settings, State, Theme};
use shoplist::mutators::ListMutators;
use shoplist::settings::SettingsManager;
use shoplist::store::{MemoryStorage, StorageBackend, Store, SETTINGS_KEY, STATE_KEY};
use std::sync::Arc;

/// Test that N rapid debounced updates produce one write holding the last snapshot.
#[test]
fn debounced_updates_coalesce() {
    let backend = Arc::new(MemoryStorage::new());
    let store: Store<State> = Store::load(STATE_KEY, backend.clone() as Arc<dyn StorageBackend>);
    let debounced = store.debounced(TEST_DEBOUNCE);

    let mut state = State::default();
    state.add_list(list("Draft", &[]));
    for n in 0..10 {
        state.shopping_lists[0].name = format!("Draft {n}");
        debounced.update(state.clone());
    }
    assert_eq!(backend.write_count(STATE_KEY), 0);

    settle();
    assert_eq!(backend.write_count(STATE_KEY), 1);
    let saved: State = serde_json::from_str(&backend.raw(STATE_KEY).unwrap()).unwrap();
    assert_eq!(saved.shopping_lists[0].name, "Draft 9");
}

/// Test that lists survive a restart on file storage.
#[test]
fn file_storage_round_trip() {
    let (_dir, storage) = temp_storage();
    {
        let store = Store::load(STATE_KEY, storage.clone() as Arc<dyn StorageBackend>);
        let mutators = ListMutators::new(store, TEST_DEBOUNCE);
        mutators.add_list(list("Groceries", &["Milk", "Eggs"]));
        mutators.rename_active_list("Weekly");
        mutators.flush();
    }

    let reloaded: Store<State> = Store::load(STATE_KEY, storage.clone() as Arc<dyn StorageBackend>);
    let state = reloaded.get();
    assert_eq!(state.active_list, Some(0));
    assert_eq!(state.shopping_lists[0].name, "Weekly");
    assert_eq!(state.shopping_lists[0].items.len(), 2);
}

/// Test that the stored JSON keeps the established shape.
#[test]
fn stored_shape_uses_camel_case_and_minus_one() {
    let (dir, storage) = temp_storage();
    let store: Store<State> = Store::load(STATE_KEY, storage as Arc<dyn StorageBackend>);
    store.update(State::default());

    let raw = std::fs::read_to_string(dir.path().join("shopping-list-state.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["activeList"], serde_json::json!(-1));
    assert!(value["shoppingLists"].as_array().unwrap().is_empty());
}

/// Test that a corrupt file loads as the default state.
#[test]
fn corrupt_file_falls_back_to_default() {
    let (dir, storage) = temp_storage();
    std::fs::write(dir.path().join("shopping-list-state.json"), "{oops").unwrap();
    let store: Store<State> = Store::load(STATE_KEY, storage as Arc<dyn StorageBackend>);
    assert_eq!(store.get(), State::default());
}

/// Test that a rejected write keeps the in-memory state.
#[test]
fn rejected_write_keeps_memory_state() {
    let backend = Arc::new(MemoryStorage::new());
    let store = Store::load(STATE_KEY, backend.clone() as Arc<dyn StorageBackend>);
    let mutators = ListMutators::new(store, TEST_DEBOUNCE);
    backend.set_reject_writes(true);

    mutators.add_list(list("Offline", &[]));
    assert_eq!(mutators.state().shopping_lists.len(), 1);
    assert!(backend.raw(STATE_KEY).is_none());
}

/// Test that an immediate save after a debounced one is not overwritten.
#[test]
fn structural_save_wins_over_older_debounced_edit() {
    let backend = Arc::new(MemoryStorage::new());
    let store = Store::load(STATE_KEY, backend.clone() as Arc<dyn StorageBackend>);
    let mutators = ListMutators::new(store, TEST_DEBOUNCE);

    mutators.add_list(list("A", &["x"]));
    mutators.rename_active_list("Renamed");
    mutators.add_list(list("B", &[]));
    settle();

    let saved: State = serde_json::from_str(&backend.raw(STATE_KEY).unwrap()).unwrap();
    assert_eq!(saved.shopping_lists.len(), 2);
    assert_eq!(saved.shopping_lists[0].name, "Renamed");
}

/// Test that settings persist under their own key.
#[test]
fn settings_are_saved_separately() {
    let (_dir, storage) = temp_storage();
    let settings = SettingsManager::new(Store::load(
        SETTINGS_KEY,
        storage.clone() as Arc<dyn StorageBackend>,
    ));
    settings.set_theme(Theme::Autumn);

    let reloaded: Store<Settings> = Store::load(SETTINGS_KEY, storage as Arc<dyn StorageBackend>);
    assert_eq!(reloaded.get().theme, Theme::Autumn);
}

/// Test that a stored zero quantity loads as 1.
#[test]
fn stored_zero_quantity_loads_as_one() {
    let raw = r#"{"shoppingLists":[{"name":"Old","items":[{"name":"Milk","quantity":0,"checked":false}]}],"activeList":0}"#;
    let backend = Arc::new(MemoryStorage::new().with_item(STATE_KEY, raw));
    let store: Store<State> = Store::load(STATE_KEY, backend as Arc<dyn StorageBackend>);
    assert_eq!(store.get().shopping_lists[0].items[0].quantity, 1);
}
