//! Layout store tests
//!
//! Loading, debounced saves, immediate writes and file-backed storage.

mod common;

use common::{item, moved};
use gridboard::model::Layout;
use gridboard::placement::default_layout;
use gridboard::store::{
    load, FileStorage, LayoutStore, MemoryStorage, Storage, LAYOUT_STORAGE_KEY, SAVE_DEBOUNCE_MS,
};

fn open_memory(storage: &MemoryStorage) -> LayoutStore {
    LayoutStore::open(
        Box::new(storage.clone()),
        LAYOUT_STORAGE_KEY,
        default_layout(),
        SAVE_DEBOUNCE_MS,
    )
}

fn stored(storage: &dyn Storage) -> Layout {
    let raw = storage.get(LAYOUT_STORAGE_KEY).expect("layout should be stored");
    serde_json::from_str(&raw).unwrap()
}

// ========================================================================
// Loading
// ========================================================================

#[test]
fn test_absent_value_loads_default() {
    let store = open_memory(&MemoryStorage::new());
    assert_eq!(store.layout(), &default_layout());
}

#[test]
fn test_corrupt_value_loads_default() {
    let storage = MemoryStorage::with_value(LAYOUT_STORAGE_KEY, "not-json");
    let store = open_memory(&storage);
    assert_eq!(store.layout(), &default_layout());
}

#[test]
fn test_wrong_shape_loads_default() {
    let storage = MemoryStorage::with_value(LAYOUT_STORAGE_KEY, r#"{"i":"chat-1"}"#);
    assert_eq!(
        load(&storage, LAYOUT_STORAGE_KEY, &default_layout()),
        default_layout()
    );
}

#[test]
fn test_stored_value_uses_short_field_names() {
    let storage = MemoryStorage::with_value(
        LAYOUT_STORAGE_KEY,
        r#"[{"i":"chat-7","x":2,"y":1,"w":4,"h":6,"minW":3,"minH":4}]"#,
    );
    let store = open_memory(&storage);
    let chat = store.layout().get("chat-7").unwrap();
    assert_eq!((chat.x, chat.y, chat.w, chat.h), (2, 1, 4, 6));
    assert_eq!((chat.min_w, chat.min_h), (3, 4));
}

#[test]
fn test_missing_constraints_default_to_zero() {
    let storage =
        MemoryStorage::with_value(LAYOUT_STORAGE_KEY, r#"[{"i":"chat-7","x":0,"y":0,"w":4,"h":6}]"#);
    let store = open_memory(&storage);
    assert_eq!(store.layout().get("chat-7").unwrap().min_w, 0);
}

#[test]
fn test_repeated_id_keeps_last_item() {
    let storage = MemoryStorage::with_value(
        LAYOUT_STORAGE_KEY,
        r#"[{"i":"chat-1","x":0,"y":0,"w":4,"h":6},{"i":"chat-1","x":4,"y":0,"w":4,"h":6}]"#,
    );
    let store = open_memory(&storage);

    assert_eq!(store.layout().len(), 1);
    assert_eq!(store.layout().get("chat-1").unwrap().x, 4);
    assert!(store
        .layout()
        .same_geometry(&Layout::new(vec![item("chat-1", 4, 0, 4, 6)])));
}

// ========================================================================
// Saving
// ========================================================================

#[test]
fn test_save_then_load_round_trip() {
    let storage = MemoryStorage::new();
    let mut store = open_memory(&storage);
    let next = moved(store.layout(), "chat-1", 8, 12);

    let rev = store.save(next.clone());
    assert!(store.flush_pending(rev));

    let reopened = open_memory(&storage);
    assert_eq!(reopened.layout(), &next);
}

#[test]
fn test_saving_same_layout_twice_writes_once() {
    let storage = MemoryStorage::new();
    let mut store = open_memory(&storage);
    let next = moved(store.layout(), "chat-1", 8, 12);

    let first = store.save(next.clone());
    store.flush_pending(first);
    let second = store.save(next.clone());
    store.flush_pending(second);

    assert_eq!(storage.write_count(), 1);
    assert_eq!(stored(&storage), next);
}

#[test]
fn test_burst_of_saves_writes_last() {
    let storage = MemoryStorage::new();
    let mut store = open_memory(&storage);

    let revisions: Vec<u64> = (0..5)
        .map(|x| store.save(moved(&default_layout(), "chat-1", x, 12)))
        .collect();
    for rev in revisions {
        store.flush_pending(rev);
    }

    assert_eq!(storage.write_count(), 1);
    assert_eq!(stored(&storage).get("chat-1").unwrap().x, 4);
}

#[test]
fn test_add_and_remove_write_immediately() {
    let storage = MemoryStorage::new();
    let mut store = open_memory(&storage);

    store.add_item(item("alert-9", 0, 18, 4, 4));
    assert_eq!(storage.write_count(), 1);
    assert!(stored(&storage).contains("alert-9"));

    assert!(store.remove_item("alert-9"));
    assert_eq!(storage.write_count(), 2);
    assert!(!stored(&storage).contains("alert-9"));
}

#[test]
fn test_reset_clears_storage_and_cancels_pending() {
    let storage = MemoryStorage::new();
    let mut store = open_memory(&storage);
    store.add_item(item("alert-9", 0, 18, 4, 4));
    let rev = store.save(moved(store.layout(), "chat-1", 8, 12));

    store.reset(None);

    assert!(!storage.contains(LAYOUT_STORAGE_KEY));
    assert!(!store.flush_pending(rev));
    assert_eq!(store.layout(), &default_layout());
}

#[test]
fn test_reset_with_override() {
    let storage = MemoryStorage::new();
    let mut store = open_memory(&storage);
    let custom = Layout::new(vec![item("chat-1", 0, 0, 12, 6)]);

    store.reset(Some(custom.clone()));
    assert_eq!(store.layout(), &custom);
}

// ========================================================================
// File storage
// ========================================================================

#[test]
fn test_file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let next = moved(&default_layout(), "agent-1", 0, 18);

    {
        let mut store = LayoutStore::open(
            Box::new(FileStorage::new(dir.path())),
            LAYOUT_STORAGE_KEY,
            default_layout(),
            SAVE_DEBOUNCE_MS,
        );
        let rev = store.save(next.clone());
        assert!(store.flush_pending(rev));
    }

    let path = FileStorage::new(dir.path()).path_for(LAYOUT_STORAGE_KEY);
    assert!(path.ends_with("now-dashboard-layout-v2.json"));
    assert!(path.exists());

    let reopened = LayoutStore::open(
        Box::new(FileStorage::new(dir.path())),
        LAYOUT_STORAGE_KEY,
        default_layout(),
        SAVE_DEBOUNCE_MS,
    );
    assert_eq!(reopened.layout(), &next);
}

#[test]
fn test_file_storage_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path().join("nested").join("storage"));
    storage.set("key", "[]").unwrap();
    assert_eq!(storage.get("key").as_deref(), Some("[]"));

    storage.remove("key").unwrap();
    assert_eq!(storage.get("key"), None);
    // Removing twice is fine
    storage.remove("key").unwrap();
}

#[test]
fn test_corrupt_file_loads_default() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    std::fs::write(storage.path_for(LAYOUT_STORAGE_KEY), "not-json").unwrap();

    let store = LayoutStore::open(
        Box::new(storage),
        LAYOUT_STORAGE_KEY,
        default_layout(),
        SAVE_DEBOUNCE_MS,
    );
    assert_eq!(store.layout(), &default_layout());
}
