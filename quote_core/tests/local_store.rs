use quote_core::QuoteRecord;
use quote_core::store::{
    FileStore, KeyValueStore, LAST_VIEWED_KEY, LocalStore, MemoryStore, QUOTES_KEY,
    SELECTED_CATEGORY_KEY,
};
use tempfile::TempDir;

#[test]
fn empty_medium_loads_the_default_quotes() {
    let store = LocalStore::open(MemoryStore::new()).unwrap();
    assert_eq!(store.records(), QuoteRecord::defaults().as_slice());
}

#[test]
fn corrupt_payload_is_discarded_and_treated_as_empty() {
    let mut medium = MemoryStore::new();
    medium.set(QUOTES_KEY, "{not json").unwrap();

    let store = LocalStore::open(medium.clone()).unwrap();

    assert!(store.records().is_empty());
    assert_eq!(medium.get(QUOTES_KEY).unwrap(), None);
}

#[test]
fn save_all_overwrites_the_persisted_collection() {
    let medium = MemoryStore::new();
    let mut store = LocalStore::open(medium.clone()).unwrap();

    let records = vec![QuoteRecord::new("only", "one").unwrap().with_id(1)];
    store.save_all(records.clone()).unwrap();

    let raw = medium.get(QUOTES_KEY).unwrap().unwrap();
    let persisted: Vec<QuoteRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, records);
    assert_eq!(store.records(), records.as_slice());
}

#[test]
fn append_persists_and_keeps_insertion_order() {
    let medium = MemoryStore::new();
    let mut store = LocalStore::open(medium.clone()).unwrap();
    store.save_all(Vec::new()).unwrap();

    store.append(QuoteRecord::new("first", "a").unwrap()).unwrap();
    store.append(QuoteRecord::new("second", "b").unwrap()).unwrap();

    let mut reopened = LocalStore::open(medium).unwrap();
    let texts: Vec<&str> = reopened.records().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(reopened.load_all().unwrap().len(), 2);
}

#[test]
fn extend_appends_after_records_persisted_by_another_store() {
    let medium = MemoryStore::new();
    let mut stale = LocalStore::open(medium.clone()).unwrap();
    let mut other = LocalStore::open(medium.clone()).unwrap();
    other.save_all(vec![QuoteRecord::new("other", "x").unwrap().with_id(9)]).unwrap();

    stale.append(QuoteRecord::new("mine", "y").unwrap()).unwrap();

    let texts: Vec<&str> = stale.records().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["other", "mine"]);
    assert_eq!(other.refresh().unwrap(), stale.records());
}

#[test]
fn ui_scalars_round_trip_through_the_medium() {
    let medium = MemoryStore::new();
    let mut store = LocalStore::open(medium.clone()).unwrap();

    assert_eq!(store.selected_category().unwrap(), "");
    assert_eq!(store.last_viewed_index().unwrap(), None);

    store.set_selected_category("Life").unwrap();
    store.set_last_viewed_index(2).unwrap();

    assert_eq!(medium.get(SELECTED_CATEGORY_KEY).unwrap().as_deref(), Some("Life"));
    assert_eq!(medium.get(LAST_VIEWED_KEY).unwrap().as_deref(), Some("2"));
    assert_eq!(store.last_viewed_index().unwrap(), Some(2));

    store.clear_last_viewed_index().unwrap();
    assert_eq!(store.last_viewed_index().unwrap(), None);
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = LocalStore::open(FileStore::open(dir.path()).unwrap()).unwrap();
        store
            .save_all(vec![QuoteRecord::new("kept", "disk").unwrap().with_id(4)])
            .unwrap();
        store.set_selected_category("disk").unwrap();
    }

    let store = LocalStore::open(FileStore::open(dir.path()).unwrap()).unwrap();
    assert_eq!(store.records(), &[QuoteRecord::new("kept", "disk").unwrap().with_id(4)]);
    assert_eq!(store.selected_category().unwrap(), "disk");
}

#[test]
fn file_store_treats_missing_keys_as_absent() {
    let dir = TempDir::new().unwrap();
    let mut medium = FileStore::open(dir.path().join("nested")).unwrap();

    assert_eq!(medium.get("missing").unwrap(), None);
    medium.remove("missing").unwrap();

    medium.set("k", "v").unwrap();
    assert_eq!(medium.get("k").unwrap().as_deref(), Some("v"));
    medium.remove("k").unwrap();
    assert_eq!(medium.get("k").unwrap(), None);
}

#[test]
fn corrupt_file_is_removed_on_load() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(QUOTES_KEY), "[{\"text\":").unwrap();

    let store = LocalStore::open(FileStore::open(dir.path()).unwrap()).unwrap();

    assert!(store.records().is_empty());
    assert!(!dir.path().join(QUOTES_KEY).exists());
}
