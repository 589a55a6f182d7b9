use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::tempdir;
use tracker_core::{
    BudgetTracker, FixedClock, KeyValueStore, LedgerPersistence, TransactionPatch,
    CATEGORIES_KEY, LEDGER_KEY,
};
use tracker_domain::{CategorySet, LedgerRecord, Transaction};
use tracker_storage_json::JsonFileStore;

fn fixed_clock() -> Box<FixedClock> {
    Box::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap(),
    ))
}

#[test]
fn json_store_sets_gets_and_removes_keys() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("store")).expect("create store");

    assert_eq!(store.get(LEDGER_KEY).expect("get missing"), None);
    store.set(LEDGER_KEY, "{\"currentId\":0}").expect("set");
    assert_eq!(
        store.get(LEDGER_KEY).expect("get").as_deref(),
        Some("{\"currentId\":0}")
    );
    let path = store.path_for(LEDGER_KEY);
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());

    store.remove(LEDGER_KEY).expect("remove");
    assert!(!path.exists());
    store.remove(LEDGER_KEY).expect("remove twice");
}

#[test]
fn json_store_lists_only_json_documents() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    store.set(CATEGORIES_KEY, "[]").expect("set categories");
    store.set(LEDGER_KEY, "{}").expect("set ledger");
    fs::write(dir.path().join("notes.txt"), "ignored").expect("write stray file");
    fs::create_dir_all(dir.path().join("nested.json")).expect("create stray dir");

    assert_eq!(store.keys().expect("keys"), vec!["categories", "ledger"]);
}

#[test]
fn persistence_round_trips_through_files() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    let persistence = LedgerPersistence::new(Box::new(store.clone()));

    let date = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let record = LedgerRecord::new(
        vec![
            Transaction::new("Rent", 1200, "Housing", Some(date), Some(1)).unwrap(),
            Transaction::new("Coffee", "4.20", "Food", Some(date), Some(3)).unwrap(),
        ],
        3,
    );
    persistence.save(&record).expect("save record");
    let mut categories = CategorySet::default();
    categories.insert("Gifts");
    persistence
        .save_categories(&categories)
        .expect("save categories");

    assert_eq!(persistence.load().expect("load"), Some(record));
    assert_eq!(
        persistence.load_categories().expect("load categories"),
        Some(categories)
    );

    let raw = fs::read_to_string(store.path_for(LEDGER_KEY)).expect("read ledger file");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(json["currentId"], 3);
    assert_eq!(json["transactions"][0]["date"], "2024-06-01T12:00:00.000Z");
}

#[test]
fn tracker_state_survives_a_restart() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");
    {
        let store = JsonFileStore::new(root.clone()).expect("create store");
        let mut tracker =
            BudgetTracker::with_clock(Box::new(store), fixed_clock()).expect("open tracker");
        tracker.create("Rent", 1200, "Housing").expect("create rent");
        tracker.create("Coffee", 5, "Food").expect("create coffee");
        tracker
            .update(2, TransactionPatch::new().amount("6.5"))
            .expect("update coffee");
        tracker.add_category("Travel");
    }

    let store = JsonFileStore::new(root).expect("reopen store");
    let tracker = BudgetTracker::with_clock(Box::new(store), fixed_clock()).expect("reopen");
    assert_eq!(tracker.list().len(), 2);
    assert_eq!(tracker.current_id(), 2);
    assert_eq!(tracker.total_income(), 1206.5);
    assert_eq!(tracker.aggregate_by_category().get("Food"), Some(&6.5));
    assert!(tracker.categories().contains("Travel"));
    assert_eq!(
        tracker.find_by_id(1).map(|txn| txn.date),
        Some(Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap())
    );
}

#[test]
fn write_into_missing_directory_fails_without_panicking() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");
    let store = JsonFileStore::new(root.clone()).expect("create store");
    fs::remove_dir_all(&root).expect("remove root");
    fs::write(&root, "not a directory").expect("block root with a file");

    let err = store.set(LEDGER_KEY, "{}").expect_err("write should fail");
    assert!(err.is_persistence_failure());
}
