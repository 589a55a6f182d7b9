use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, RwLock},
};

use tracker_domain::{CategorySet, LedgerRecord};

use crate::CoreError;

/// Key holding the serialized [`LedgerRecord`].
pub const LEDGER_KEY: &str = "ledger";
/// Key holding the serialized category list.
pub const CATEGORIES_KEY: &str = "categories";

/// Abstraction over string key-value backends (browser-style local storage).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Volatile store for ephemeral sessions and tests. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CoreError::Persistence("memory store lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CoreError::Persistence("memory store lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CoreError::Persistence("memory store lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Reads and writes the two persisted records (ledger log, category list) as JSON.
pub struct LedgerPersistence {
    store: Box<dyn KeyValueStore>,
}

impl LedgerPersistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn load(&self) -> Result<Option<LedgerRecord>, CoreError> {
        match self.store.get(LEDGER_KEY)? {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, record: &LedgerRecord) -> Result<(), CoreError> {
        let json = serde_json::to_string(record)?;
        self.store.set(LEDGER_KEY, &json)
    }

    pub fn load_categories(&self) -> Result<Option<CategorySet>, CoreError> {
        match self.store.get(CATEGORIES_KEY)? {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    pub fn save_categories(&self, categories: &CategorySet) -> Result<(), CoreError> {
        let json = serde_json::to_string(categories)?;
        self.store.set(CATEGORIES_KEY, &json)
    }
}

/// Detects inconsistencies within a persisted ledger record.
pub fn record_warnings(record: &LedgerRecord, categories: &CategorySet) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unknown_categories = HashSet::new();
    let mut warnings = Vec::new();

    for txn in &record.transactions {
        if !seen.insert(txn.id) {
            warnings.push(format!("transaction id {} appears more than once", txn.id));
        }
        if txn.id > record.current_id {
            warnings.push(format!(
                "transaction id {} is above the stored counter {}",
                txn.id, record.current_id
            ));
        }
        if !categories.contains(&txn.category) && unknown_categories.insert(txn.category.as_str())
        {
            warnings.push(format!(
                "category `{}` is not in the known category list",
                txn.category
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tracker_domain::Transaction;

    use super::*;

    fn txn(id: u64, category: &str) -> Transaction {
        let date = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        Transaction::new("item", 10, category, Some(date), Some(id)).unwrap()
    }

    #[test]
    fn memory_store_clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
        other.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn persistence_round_trips_both_records() {
        let store = MemoryStore::new();
        let persistence = LedgerPersistence::new(Box::new(store.clone()));
        assert_eq!(persistence.load().unwrap(), None);
        assert_eq!(persistence.load_categories().unwrap(), None);

        let record = LedgerRecord::new(vec![txn(1, "Food"), txn(2, "Housing")], 2);
        let mut categories = CategorySet::default();
        categories.insert("Travel");
        persistence.save(&record).unwrap();
        persistence.save_categories(&categories).unwrap();

        assert_eq!(persistence.load().unwrap(), Some(record));
        assert_eq!(persistence.load_categories().unwrap(), Some(categories));
        let raw = store.get(CATEGORIES_KEY).unwrap().unwrap();
        assert!(raw.starts_with("[\"Housing\""));
    }

    #[test]
    fn corrupt_record_is_a_serde_error() {
        let store = MemoryStore::new();
        store.set(LEDGER_KEY, "{not json").unwrap();
        let persistence = LedgerPersistence::new(Box::new(store));
        let err = persistence.load().expect_err("corrupt data");
        assert!(matches!(err, CoreError::Serde(_)));
        assert!(err.is_persistence_failure());
    }

    #[test]
    fn warnings_flag_duplicates_counter_and_unknown_categories() {
        let record = LedgerRecord::new(
            vec![txn(1, "Food"), txn(1, "Food"), txn(5, "Pets"), txn(6, "Pets")],
            3,
        );
        let warnings = record_warnings(&record, &CategorySet::default());
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("more than once"));
        assert!(warnings.iter().any(|w| w.contains("above the stored counter 3")));
        assert_eq!(warnings.iter().filter(|w| w.contains("`Pets`")).count(), 1);
    }
}
