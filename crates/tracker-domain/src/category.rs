//! Known category names offered to the user when recording transactions.

use serde::{Deserialize, Serialize};

/// Categories every fresh ledger starts with.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Housing",
    "Transportation",
    "Food",
    "Entertainment",
    "Utilities",
    "Miscellaneous",
];

/// Ordered, duplicate-free list of category names.
///
/// Membership is advisory: transactions may carry labels absent from this list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    pub fn new(names: Vec<String>) -> Self {
        let mut set = Self(Vec::with_capacity(names.len()));
        for name in names {
            set.insert(&name);
        }
        set
    }

    /// Appends `name` (trimmed) unless it is blank or already known.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|known| known == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self(DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_seeded_in_order() {
        let set = CategorySet::default();
        assert_eq!(set.len(), 6);
        assert_eq!(set.as_slice()[0], "Housing");
        assert_eq!(set.as_slice()[5], "Miscellaneous");
    }

    #[test]
    fn insert_skips_blank_and_duplicate_names() {
        let mut set = CategorySet::default();
        assert!(!set.insert("   "));
        assert!(!set.insert("Food"));
        assert!(set.insert("  Travel "));
        assert!(set.contains("Travel"));
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn serializes_as_plain_list() {
        let set = CategorySet::new(vec!["Food".into(), "Food".into(), "Gifts".into()]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Food","Gifts"]"#);
    }
}
