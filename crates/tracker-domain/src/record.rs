//! Persisted shapes of ledger state.

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Snapshot written under the `ledger` key: the transaction log and id counter.
///
/// Aggregates are not stored; they are rebuilt from `transactions` on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRecord {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub current_id: u64,
}

impl LedgerRecord {
    pub fn new(transactions: Vec<Transaction>, current_id: u64) -> Self {
        Self {
            transactions,
            current_id,
        }
    }

    /// Largest id present in the log, if any.
    pub fn max_id(&self) -> Option<u64> {
        self.transactions.iter().map(|txn| txn.id).max()
    }
}
