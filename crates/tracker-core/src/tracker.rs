//! The ledger aggregate: transaction log, per-category totals, and persistence hooks.

use std::collections::BTreeMap;

use tracing::{debug, error, info, warn};
use tracker_domain::{AmountInput, CategorySet, LedgerRecord, Transaction};

use crate::{
    chart_service::{ChartData, ChartService},
    storage::{record_warnings, KeyValueStore, LedgerPersistence},
    time::{Clock, SystemClock},
    CoreError,
};

/// Sparse set of field changes applied by [`BudgetTracker::update`].
///
/// Blank descriptions, blank categories and amounts that fail to parse leave
/// the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub amount: Option<AmountInput>,
    pub category: Option<String>,
}

impl TransactionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn amount(mut self, amount: impl Into<AmountInput>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Owns every transaction of a session together with the cached aggregates
/// derived from them.
///
/// `expenses_by_category[c]` always equals the sum of amounts of live
/// transactions in `c`; categories whose sum is zero or negative are absent.
/// Every mutation writes the ledger record back to the store before returning.
pub struct BudgetTracker {
    record: LedgerRecord,
    expenses_by_category: BTreeMap<String, f64>,
    income: f64,
    expenses_total: f64,
    categories: CategorySet,
    persistence: LedgerPersistence,
    clock: Box<dyn Clock>,
    ledger_error: Option<CoreError>,
    categories_error: Option<CoreError>,
    categories_dirty: bool,
}

impl BudgetTracker {
    /// Opens a tracker over `store`, hydrating any previously saved state.
    pub fn open(store: Box<dyn KeyValueStore>) -> Result<Self, CoreError> {
        Self::with_clock(store, Box::new(SystemClock))
    }

    /// Same as [`BudgetTracker::open`] with an explicit time source.
    pub fn with_clock(
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, CoreError> {
        let mut tracker = Self {
            record: LedgerRecord::default(),
            expenses_by_category: BTreeMap::new(),
            income: 0.0,
            expenses_total: 0.0,
            categories: CategorySet::default(),
            persistence: LedgerPersistence::new(store),
            clock,
            ledger_error: None,
            categories_error: None,
            categories_dirty: false,
        };
        tracker.load_categories()?;
        tracker.load_transactions()?;
        Ok(tracker)
    }

    /// Records a new transaction dated now and returns it.
    ///
    /// Fails with [`CoreError::IdsExhausted`] once the counter has reached
    /// `u64::MAX`; no state changes in that case.
    pub fn create(
        &mut self,
        description: impl Into<String>,
        amount: impl Into<AmountInput>,
        category: impl Into<String>,
    ) -> Result<Transaction, CoreError> {
        let id = self
            .record
            .current_id
            .checked_add(1)
            .ok_or(CoreError::IdsExhausted)?;
        let transaction =
            Transaction::new(description, amount, category, Some(self.clock.now()), Some(id))?;
        self.record.current_id = id;
        self.record.transactions.push(transaction.clone());
        self.refresh_category(&transaction.category);
        self.update_income_and_expenses();
        debug!(
            id,
            category = %transaction.category,
            amount = transaction.amount,
            "transaction created"
        );
        self.save_transactions();
        Ok(transaction)
    }

    /// Applies the supplied fields of `patch` to transaction `id`.
    pub fn update(&mut self, id: u64, patch: TransactionPatch) -> Result<Transaction, CoreError> {
        let index = self.position(id).ok_or(CoreError::NotFound(id))?;

        let amount = patch.amount.as_ref().and_then(|input| match input.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                if !input.is_blank() {
                    warn!(id, "ignoring amount in update: {err}");
                }
                None
            }
        });
        let description = patch.description.filter(|value| !value.trim().is_empty());
        let category = patch
            .category
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let transaction = &mut self.record.transactions[index];
        let previous_category = transaction.category.clone();
        if let Some(description) = description {
            transaction.description = description;
        }
        if let Some(amount) = amount {
            transaction.amount = amount;
        }
        if let Some(category) = category {
            transaction.category = category;
        }
        let updated = transaction.clone();

        self.refresh_category(&previous_category);
        if updated.category != previous_category {
            self.refresh_category(&updated.category);
        }
        self.update_income_and_expenses();
        debug!(
            id,
            category = %updated.category,
            amount = updated.amount,
            "transaction updated"
        );
        self.save_transactions();
        Ok(updated)
    }

    /// Removes transaction `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: u64) {
        let Some(index) = self.position(id) else {
            debug!(id, "delete ignored for unknown transaction");
            return;
        };
        let removed = self.record.transactions.remove(index);
        self.refresh_category(&removed.category);
        self.update_income_and_expenses();
        debug!(id, category = %removed.category, "transaction deleted");
        self.save_transactions();
    }

    /// Snapshot of the transaction log in insertion order.
    pub fn list(&self) -> Vec<Transaction> {
        self.record.transactions.clone()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.record.transactions
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Transaction> {
        self.record.transactions.iter().find(|txn| txn.id == id)
    }

    /// Snapshot of the per-category totals.
    pub fn aggregate_by_category(&self) -> BTreeMap<String, f64> {
        self.expenses_by_category.clone()
    }

    /// Adds `name` to the known categories and persists the list. Returns
    /// `false` when the name is blank or already known.
    pub fn add_category(&mut self, name: &str) -> bool {
        if !self.categories.insert(name) {
            return false;
        }
        debug!(category = name.trim(), "category added");
        self.categories_dirty = true;
        self.save_categories();
        true
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn total_income(&self) -> f64 {
        self.income
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses_total
    }

    /// Last id handed out; never decreases.
    pub fn current_id(&self) -> u64 {
        self.record.current_id
    }

    /// Chart projection of the current aggregate map.
    pub fn chart_data(&self) -> ChartData {
        ChartService::chart_data(&self.expenses_by_category)
    }

    /// Outstanding write failure, if either persisted record is behind memory.
    ///
    /// The ledger and category records are tracked separately: an error is
    /// cleared only once the record that failed has been written again.
    pub fn last_persistence_error(&self) -> Option<&CoreError> {
        self.ledger_error.as_ref().or(self.categories_error.as_ref())
    }

    /// Whether the category list still has to be written to the store.
    pub fn has_unsaved_categories(&self) -> bool {
        self.categories_dirty
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.record.transactions.iter().position(|txn| txn.id == id)
    }

    /// Recomputes one category entry from the log, dropping it when the sum is not positive.
    fn refresh_category(&mut self, category: &str) {
        let sum: f64 = self
            .record
            .transactions
            .iter()
            .filter(|txn| txn.category == category)
            .map(|txn| txn.amount)
            .sum();
        if sum > 0.0 {
            self.expenses_by_category.insert(category.to_string(), sum);
        } else {
            self.expenses_by_category.remove(category);
        }
    }

    /// Rebuilds the whole aggregate map by replaying the log.
    fn update_expenses(&mut self) {
        let mut sums: BTreeMap<String, f64> = BTreeMap::new();
        for txn in &self.record.transactions {
            *sums.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
        }
        sums.retain(|_, sum| *sum > 0.0);
        self.expenses_by_category = sums;
    }

    fn update_income_and_expenses(&mut self) {
        self.income = self.record.transactions.iter().map(|txn| txn.amount).sum();
        self.expenses_total = self.expenses_by_category.values().sum();
    }

    fn load_transactions(&mut self) -> Result<(), CoreError> {
        let Some(mut record) = self.persistence.load()? else {
            return Ok(());
        };
        for warning in record_warnings(&record, &self.categories) {
            warn!("ledger record: {warning}");
        }
        if let Some(max_id) = record.max_id() {
            record.current_id = record.current_id.max(max_id);
        }
        self.record = record;
        self.update_expenses();
        self.update_income_and_expenses();
        info!(
            transactions = self.record.transactions.len(),
            current_id = self.record.current_id,
            "ledger hydrated"
        );
        Ok(())
    }

    fn load_categories(&mut self) -> Result<(), CoreError> {
        if let Some(categories) = self.persistence.load_categories()? {
            self.categories = categories;
        }
        Ok(())
    }

    /// Writes the ledger record, then retries a category list left unsaved by
    /// an earlier failure.
    fn save_transactions(&mut self) {
        match self.persistence.save(&self.record) {
            Ok(()) => self.ledger_error = None,
            Err(err) => {
                error!("failed to persist ledger, keeping in-memory changes: {err}");
                self.ledger_error = Some(err);
            }
        }
        if self.categories_dirty {
            self.save_categories();
        }
    }

    fn save_categories(&mut self) {
        match self.persistence.save_categories(&self.categories) {
            Ok(()) => {
                self.categories_dirty = false;
                self.categories_error = None;
            }
            Err(err) => {
                error!("failed to persist category list, will retry on next change: {err}");
                self.categories_error = Some(err);
            }
        }
    }
}
