#![doc(test(attr(deny(warnings))))]

//! Budget Tracker records income and expense transactions, keeps per-category
//! totals in step with the transaction log, and persists everything to a
//! local key-value store.

pub mod errors;
pub mod session;
pub mod utils;

pub use errors::TrackerError;
pub use session::Session;
pub use tracker_config::{Config, ConfigManager};
pub use tracker_core::{
    BudgetTracker, ChartData, ChartDataset, Clock, CoreError, EditForm, FixedClock,
    FormatOptions, KeyValueStore, LedgerPersistence, LedgerSummary, MemoryStore,
    SummaryService, SystemClock, TransactionPatch, TransactionRow,
};
pub use tracker_domain::{AmountInput, CategorySet, LedgerRecord, Transaction};
pub use tracker_storage_json::JsonFileStore;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter and emits a startup info log.
pub fn init() {
    init_with_filter(&Config::default_log_filter());
}

/// Initializes global tracing with `filter` unless `RUST_LOG` overrides it.
pub fn init_with_filter(filter: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(filter);
        tracing::info!("Budget Tracker tracing initialized.");
    });
}
