//! Wires configuration, the on-disk store and the ledger for one user session.

use std::path::{Path, PathBuf};

use tracing::info;
use tracker_config::{Config, ConfigManager};
use tracker_core::{
    transaction_rows, BudgetTracker, Clock, FormatOptions, LedgerSummary, SummaryService,
    SystemClock, TransactionRow,
};
use tracker_storage_json::JsonFileStore;

use crate::errors::Result;

/// An opened ledger together with the preferences it was opened with.
///
/// The presentation layer owns a `Session`, calls mutators on
/// [`Session::tracker_mut`] and then re-reads rows, totals and chart data.
pub struct Session {
    config: Config,
    config_manager: ConfigManager,
    storage_root: PathBuf,
    tracker: BudgetTracker,
}

impl Session {
    /// Opens the session stored under the default data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(Config::data_dir())
    }

    /// Opens the session stored under `base`, creating directories on first use.
    pub fn open(base: PathBuf) -> Result<Self> {
        Self::open_with_clock(base, Box::new(SystemClock))
    }

    /// Opens the session under `base` with an explicit time source.
    ///
    /// Installs tracing with `Config::log_filter` unless it is already set up.
    pub fn open_with_clock(base: PathBuf, clock: Box<dyn Clock>) -> Result<Self> {
        let config_manager = ConfigManager::with_base_dir(base.clone())?;
        let config = config_manager.load()?;
        crate::init_with_filter(&config.log_filter);
        let storage_root = config.resolve_storage_root_in(&base);
        let store = JsonFileStore::new(storage_root.clone())?;
        let tracker = BudgetTracker::with_clock(Box::new(store), clock)?;
        info!(
            storage = %storage_root.display(),
            transactions = tracker.transactions().len(),
            "session opened"
        );
        Ok(Self {
            config,
            config_manager,
            storage_root,
            tracker,
        })
    }

    pub fn tracker(&self) -> &BudgetTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut BudgetTracker {
        &mut self.tracker
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces and persists the display and logging preferences.
    ///
    /// A changed `storage_root` only applies to sessions opened afterwards.
    pub fn update_config(&mut self, config: Config) -> Result<()> {
        self.config_manager.save(&config)?;
        self.config = config;
        Ok(())
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            currency_symbol: self.config.currency_symbol.clone(),
            date_format: self.config.date_format.clone(),
        }
    }

    /// Table rows for the current transaction log.
    pub fn rows(&self) -> Vec<TransactionRow> {
        transaction_rows(self.tracker.transactions(), &self.format_options())
    }

    pub fn summary(&self) -> LedgerSummary {
        SummaryService::summarize(&self.tracker)
    }
}
