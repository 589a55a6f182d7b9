use std::{
    env,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

const HOME_ENV: &str = "BUDGET_TRACKER_HOME";
const DEFAULT_DIR_NAME: &str = ".budget_tracker";
const STORE_DIR: &str = "store";

/// User preferences for storage location, display and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the key-value store. Defaults to `<data dir>/store`.
    pub storage_root: Option<PathBuf>,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_date_format")]
    pub date_format: String,
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_root: None,
            currency_symbol: Self::default_currency_symbol(),
            date_format: Self::default_date_format(),
            log_filter: Self::default_log_filter(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_date_format() -> String {
        "%Y-%m-%d".into()
    }

    /// Enables `info` for the facade and the crates that emit ledger and storage events.
    pub fn default_log_filter() -> String {
        "budget_tracker=info,tracker_core=info,tracker_storage_json=info".into()
    }

    /// Application data directory: `$BUDGET_TRACKER_HOME`, else `~/.budget_tracker`.
    pub fn data_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_storage_root(&self) -> PathBuf {
        self.resolve_storage_root_in(&Self::data_dir())
    }

    pub fn resolve_storage_root_in(&self, base: &Path) -> PathBuf {
        match &self.storage_root {
            Some(path) => path.clone(),
            None => base.join(STORE_DIR),
        }
    }
}
