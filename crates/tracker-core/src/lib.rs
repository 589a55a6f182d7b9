//! tracker-core
//!
//! Ledger aggregate, persistence adapter, and presentation projections.
//! Depends on tracker-domain. No terminal I/O, no direct filesystem access.

pub mod chart_service;
pub mod error;
pub mod format;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod tracker;

pub use chart_service::*;
pub use error::CoreError;
pub use format::*;
pub use storage::*;
pub use summary_service::*;
pub use time::*;
pub use tracker::*;
