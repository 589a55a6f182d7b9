//! tracker-domain
//!
//! Pure domain models (Transaction, category list, persisted records).
//! No I/O, no storage, no presentation. Only data types and coercion rules.

pub mod amount;
pub mod category;
pub mod common;
pub mod record;
pub mod transaction;

pub use amount::*;
pub use category::*;
pub use common::*;
pub use record::*;
pub use transaction::*;
