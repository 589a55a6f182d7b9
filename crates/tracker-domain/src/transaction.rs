//! Domain model for a single ledger transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    amount::AmountError,
    common::{iso_millis, truncate_to_millis},
    AmountInput,
};

/// One recorded income or expense line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub description: String,
    #[serde(with = "crate::amount::lenient")]
    pub amount: f64,
    pub category: String,
}

impl Transaction {
    /// Builds a transaction, coercing `amount` into a finite number.
    ///
    /// `date` defaults to the current time when omitted. `id` defaults to `0`,
    /// which the ledger replaces with the next counter value. Surrounding
    /// whitespace is stripped from `category`.
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<AmountInput>,
        category: impl Into<String>,
        date: Option<DateTime<Utc>>,
        id: Option<u64>,
    ) -> Result<Self, AmountError> {
        let amount = amount.into().parse()?;
        Ok(Self {
            id: id.unwrap_or_default(),
            date: truncate_to_millis(date.unwrap_or_else(Utc::now)),
            description: description.into(),
            amount,
            category: category.into().trim().to_string(),
        })
    }
}
