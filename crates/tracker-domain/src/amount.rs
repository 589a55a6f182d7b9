//! Coercion of user-supplied amounts into finite decimal values.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when an amount-like value cannot be turned into a finite number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("`{0}` is not a valid amount")]
    Unparsable(String),
    #[error("amount must be a finite number, got {0}")]
    NonFinite(f64),
}

/// An amount as supplied by a caller: either already numeric or raw form text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Coerces the input into a finite `f64`.
    pub fn parse(&self) -> Result<f64, AmountError> {
        match self {
            AmountInput::Number(value) => finite(*value),
            AmountInput::Text(raw) => {
                let trimmed = raw.trim();
                let value: f64 = trimmed
                    .parse()
                    .map_err(|_| AmountError::Unparsable(raw.clone()))?;
                finite(value)
            }
        }
    }

    /// Returns `true` for text input that carries nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        matches!(self, AmountInput::Text(raw) if raw.trim().is_empty())
    }
}

fn finite(value: f64) -> Result<f64, AmountError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AmountError::NonFinite(value))
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<i32> for AmountInput {
    fn from(value: i32) -> Self {
        AmountInput::Number(f64::from(value))
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountInput::Number(value) => write!(f, "{value}"),
            AmountInput::Text(raw) => f.write_str(raw),
        }
    }
}

/// Serde helper accepting amounts stored either as JSON numbers or numeric strings.
pub mod lenient {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::AmountInput;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(*value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = AmountInput::deserialize(deserializer)?;
        input.parse().map_err(D::Error::custom)
    }
}
