//! Error types for rusty_money

use crate::currency::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A conversion the bank has no path for
///
/// Rendered as `"{from}->{to}"`, e.g. `EUR->KRW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissingExchangeRate {
    pub from: Currency,
    pub to: Currency,
}

impl MissingExchangeRate {
    pub fn new(from: Currency, to: Currency) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for MissingExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Main error type for rusty_money
#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Exchange rate should be greater than 0.")]
    InvalidRate { rate: f64 },

    #[error("Cannot add an exchange rate for the pivot currency.")]
    PivotCurrencyConflict { currency: Currency },

    #[error("{0}")]
    MissingExchangeRate(MissingExchangeRate),

    #[error("Missing exchange rate(s): {}", bracketed(.0))]
    AggregateMissingRates(Vec<MissingExchangeRate>),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("No bank defined")]
    NoBankDefined,

    #[error("Bank is already setup")]
    BankAlreadySetup,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl MoneyError {
    /// Missing pairs carried by this error, in encounter order
    pub fn missing_rates(&self) -> Vec<MissingExchangeRate> {
        match self {
            MoneyError::MissingExchangeRate(missing) => vec![*missing],
            MoneyError::AggregateMissingRates(missing) => missing.clone(),
            _ => Vec::new(),
        }
    }
}

impl From<MissingExchangeRate> for MoneyError {
    fn from(missing: MissingExchangeRate) -> Self {
        MoneyError::MissingExchangeRate(missing)
    }
}

impl From<toml::de::Error> for MoneyError {
    fn from(err: toml::de::Error) -> Self {
        MoneyError::ConfigError(err.to_string())
    }
}

fn bracketed(missing: &[MissingExchangeRate]) -> String {
    missing
        .iter()
        .map(|pair| format!("[{}]", pair))
        .collect::<Vec<_>>()
        .join(",")
}

/// Result type alias for rusty_money operations
pub type Result<T> = std::result::Result<T, MoneyError>;
