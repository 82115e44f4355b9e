//! Scenario configuration
//!
//! A scenario describes a bank (pivot currency plus rates) and a list of
//! holdings. It can be read from JSON or TOML:
//!
//! ```toml
//! [bank]
//! pivot_currency = "EUR"
//!
//! [[bank.rates]]
//! currency = "USD"
//! rate = 1.2
//!
//! [[holdings]]
//! amount = 10.0
//! currency = "USD"
//! ```

use crate::bank::Bank;
use crate::currency::Currency;
use crate::error::{MoneyError, Result};
use crate::exchange_rate::ExchangeRate;
use crate::money::Money;
use crate::portfolio::Portfolio;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One pivot-relative rate entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub currency: Currency,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankConfig {
    pub pivot_currency: Currency,
    #[serde(default)]
    pub rates: Vec<RateConfig>,
}

impl BankConfig {
    /// Build the bank, validating every rate in order
    ///
    /// A later entry for the same currency replaces an earlier one.
    pub fn build(&self) -> Result<Bank> {
        self.rates
            .iter()
            .try_fold(Bank::with_pivot_currency(self.pivot_currency), |bank, entry| {
                bank.add(ExchangeRate::from(entry.rate, entry.currency)?)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub bank: BankConfig,
    #[serde(default)]
    pub holdings: Vec<Money>,
}

impl Scenario {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| MoneyError::ConfigError(e.to_string()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from a `.json` or `.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            Some("toml") => Self::from_toml_str(&contents),
            other => Err(MoneyError::ConfigError(format!(
                "Unsupported scenario format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    pub fn portfolio(&self) -> Portfolio {
        self.holdings.iter().copied().collect()
    }
}
