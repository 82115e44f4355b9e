//! Pivot-relative exchange rates

use crate::currency::Currency;
use crate::error::{MoneyError, Result};
use serde::Serialize;

/// How many units of `currency` one unit of the bank's pivot currency buys
///
/// Only constructible through [`ExchangeRate::from`], so `rate` is always
/// strictly positive and finite.
///
/// # Example
/// ```
/// use rusty_money::{Currency, ExchangeRate};
///
/// let usd = ExchangeRate::from(1.2, Currency::USD).unwrap();
/// assert_eq!(usd.rate(), 1.2);
/// assert!(ExchangeRate::from(0.0, Currency::USD).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExchangeRate {
    rate: f64,
    currency: Currency,
}

impl ExchangeRate {
    /// Validate and build a rate
    pub fn from(rate: f64, currency: Currency) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(MoneyError::InvalidRate { rate });
        }
        Ok(Self { rate, currency })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Rate in the other direction (`currency` -> pivot)
    pub fn reversed(&self) -> f64 {
        1.0 / self.rate
    }
}
