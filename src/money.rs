//! Monetary amounts

use crate::currency::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in a single currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in `currency`
    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    pub fn times(&self, times: f64) -> Money {
        Money::new(self.amount * times, self.currency)
    }

    pub fn divide(&self, divisor: f64) -> Money {
        Money::new(self.amount / divisor, self.currency)
    }

    pub fn has_currency(&self, currency: Currency) -> bool {
        self.currency == currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
