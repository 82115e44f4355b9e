//! Pivot-currency bank
//!
//! A [`Bank`] stores one [`ExchangeRate`] per non-pivot currency, each expressed
//! against the pivot. Any two known currencies can then be converted either
//! directly (one side is the pivot) or by composing two direct conversions
//! through the pivot.

use crate::currency::Currency;
use crate::error::{MissingExchangeRate, MoneyError, Result};
use crate::exchange_rate::ExchangeRate;
use crate::money::Money;
use hashbrown::HashMap;

/// Immutable set of pivot-relative exchange rates
///
/// # Example
/// ```
/// use rusty_money::{Bank, Currency, ExchangeRate, Money};
///
/// let bank = Bank::with_pivot_currency(Currency::EUR)
///     .add(ExchangeRate::from(1.2, Currency::USD).unwrap())
///     .unwrap();
///
/// let dollars = bank.convert(Money::new(10.0, Currency::EUR), Currency::USD).unwrap();
/// assert_eq!(dollars, Money::new(12.0, Currency::USD));
/// ```
#[derive(Debug, Clone)]
pub struct Bank {
    pivot_currency: Currency,
    /// Keyed by the non-pivot currency
    rates: HashMap<Currency, ExchangeRate>,
}

impl Bank {
    /// Create a bank with no rates
    pub fn with_pivot_currency(currency: Currency) -> Self {
        Self {
            pivot_currency: currency,
            rates: HashMap::new(),
        }
    }

    /// Return a new bank with `exchange_rate` inserted, replacing any previous
    /// rate for the same currency
    pub fn add(&self, exchange_rate: ExchangeRate) -> Result<Bank> {
        if self.is_pivot(exchange_rate.currency()) {
            return Err(MoneyError::PivotCurrencyConflict {
                currency: exchange_rate.currency(),
            });
        }

        let mut rates = self.rates.clone();
        if let Some(previous) = rates.insert(exchange_rate.currency(), exchange_rate) {
            log::debug!(
                "Replacing {} rate {} with {}",
                previous.currency(),
                previous.rate(),
                exchange_rate.rate()
            );
        }

        Ok(Bank {
            pivot_currency: self.pivot_currency,
            rates,
        })
    }

    /// Convert `money` into `to`
    ///
    /// Rules are tried in order: identity, direct (one side is the pivot),
    /// through the pivot. Fails with [`MoneyError::MissingExchangeRate`] when
    /// none applies.
    pub fn convert(&self, money: Money, to: Currency) -> Result<Money> {
        if money.has_currency(to) {
            log::trace!("Identity conversion of {}", money);
            return Ok(money);
        }

        if let Some(converted) = self.convert_directly(money, to) {
            log::trace!("Direct conversion {} -> {}", money, converted);
            return Ok(converted);
        }

        if let Some(converted) = self.convert_through_pivot(money, to) {
            log::trace!(
                "Conversion through {} {} -> {}",
                self.pivot_currency,
                money,
                converted
            );
            return Ok(converted);
        }

        let missing = MissingExchangeRate::new(money.currency, to);
        log::debug!("No exchange rate for {}", missing);
        Err(missing.into())
    }

    pub fn pivot_currency(&self) -> Currency {
        self.pivot_currency
    }

    /// Whether a rate is stored for `currency`
    pub fn has_rate(&self, currency: Currency) -> bool {
        self.rates.contains_key(&currency)
    }

    pub fn rate_for(&self, currency: Currency) -> Option<ExchangeRate> {
        self.rates.get(&currency).copied()
    }

    /// Whether [`Bank::convert`] would succeed for this pair
    pub fn can_convert(&self, from: Currency, to: Currency) -> bool {
        from == to || (self.is_known(from) && self.is_known(to))
    }

    /// Number of stored rates
    pub fn num_rates(&self) -> usize {
        self.rates.len()
    }

    fn is_pivot(&self, currency: Currency) -> bool {
        currency == self.pivot_currency
    }

    fn is_known(&self, currency: Currency) -> bool {
        self.is_pivot(currency) || self.has_rate(currency)
    }

    fn convert_directly(&self, money: Money, to: Currency) -> Option<Money> {
        if self.is_pivot(money.currency) {
            let rate = self.rates.get(&to)?;
            Some(Money::new(money.amount * rate.rate(), to))
        } else if self.is_pivot(to) {
            let rate = self.rates.get(&money.currency)?;
            Some(Money::new(money.amount * rate.reversed(), to))
        } else {
            None
        }
    }

    fn convert_through_pivot(&self, money: Money, to: Currency) -> Option<Money> {
        if !self.has_rate(money.currency) || !self.has_rate(to) {
            return None;
        }
        let in_pivot = self.convert_directly(money, self.pivot_currency)?;
        self.convert_directly(in_pivot, to)
    }
}
