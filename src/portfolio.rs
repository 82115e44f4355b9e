//! Multi-currency portfolio

use crate::bank::Bank;
use crate::currency::Currency;
use crate::error::{MissingExchangeRate, MoneyError, Result};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Ordered, append-only list of holdings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    holdings: Vec<Money>,
}

impl Portfolio {
    /// Create an empty portfolio
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new portfolio with `money` appended
    pub fn add(&self, money: Money) -> Portfolio {
        let mut holdings = self.holdings.clone();
        holdings.push(money);
        Portfolio { holdings }
    }

    /// Total value of all holdings in `to`
    ///
    /// Every holding is converted even after a failure, so the error lists
    /// every missing rate in holding order (duplicates included).
    pub fn evaluate(&self, bank: &Bank, to: Currency) -> Result<Money> {
        let mut total = 0.0;
        let mut missing: Vec<MissingExchangeRate> = Vec::new();

        for money in &self.holdings {
            match bank.convert(*money, to) {
                Ok(converted) => total += converted.amount,
                Err(MoneyError::MissingExchangeRate(pair)) => missing.push(pair),
                Err(other) => return Err(other),
            }
        }

        if !missing.is_empty() {
            log::warn!(
                "Portfolio evaluation in {} failed: {} missing exchange rate(s)",
                to,
                missing.len()
            );
            return Err(MoneyError::AggregateMissingRates(missing));
        }

        Ok(Money::new(total, to))
    }

    pub fn holdings(&self) -> &[Money] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

impl FromIterator<Money> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Money>>(iter: I) -> Self {
        Portfolio {
            holdings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange_rate::ExchangeRate;
    use approx::assert_relative_eq;

    fn euros(amount: f64) -> Money {
        Money::new(amount, Currency::EUR)
    }

    fn dollars(amount: f64) -> Money {
        Money::new(amount, Currency::USD)
    }

    fn wons(amount: f64) -> Money {
        Money::new(amount, Currency::KRW)
    }

    fn bank() -> Bank {
        Bank::with_pivot_currency(Currency::EUR)
            .add(ExchangeRate::from(1.2, Currency::USD).unwrap())
            .and_then(|bank| bank.add(ExchangeRate::from(1344.0, Currency::KRW).unwrap()))
            .unwrap()
    }

    #[test]
    fn test_add_is_append_only() {
        let empty = Portfolio::new();
        let one = empty.add(dollars(5.0));
        let two = one.add(euros(10.0));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.holdings(), &[dollars(5.0), euros(10.0)]);
    }

    #[test]
    fn test_empty_evaluates_to_zero() {
        let total = Portfolio::new().evaluate(&bank(), Currency::KRW).unwrap();
        assert_eq!(total, Money::zero(Currency::KRW));
    }

    #[test]
    fn test_same_currency() {
        let portfolio: Portfolio = vec![dollars(5.0), dollars(10.0)].into_iter().collect();
        assert_eq!(
            portfolio.evaluate(&bank(), Currency::USD).unwrap(),
            dollars(15.0)
        );
    }

    #[test]
    fn test_mixed_currencies() {
        let portfolio = Portfolio::new()
            .add(dollars(5.0))
            .add(euros(10.0))
            .add(euros(4.0));
        let total = portfolio.evaluate(&bank(), Currency::USD).unwrap();
        assert_eq!(total.currency, Currency::USD);
        assert_relative_eq!(total.amount, 21.8, epsilon = 1e-9);
    }

    #[test]
    fn test_collects_every_missing_rate() {
        let portfolio = Portfolio::new()
            .add(euros(1.0))
            .add(dollars(1.0))
            .add(wons(1.0));
        let bank = Bank::with_pivot_currency(Currency::EUR);

        let err = portfolio.evaluate(&bank, Currency::EUR).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing exchange rate(s): [USD->EUR],[KRW->EUR]"
        );
    }

    #[test]
    fn test_duplicates_preserved() {
        let portfolio = Portfolio::new()
            .add(dollars(1.0))
            .add(dollars(2.0));
        let bank = Bank::with_pivot_currency(Currency::EUR);

        let err = portfolio.evaluate(&bank, Currency::EUR).unwrap_err();
        assert_eq!(
            err.missing_rates(),
            vec![
                MissingExchangeRate::new(Currency::USD, Currency::EUR),
                MissingExchangeRate::new(Currency::USD, Currency::EUR),
            ]
        );
    }
}
