//! # rusty_money
//!
//! Multi-currency money arithmetic built around a pivot-currency bank.
//!
//! A [`Bank`] stores exchange rates expressed against a single pivot currency
//! and converts between any two currencies it knows, directly or through the
//! pivot. A [`Portfolio`] sums holdings in any currency and, when rates are
//! missing, reports every missing conversion instead of stopping at the first.
//!
//! ## Example
//!
//! ```rust
//! use rusty_money::prelude::*;
//!
//! let bank = Bank::with_pivot_currency(Currency::EUR)
//!     .add(ExchangeRate::from(1.2, Currency::USD)?)?
//!     .add(ExchangeRate::from(1344.0, Currency::KRW)?)?;
//!
//! let portfolio = Portfolio::new()
//!     .add(Money::new(5.0, Currency::USD))
//!     .add(Money::new(10.0, Currency::EUR));
//!
//! let total = portfolio.evaluate(&bank, Currency::USD)?;
//! assert_eq!(total, Money::new(17.0, Currency::USD));
//! # Ok::<(), rusty_money::MoneyError>(())
//! ```

pub mod bank;
pub mod config;
pub mod currency;
pub mod error;
pub mod exchange_rate;
pub mod money;
pub mod portfolio;
pub mod usecases;

pub use bank::Bank;
pub use currency::Currency;
pub use error::{MissingExchangeRate, MoneyError, Result};
pub use exchange_rate::ExchangeRate;
pub use money::Money;
pub use portfolio::Portfolio;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::bank::Bank;
    pub use crate::config::{BankConfig, RateConfig, Scenario};
    pub use crate::currency::Currency;
    pub use crate::error::{MissingExchangeRate, MoneyError, Result};
    pub use crate::exchange_rate::ExchangeRate;
    pub use crate::money::Money;
    pub use crate::portfolio::Portfolio;
    pub use crate::usecases::UseCase;
}
