//! Application use cases
//!
//! Each use case takes a command, loads state through the repository ports,
//! runs the domain operation and saves the result.
//!
//! # Components
//!
//! - **ports**: `BankRepository` and `PortfolioRepository` traits
//! - **in_memory**: in-process repository implementations
//! - **setup_bank**, **add_exchange_rate**, **add_money_in_portfolio**,
//!   **evaluate_portfolio**: the use cases themselves
//!
//! # Example
//!
//! ```rust
//! use rusty_money::usecases::{
//!     AddExchangeRate, AddExchangeRateUseCase, AddMoneyInPortfolio,
//!     AddMoneyInPortfolioUseCase, EvaluatePortfolio, EvaluatePortfolioUseCase,
//!     InMemoryBankRepository, InMemoryPortfolioRepository, SetupBank, SetupBankUseCase,
//!     UseCase,
//! };
//! use rusty_money::Currency;
//!
//! let mut banks = InMemoryBankRepository::new();
//! let mut portfolios = InMemoryPortfolioRepository::new();
//!
//! SetupBankUseCase::new(&mut banks)
//!     .invoke(SetupBank { currency: Currency::EUR })
//!     .unwrap();
//! AddExchangeRateUseCase::new(&mut banks)
//!     .invoke(AddExchangeRate { rate: 1.2, currency: Currency::USD })
//!     .unwrap();
//! AddMoneyInPortfolioUseCase::new(&mut portfolios)
//!     .invoke(AddMoneyInPortfolio { amount: 10.0, currency: Currency::EUR })
//!     .unwrap();
//!
//! let result = EvaluatePortfolioUseCase::new(&banks, &portfolios)
//!     .invoke(EvaluatePortfolio { currency: Currency::USD })
//!     .unwrap();
//! assert_eq!(result.amount, 12.0);
//! ```

pub mod add_exchange_rate;
pub mod add_money_in_portfolio;
pub mod evaluate_portfolio;
pub mod in_memory;
pub mod ports;
pub mod setup_bank;

use crate::error::Result;

pub use add_exchange_rate::{AddExchangeRate, AddExchangeRateUseCase};
pub use add_money_in_portfolio::{AddMoneyInPortfolio, AddMoneyInPortfolioUseCase};
pub use evaluate_portfolio::{EvaluatePortfolio, EvaluatePortfolioUseCase, EvaluationResult};
pub use in_memory::{InMemoryBankRepository, InMemoryPortfolioRepository};
pub use ports::{BankRepository, PortfolioRepository};
pub use setup_bank::{SetupBank, SetupBankUseCase};

/// A single application operation driven by a command
pub trait UseCase {
    type Command;
    type Output;

    fn invoke(&mut self, command: Self::Command) -> Result<Self::Output>;
}
