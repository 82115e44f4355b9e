//! In-memory repositories
//!
//! Hold the latest saved value in the process. Nothing survives a restart.

use super::ports::{BankRepository, PortfolioRepository};
use crate::bank::Bank;
use crate::portfolio::Portfolio;

#[derive(Debug, Clone, Default)]
pub struct InMemoryBankRepository {
    bank: Option<Bank>,
}

impl InMemoryBankRepository {
    /// Create an empty repository (no bank set up)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `bank`
    pub fn with_bank(bank: Bank) -> Self {
        Self { bank: Some(bank) }
    }
}

impl BankRepository for InMemoryBankRepository {
    fn exists(&self) -> bool {
        self.bank.is_some()
    }

    fn get_bank(&self) -> Option<Bank> {
        self.bank.clone()
    }

    fn save(&mut self, bank: Bank) {
        self.bank = Some(bank);
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPortfolioRepository {
    portfolio: Portfolio,
}

impl InMemoryPortfolioRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_portfolio(portfolio: Portfolio) -> Self {
        Self { portfolio }
    }
}

impl PortfolioRepository for InMemoryPortfolioRepository {
    fn get(&self) -> Portfolio {
        self.portfolio.clone()
    }

    fn save(&mut self, portfolio: Portfolio) {
        self.portfolio = portfolio;
    }
}
