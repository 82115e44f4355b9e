//! Evaluate the stored portfolio with the stored bank

use super::ports::{BankRepository, PortfolioRepository};
use super::UseCase;
use crate::currency::Currency;
use crate::error::{MoneyError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatePortfolio {
    pub currency: Currency,
}

/// Portfolio total at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub evaluated_at: DateTime<Utc>,
    pub amount: f64,
    pub currency: Currency,
}

/// Read-only: borrows both repositories
pub struct EvaluatePortfolioUseCase<'a, B: BankRepository, P: PortfolioRepository> {
    bank_repository: &'a B,
    portfolio_repository: &'a P,
}

impl<'a, B: BankRepository, P: PortfolioRepository> EvaluatePortfolioUseCase<'a, B, P> {
    pub fn new(bank_repository: &'a B, portfolio_repository: &'a P) -> Self {
        Self {
            bank_repository,
            portfolio_repository,
        }
    }
}

impl<'a, B: BankRepository, P: PortfolioRepository> UseCase for EvaluatePortfolioUseCase<'a, B, P> {
    type Command = EvaluatePortfolio;
    type Output = EvaluationResult;

    fn invoke(&mut self, command: EvaluatePortfolio) -> Result<EvaluationResult> {
        let bank = self
            .bank_repository
            .get_bank()
            .ok_or(MoneyError::NoBankDefined)?;

        let total = self
            .portfolio_repository
            .get()
            .evaluate(&bank, command.currency)?;

        Ok(EvaluationResult {
            evaluated_at: Utc::now(),
            amount: total.amount,
            currency: total.currency,
        })
    }
}
