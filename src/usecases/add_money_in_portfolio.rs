//! Append money to the stored portfolio

use super::ports::PortfolioRepository;
use super::UseCase;
use crate::currency::Currency;
use crate::error::Result;
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddMoneyInPortfolio {
    pub amount: f64,
    pub currency: Currency,
}

pub struct AddMoneyInPortfolioUseCase<R: PortfolioRepository> {
    portfolio_repository: R,
}

impl<R: PortfolioRepository> AddMoneyInPortfolioUseCase<R> {
    pub fn new(portfolio_repository: R) -> Self {
        Self { portfolio_repository }
    }
}

impl<R: PortfolioRepository> UseCase for AddMoneyInPortfolioUseCase<R> {
    type Command = AddMoneyInPortfolio;
    type Output = ();

    fn invoke(&mut self, command: AddMoneyInPortfolio) -> Result<()> {
        let money = Money::new(command.amount, command.currency);
        let portfolio = self.portfolio_repository.get().add(money);
        log::debug!("Added {} to portfolio ({} holdings)", money, portfolio.len());
        self.portfolio_repository.save(portfolio);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::InMemoryPortfolioRepository;

    #[test]
    fn test_appends_in_order() {
        let mut repository = InMemoryPortfolioRepository::new();
        {
            let mut use_case = AddMoneyInPortfolioUseCase::new(&mut repository);
            use_case
                .invoke(AddMoneyInPortfolio { amount: 5.0, currency: Currency::USD })
                .unwrap();
            use_case
                .invoke(AddMoneyInPortfolio { amount: -2.5, currency: Currency::KRW })
                .unwrap();
        }

        assert_eq!(
            repository.get().holdings(),
            &[
                Money::new(5.0, Currency::USD),
                Money::new(-2.5, Currency::KRW)
            ]
        );
    }
}
