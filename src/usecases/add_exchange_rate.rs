//! Register or update an exchange rate on the stored bank

use super::ports::BankRepository;
use super::UseCase;
use crate::currency::Currency;
use crate::error::{MoneyError, Result};
use crate::exchange_rate::ExchangeRate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddExchangeRate {
    pub rate: f64,
    pub currency: Currency,
}

pub struct AddExchangeRateUseCase<R: BankRepository> {
    bank_repository: R,
}

impl<R: BankRepository> AddExchangeRateUseCase<R> {
    pub fn new(bank_repository: R) -> Self {
        Self { bank_repository }
    }
}

impl<R: BankRepository> UseCase for AddExchangeRateUseCase<R> {
    type Command = AddExchangeRate;
    type Output = ();

    fn invoke(&mut self, command: AddExchangeRate) -> Result<()> {
        let exchange_rate = ExchangeRate::from(command.rate, command.currency)?;
        let bank = self
            .bank_repository
            .get_bank()
            .ok_or(MoneyError::NoBankDefined)?;

        let updated = bank.add(exchange_rate)?;
        self.bank_repository.save(updated);
        log::info!("Exchange rate for {} set to {}", command.currency, command.rate);
        Ok(())
    }
}
