//! Set up the bank with its pivot currency

use super::ports::BankRepository;
use super::UseCase;
use crate::bank::Bank;
use crate::currency::Currency;
use crate::error::{MoneyError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupBank {
    pub currency: Currency,
}

pub struct SetupBankUseCase<R: BankRepository> {
    bank_repository: R,
}

impl<R: BankRepository> SetupBankUseCase<R> {
    pub fn new(bank_repository: R) -> Self {
        Self { bank_repository }
    }
}

impl<R: BankRepository> UseCase for SetupBankUseCase<R> {
    type Command = SetupBank;
    type Output = ();

    fn invoke(&mut self, command: SetupBank) -> Result<()> {
        if self.bank_repository.exists() {
            return Err(MoneyError::BankAlreadySetup);
        }

        log::info!("Setting up bank with pivot currency {}", command.currency);
        self.bank_repository
            .save(Bank::with_pivot_currency(command.currency));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::InMemoryBankRepository;

    #[test]
    fn test_saves_new_bank() {
        let mut repository = InMemoryBankRepository::new();
        SetupBankUseCase::new(&mut repository)
            .invoke(SetupBank { currency: Currency::EUR })
            .unwrap();

        let bank = repository.get_bank().unwrap();
        assert_eq!(bank.pivot_currency(), Currency::EUR);
        assert_eq!(bank.num_rates(), 0);
    }

    #[test]
    fn test_fails_when_bank_exists() {
        let mut repository =
            InMemoryBankRepository::with_bank(Bank::with_pivot_currency(Currency::USD));
        let err = SetupBankUseCase::new(&mut repository)
            .invoke(SetupBank { currency: Currency::EUR })
            .unwrap_err();

        assert_eq!(err.to_string(), "Bank is already setup");
        assert_eq!(
            repository.get_bank().unwrap().pivot_currency(),
            Currency::USD
        );
    }
}
