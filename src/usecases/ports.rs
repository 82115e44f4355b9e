//! Repository ports used by the use cases

use crate::bank::Bank;
use crate::portfolio::Portfolio;

/// Storage for the single bank
pub trait BankRepository {
    fn exists(&self) -> bool;

    fn get_bank(&self) -> Option<Bank>;

    fn save(&mut self, bank: Bank);
}

/// Storage for the single portfolio
pub trait PortfolioRepository {
    /// Current portfolio, empty when nothing was saved yet
    fn get(&self) -> Portfolio;

    fn save(&mut self, portfolio: Portfolio);
}

impl<R: BankRepository + ?Sized> BankRepository for &mut R {
    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn get_bank(&self) -> Option<Bank> {
        (**self).get_bank()
    }

    fn save(&mut self, bank: Bank) {
        (**self).save(bank)
    }
}

impl<R: PortfolioRepository + ?Sized> PortfolioRepository for &mut R {
    fn get(&self) -> Portfolio {
        (**self).get()
    }

    fn save(&mut self, portfolio: Portfolio) {
        (**self).save(portfolio)
    }
}
