//! Seeds balance

use crate::error::{ActionError, ActionResult};

/// A screen-local Seeds balance. Never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wallet {
    balance: u32,
}

impl Wallet {
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Seeds still missing to afford `cost`, zero when affordable
    pub fn shortfall(&self, cost: u32) -> u32 {
        cost.saturating_sub(self.balance)
    }

    /// Deduct `cost`; the balance is untouched on failure
    pub fn spend(&mut self, cost: u32) -> ActionResult<()> {
        let short = self.shortfall(cost);
        if short > 0 {
            return Err(ActionError::InsufficientSeeds { short });
        }
        self.balance -= cost;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_and_credit() {
        let mut wallet = Wallet::new(100);
        wallet.spend(30).unwrap();
        wallet.credit(5);
        assert_eq!(wallet.balance(), 75);
        wallet.spend(75).unwrap();
        assert_eq!(wallet.balance(), 0);
    }

    #[test]
    fn test_overspend_is_rejected() {
        let mut wallet = Wallet::new(20);
        assert_eq!(wallet.spend(50), Err(ActionError::InsufficientSeeds { short: 30 }));
        assert_eq!(wallet.balance(), 20);
    }

    #[test]
    fn test_credit_saturates() {
        let mut wallet = Wallet::new(u32::MAX - 1);
        wallet.credit(10);
        assert_eq!(wallet.balance(), u32::MAX);
    }
}
