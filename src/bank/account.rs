//! Accounts and the withdrawal policy attached to each kind of account.
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::bank::types::{
    AccountId, CURRENT_SERVICE_CHARGE, Money, SAVINGS_MINIMUM_BALANCE, from_money,
};

/// The kind of an account, which selects the withdrawal policy applied to it.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Base behavior: withdrawals are subtracted without any check.
    Standard,
    /// Withdrawals must leave at least `SAVINGS_MINIMUM_BALANCE` in the account.
    Savings,
    /// Withdrawals must cover `CURRENT_SERVICE_CHARGE` on top of the amount.
    Current,
}

/// Represents a bank account.
#[derive(Debug, Clone)]
pub struct Account {
    /// The unique identifier for the account.
    id: AccountId,

    /// Selects the withdrawal policy.
    kind: AccountKind,

    /// The current balance.
    balance: Money,
}

impl Account {
    /// Creates a new account with the given opening balance.
    pub fn new(id: AccountId, kind: AccountKind, balance: Money) -> Self {
        Account { id, kind, balance }
    }

    /// Gets the account ID.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Gets the current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Deposits the specified amount into the account. The sign is not checked.
    /// The balance saturates at the bounds of `Money`.
    pub fn deposit(&mut self, amount: Money) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Withdraws the specified amount according to the account's kind.
    /// On refusal the balance is left untouched.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), WithdrawalError> {
        match self.kind {
            AccountKind::Standard => {
                self.balance = self.balance.saturating_sub(amount);
            }
            AccountKind::Savings => {
                let available = self
                    .balance
                    .checked_sub(SAVINGS_MINIMUM_BALANCE)
                    .ok_or(WithdrawalError::BelowMinimumBalance)?;
                if amount > available {
                    return Err(WithdrawalError::BelowMinimumBalance);
                }
                self.balance = self.balance.saturating_sub(amount);
            }
            AccountKind::Current => {
                let required = amount
                    .checked_add(CURRENT_SERVICE_CHARGE)
                    .ok_or(WithdrawalError::InsufficientBalance)?;
                if required > self.balance {
                    return Err(WithdrawalError::InsufficientBalance);
                }
                // Charge is added back, not deducted. Kept as the ledger has always computed it.
                self.balance = self
                    .balance
                    .saturating_sub(amount)
                    .saturating_add(CURRENT_SERVICE_CHARGE);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Number({}): Balance =  {}",
            self.id,
            from_money(self.balance)
        )
    }
}

/// Reasons a withdrawal can be refused. The messages are shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalError {
    #[error("Entered Amount Cannot Be Withdrawn!")]
    BelowMinimumBalance,
    #[error("Insufficient Balance!")]
    InsufficientBalance,
}

#[cfg(test)]
mod tests {
    use crate::bank::{Account, AccountKind, Money, WithdrawalError, to_money};

    #[test]
    fn test_savings_withdrawal() {
        let mut account = Account::new(1, AccountKind::Savings, to_money(2000.0));
        assert!(account.withdraw(to_money(500.0)).is_ok());
        assert_eq!(account.balance(), to_money(1500.0));
    }

    #[test]
    fn test_savings_withdrawal_down_to_minimum() {
        let mut account = Account::new(1, AccountKind::Savings, to_money(1500.0));
        assert!(account.withdraw(to_money(500.0)).is_ok());
        assert_eq!(account.balance(), to_money(1000.0));
    }

    #[test]
    fn test_savings_withdrawal_below_minimum() {
        let mut account = Account::new(2, AccountKind::Savings, to_money(1000.0));
        assert_eq!(
            account.withdraw(to_money(500.0)),
            Err(WithdrawalError::BelowMinimumBalance)
        );
        assert_eq!(account.balance(), to_money(1000.0));
    }

    #[test]
    fn test_current_withdrawal() {
        let mut account = Account::new(3, AccountKind::Current, to_money(1000.0));
        assert!(account.withdraw(to_money(500.0)).is_ok());
        assert_eq!(account.balance(), to_money(525.5));
    }

    #[test]
    fn test_current_withdrawal_exact_cover() {
        let mut account = Account::new(3, AccountKind::Current, to_money(525.5));
        assert!(account.withdraw(to_money(500.0)).is_ok());
        assert_eq!(account.balance(), to_money(51.0));
    }

    #[test]
    fn test_current_withdrawal_insufficient_balance() {
        let mut account = Account::new(3, AccountKind::Current, to_money(500.0));
        assert_eq!(
            account.withdraw(to_money(480.0)),
            Err(WithdrawalError::InsufficientBalance)
        );
        assert_eq!(account.balance(), to_money(500.0));
    }

    #[test]
    fn test_standard_withdrawal_is_unchecked() {
        let mut account = Account::new(4, AccountKind::Standard, to_money(100.0));
        assert!(account.withdraw(to_money(250.0)).is_ok());
        assert_eq!(account.balance(), to_money(-150.0));
    }

    #[test]
    fn test_deposit() {
        for kind in [AccountKind::Standard, AccountKind::Savings, AccountKind::Current] {
            let mut account = Account::new(1, kind, to_money(10.0));
            account.deposit(to_money(1000.25));
            assert_eq!(account.balance(), to_money(1010.25));
        }
    }

    #[test]
    fn test_negative_deposit() {
        let mut account = Account::new(1, AccountKind::Savings, to_money(2000.0));
        account.deposit(to_money(-300.0));
        assert_eq!(account.balance(), to_money(1700.0));
    }

    #[test]
    fn test_savings_negative_withdrawal_raises_balance() {
        let mut account = Account::new(1, AccountKind::Savings, to_money(1000.0));
        assert!(account.withdraw(to_money(-250.0)).is_ok());
        assert_eq!(account.balance(), to_money(1250.0));
    }

    #[test]
    fn test_huge_deposit_saturates() {
        for kind in [AccountKind::Standard, AccountKind::Savings, AccountKind::Current] {
            let mut account = Account::new(1, kind, to_money(2000.0));
            account.deposit(to_money(1e15));
            assert_eq!(account.balance(), Money::MAX);
        }
    }

    #[test]
    fn test_huge_withdrawals_do_not_overflow() {
        let mut account = Account::new(3, AccountKind::Current, to_money(1000.0));
        assert_eq!(
            account.withdraw(to_money(1e15)),
            Err(WithdrawalError::InsufficientBalance)
        );
        assert_eq!(account.balance(), to_money(1000.0));

        let mut account = Account::new(2, AccountKind::Savings, to_money(2000.0));
        assert_eq!(
            account.withdraw(Money::MAX),
            Err(WithdrawalError::BelowMinimumBalance)
        );
        assert!(account.withdraw(Money::MIN).is_ok());
        assert_eq!(account.balance(), Money::MAX);

        let mut account = Account::new(2, AccountKind::Savings, Money::MIN);
        assert_eq!(
            account.withdraw(0),
            Err(WithdrawalError::BelowMinimumBalance)
        );
        assert_eq!(account.balance(), Money::MIN);

        let mut account = Account::new(4, AccountKind::Standard, to_money(-10.0));
        assert!(account.withdraw(Money::MAX).is_ok());
        assert_eq!(account.balance(), Money::MIN);
    }

    #[test]
    fn test_display() {
        let account = Account::new(3, AccountKind::Current, to_money(525.5));
        assert_eq!(account.to_string(), "Account Number(3): Balance =  525.5");
        let account = Account::new(1, AccountKind::Savings, to_money(2000.0));
        assert_eq!(account.to_string(), "Account Number(1): Balance =  2000");
    }
}
