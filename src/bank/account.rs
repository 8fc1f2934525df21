use tracing::warn;

use super::error::{DepositError, WithdrawalError};
use crate::Amount;
use crate::model::{AccountId, TransactionKind, TransactionRecord};

/// A bank account with its balance and deposit/withdrawal history.
///
/// Only created through [`Bank::create_account`](super::Bank::create_account).
/// An account handed back by [`Bank::close_account`](super::Bank::close_account)
/// keeps its last state and stays usable on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: String,
    balance: Amount,
    transactions: Vec<TransactionRecord>,
}

impl Account {
    pub(crate) fn new(id: AccountId, name: impl Into<String>, balance: Amount) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// History in insertion order.
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Credit `amount` and record a deposit. Rejects non-positive amounts.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), DepositError> {
        if !amount.is_positive() {
            return Err(DepositError::InvalidAmount(self.id, amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(DepositError::Overflow(self.id, self.balance, amount))?;
        self.transactions
            .push(TransactionRecord::new(TransactionKind::Deposit, amount));

        Ok(())
    }

    /// Debit `amount` and record a withdrawal.
    ///
    /// Only overdrafts are rejected: zero and negative amounts go through,
    /// and a negative one raises the balance (failing if that overflows).
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), WithdrawalError> {
        if amount > self.balance {
            return Err(WithdrawalError::InsufficientFunds(
                self.id,
                self.balance,
                amount,
            ));
        }

        let balance = self
            .balance
            .checked_sub(amount)
            .ok_or(WithdrawalError::Overflow(self.id, self.balance, amount))?;

        if !amount.is_positive() {
            warn!(
                account = self.id,
                amount = %amount,
                "withdrawal of non-positive amount accepted"
            );
        }

        self.balance = balance;
        self.transactions
            .push(TransactionRecord::new(TransactionKind::Withdrawal, amount));

        Ok(())
    }

    /// One `"<Kind>: $<amount>"` line per transaction, newline separated.
    pub fn statement(&self) -> String {
        self.transactions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn set_balance(&mut self, balance: Amount) {
        self.balance = balance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(value: i64) -> Amount {
        Amount::from_units(value).unwrap()
    }

    fn account(balance: i64) -> Account {
        Account::new(1, "John Doe", units(balance))
    }

    #[test]
    fn new_account_has_empty_history() {
        let account = account(1000);
        assert_eq!(account.id(), 1);
        assert_eq!(account.name(), "John Doe");
        assert_eq!(account.balance(), units(1000));
        assert!(account.transactions().is_empty());
        assert_eq!(account.statement(), "");
    }

    #[test]
    fn initial_balance_is_not_validated() {
        let account = Account::new(7, "", Amount::from_float(-12.75).unwrap());
        assert_eq!(account.balance(), Amount::from_float(-12.75).unwrap());
    }

    // Deposit

    #[test]
    fn deposit_increases_balance_and_records() {
        let mut account = account(1000);
        account.deposit(units(500)).unwrap();

        assert_eq!(account.balance(), units(1500));
        assert_eq!(
            account.transactions(),
            &[TransactionRecord::new(
                TransactionKind::Deposit,
                units(500)
            )]
        );
    }

    #[test]
    fn deposit_accepts_fractional_amount() {
        let mut account = account(0);
        account.deposit(Amount::from_float(0.01).unwrap()).unwrap();
        assert_eq!(account.balance(), Amount::from_float(0.01).unwrap());
    }

    #[test]
    fn deposit_zero_fails() {
        let mut account = account(100);
        let result = account.deposit(Amount::ZERO);
        assert_eq!(result, Err(DepositError::InvalidAmount(1, Amount::ZERO)));
        assert_eq!(account.balance(), units(100));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn deposit_negative_fails() {
        let mut account = account(100);
        let result = account.deposit(units(-5));
        assert!(matches!(result, Err(DepositError::InvalidAmount(1, _))));
        assert_eq!(account.balance(), units(100));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn deposit_overflow_fails_without_effect() {
        let big = Amount::from_float(9.0e14).unwrap();
        let mut account = Account::new(1, "big", big);

        let result = account.deposit(big);
        assert_eq!(result, Err(DepositError::Overflow(1, big, big)));
        assert_eq!(account.balance(), big);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn deposit_up_to_the_limit_succeeds() {
        let mut account = Account::new(1, "big", Amount::from_scaled(i64::MAX - 1));
        account.deposit(Amount::from_scaled(1)).unwrap();
        assert_eq!(account.balance(), Amount::from_scaled(i64::MAX));
    }

    // Withdrawal

    #[test]
    fn withdraw_decreases_balance_and_records() {
        let mut account = account(500);
        account.withdraw(units(200)).unwrap();

        assert_eq!(account.balance(), units(300));
        assert_eq!(account.transactions().len(), 1);
        assert_eq!(
            account.transactions()[0].kind(),
            TransactionKind::Withdrawal
        );
    }

    #[test]
    fn withdraw_exact_balance_succeeds() {
        let mut account = account(100);
        account.withdraw(units(100)).unwrap();
        assert_eq!(account.balance(), Amount::ZERO);
    }

    #[test]
    fn withdraw_more_than_balance_fails() {
        let mut account = account(1500);
        let result = account.withdraw(units(2000));
        assert_eq!(
            result,
            Err(WithdrawalError::InsufficientFunds(
                1,
                units(1500),
                units(2000)
            ))
        );
        assert_eq!(account.balance(), units(1500));
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn withdraw_zero_is_recorded() {
        let mut account = account(10);
        account.withdraw(Amount::ZERO).unwrap();
        assert_eq!(account.balance(), units(10));
        assert_eq!(account.statement(), "Withdrawal: $0");
    }

    #[test]
    fn withdraw_negative_increases_balance() {
        let mut account = account(10);
        account.withdraw(units(-5)).unwrap();
        assert_eq!(account.balance(), units(15));
    }

    #[test]
    fn withdraw_negative_overflow_fails_without_effect() {
        let max = Amount::from_scaled(i64::MAX);
        let mut account = Account::new(1, "big", max);

        let result = account.withdraw(Amount::from_scaled(-1));
        assert_eq!(
            result,
            Err(WithdrawalError::Overflow(1, max, Amount::from_scaled(-1)))
        );
        assert_eq!(account.balance(), max);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn withdraw_from_negative_balance_fails() {
        let mut account = account(-10);
        assert!(account.withdraw(Amount::ZERO).is_err());
    }

    // Statement

    #[test]
    fn statement_lists_transactions_in_order() {
        let mut account = account(1000);
        account.deposit(units(500)).unwrap();
        account.withdraw(units(200)).unwrap();
        assert_eq!(account.statement(), "Deposit: $500\nWithdrawal: $200");
    }

    #[test]
    fn statement_skips_failed_operations() {
        let mut account = account(100);
        account.deposit(Amount::from_float(25.5).unwrap()).unwrap();
        let _ = account.deposit(Amount::ZERO);
        let _ = account.withdraw(units(1000));
        account.withdraw(Amount::from_float(0.5).unwrap()).unwrap();
        assert_eq!(account.statement(), "Deposit: $25.5\nWithdrawal: $0.5");
    }
}
