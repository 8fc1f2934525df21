//! In-memory bank.
//!
//! The bank owns its accounts, assigns their ids and moves funds between
//! them. Deposits and withdrawals are account methods, reachable through
//! [`Bank::account_mut`] or the handle returned by [`Bank::create_account`].
//! Also supports async stream of operations.

use std::collections::BTreeMap;
use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::Amount;
use crate::model::{AccountId, Operation};

mod account;
pub use account::Account;

mod error;
pub use error::{BankError, DepositError, TransferError, WithdrawalError};

/// Name given to a bank when none is configured.
pub const DEFAULT_BANK_NAME: &str = "MyBank";

/// A named collection of accounts.
#[derive(Debug)]
pub struct Bank {
    name: String,
    /// Keyed by id; ids are handed out in increasing order so iteration
    /// follows creation order.
    accounts: BTreeMap<AccountId, Account>,
    /// Last id handed out. Never reset, closed ids are not reused.
    last_id: AccountId,
}

// Public API
impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: BTreeMap::new(),
            last_id: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the bank over the given operation stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = Operation> + Unpin) {
        while let Some(op) = stream.next().await {
            // a failed operation leaves state untouched, keep going
            let _ = self.apply(op);
        }
    }

    /// Open accounts, in creation order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.accounts.values()
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Open an account under the next id. The initial balance is taken as is.
    pub fn create_account(&mut self, name: impl Into<String>, balance: Amount) -> &mut Account {
        self.last_id += 1;
        let id = self.last_id;
        self.accounts
            .entry(id)
            .or_insert_with(|| Account::new(id, name, balance))
    }

    /// Remove an account, handing it back with its last state.
    /// Unknown ids are ignored.
    pub fn close_account(&mut self, id: AccountId) -> Option<Account> {
        self.accounts.remove(&id)
    }

    /// Move `amount` from one account to another.
    /// - Ensure both accounts exist
    /// - Ensure the source balance covers the amount
    /// - Compute both new balances, failing on overflow before touching either
    /// - Debit source, credit destination (no transaction records)
    ///
    /// Note: `from == to` is allowed and nets out to no change.
    pub fn transfer_funds(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let (Some(source), Some(destination)) = (self.accounts.get(&from), self.accounts.get(&to))
        else {
            return Err(TransferError::AccountNotFound { from, to });
        };

        if source.balance() < amount {
            return Err(TransferError::InsufficientFunds(
                from,
                source.balance(),
                amount,
            ));
        }

        let debited = source.balance().checked_sub(amount);
        let credited = if from == to {
            debited.and_then(|balance| balance.checked_add(amount))
        } else {
            destination.balance().checked_add(amount)
        };
        let (Some(debited), Some(credited)) = (debited, credited) else {
            return Err(TransferError::Overflow { from, to, amount });
        };

        if from == to {
            warn!(account = from, amount = %amount, "transfer to same account");
        }

        if let Some(source) = self.accounts.get_mut(&from) {
            source.set_balance(debited);
        }
        if let Some(destination) = self.accounts.get_mut(&to) {
            destination.set_balance(credited);
        }

        Ok(())
    }

    /// Apply a single operation on top of the current bank state
    pub fn apply(&mut self, op: Operation) -> Result<(), BankError> {
        match op {
            Operation::Open { name, balance } => {
                let id = self.create_account(name, balance).id();
                info!(account = id, amount = %balance, "open applied");
            }
            Operation::Deposit { account, amount } => {
                let result = self.apply_deposit(account, amount);
                Self::log_result("deposit", account, amount, &result);
                result?;
            }
            Operation::Withdrawal { account, amount } => {
                let result = self.apply_withdrawal(account, amount);
                Self::log_result("withdrawal", account, amount, &result);
                result?;
            }
            Operation::Transfer { from, to, amount } => {
                let result = self.transfer_funds(from, to, amount);
                match &result {
                    Ok(()) => info!(from, to, amount = %amount, "transfer applied"),
                    Err(e) => info!(from, to, amount = %amount, reason = %e, "transfer skipped"),
                }
                result?;
            }
            Operation::Close { account } => {
                let closed = self.close_account(account);
                info!(account, found = closed.is_some(), "close applied");
            }
        }
        Ok(())
    }
}

// Private API
impl Bank {
    /// Small helper to log `apply` results
    fn log_result<E: std::fmt::Display>(
        op: &str,
        account: AccountId,
        amount: Amount,
        result: &Result<(), E>,
    ) {
        match result {
            Ok(()) => info!(account, amount = %amount, "{op} applied"),
            Err(e) => info!(account, amount = %amount, reason = %e, "{op} skipped"),
        }
    }

    fn apply_deposit(&mut self, id: AccountId, amount: Amount) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(BankError::AccountNotFound(id))?;
        account.deposit(amount)?;
        Ok(())
    }

    fn apply_withdrawal(&mut self, id: AccountId, amount: Amount) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(BankError::AccountNotFound(id))?;
        account.withdraw(amount)?;
        Ok(())
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(DEFAULT_BANK_NAME)
    }
}
