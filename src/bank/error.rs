//! Error types for bank operations.

use thiserror::Error;

use crate::Amount;
use crate::model::AccountId;

/// Top-level error returned by [`Bank::apply`](super::Bank::apply).
#[derive(Debug, Error)]
pub enum BankError {
    #[error("deposit failed: {0}")]
    Deposit(#[from] DepositError),

    #[error("withdrawal failed: {0}")]
    Withdrawal(#[from] WithdrawalError),

    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),

    #[error("account {0} not found")]
    AccountNotFound(AccountId),
}

/// Error during deposit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DepositError {
    #[error("invalid amount {1} for account {0}")]
    InvalidAmount(AccountId, Amount),
    #[error("balance overflow for account {0}: balance {1}, deposit {2}")]
    Overflow(AccountId, Amount, Amount),
}

/// Error during withdrawal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WithdrawalError {
    #[error("insufficient funds for account {0}: balance {1}, requested {2}")]
    InsufficientFunds(AccountId, Amount, Amount),
    #[error("balance overflow for account {0}: balance {1}, withdrawal {2}")]
    Overflow(AccountId, Amount, Amount),
}

/// Error during transfer between two accounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransferError {
    /// Either side failed to resolve; which one is not reported.
    #[error("invalid account ids {from} -> {to}")]
    AccountNotFound { from: AccountId, to: AccountId },

    #[error("insufficient funds for account {0}: balance {1}, requested {2}")]
    InsufficientFunds(AccountId, Amount, Amount),

    #[error("balance overflow moving {amount} from {from} to {to}")]
    Overflow {
        from: AccountId,
        to: AccountId,
        amount: Amount,
    },
}
