//! Core domain types for the bank.

use std::fmt;

use crate::Amount;

/// Account identifier, assigned sequentially by the bank starting at 1.
pub type AccountId = u32;

/// An operation the bank can apply.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Open a new account with an initial balance (not validated).
    Open { name: String, balance: Amount },
    /// Credit funds to an account.
    Deposit { account: AccountId, amount: Amount },
    /// Debit funds from an account.
    Withdrawal { account: AccountId, amount: Amount },
    /// Move funds between two accounts without recording transactions.
    Transfer {
        from: AccountId,
        to: AccountId,
        amount: Amount,
    },
    /// Remove an account from the bank.
    Close { account: AccountId },
}

/// Kind of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// Entry of an account's history. Immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Amount,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Amount) -> Self {
        Self { kind, amount }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// Statement line, e.g. `Deposit: $500`.
impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.kind, self.amount)
    }
}
