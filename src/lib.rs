pub mod amount;
pub mod bank;
pub mod csv;
pub mod model;

pub use amount::{Amount, AmountError};
pub use bank::{Account, Bank, DEFAULT_BANK_NAME};
pub use model::{AccountId, Operation, TransactionKind, TransactionRecord};
