use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::bank::Account;
use crate::{AccountId, Amount, AmountError, Operation};

/// Errors that can occur when reading operations or writing accounts
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open {path}: {source}")]
    Open { path: String, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized operation type '{op}'")]
    UnrecognizedType { line: usize, op: String },

    #[error("line {line}: {op} missing {field}")]
    MissingField {
        line: usize,
        op: &'static str,
        field: &'static str,
    },

    #[error("line {line}: invalid amount: {source}")]
    InvalidAmount { line: usize, source: AmountError },

    #[error("failed to write accounts: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to write accounts: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Deserialize)]
struct InputRow {
    r#type: String,
    account: Option<AccountId>,
    to: Option<AccountId>,
    amount: Option<f64>,
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    account: AccountId,
    name: &'a str,
    balance: String,
}

const OUTPUT_HEADER: [&str; 3] = ["account", "name", "balance"];

impl InputRow {
    fn into_operation(self, line: usize) -> Result<Operation, CsvError> {
        let missing = |op: &'static str, field: &'static str| CsvError::MissingField {
            line,
            op,
            field,
        };
        let amount = self
            .amount
            .map(Amount::from_float)
            .transpose()
            .map_err(|source| CsvError::InvalidAmount { line, source })?;

        match self.r#type.as_str() {
            "open" => Ok(Operation::Open {
                balance: amount.ok_or(missing("open", "amount"))?,
                name: self.name.unwrap_or_default(),
            }),
            "deposit" => Ok(Operation::Deposit {
                account: self.account.ok_or(missing("deposit", "account"))?,
                amount: amount.ok_or(missing("deposit", "amount"))?,
            }),
            "withdrawal" => Ok(Operation::Withdrawal {
                account: self.account.ok_or(missing("withdrawal", "account"))?,
                amount: amount.ok_or(missing("withdrawal", "amount"))?,
            }),
            "transfer" => Ok(Operation::Transfer {
                from: self.account.ok_or(missing("transfer", "account"))?,
                to: self.to.ok_or(missing("transfer", "to"))?,
                amount: amount.ok_or(missing("transfer", "amount"))?,
            }),
            "close" => Ok(Operation::Close {
                account: self.account.ok_or(missing("close", "account"))?,
            }),
            other => Err(CsvError::UnrecognizedType {
                line,
                op: other.to_string(),
            }),
        }
    }
}

/// Read operations from a csv file
///
/// Expected header: `type,account,to,amount,name`.
pub fn read_operations(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Operation, CsvError>>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.display().to_string(),
            source,
        })?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            row.into_operation(line)
        }))
}

/// Write accounts in csv format, header included even when empty
pub fn write_accounts<'a>(
    writer: impl io::Write,
    accounts: impl IntoIterator<Item = &'a Account>,
) -> Result<(), CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(OUTPUT_HEADER)?;

    for account in accounts {
        writer.serialize(OutputRow {
            account: account.id(),
            name: account.name(),
            balance: account.balance().to_string(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
