use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use bank_ledger::{Bank, DEFAULT_BANK_NAME};
use bank_ledger::csv::{read_operations, write_accounts};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: bank-ledger <operations.csv> [bank name]");
        return ExitCode::FAILURE;
    };
    let name = args.next().unwrap_or_else(|| DEFAULT_BANK_NAME.to_string());

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    // the reader moves into the spawned task, so it must own the path
    let operations = match read_operations(PathBuf::from(&path)) {
        Ok(operations) => operations,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut bank = Bank::new(name);
    let (op_sender, op_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in operations {
            match result {
                Ok(op) => {
                    if op_sender.send(op).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    bank.run(ReceiverStream::new(op_receiver)).await;

    if let Err(e) = write_accounts(io::stdout().lock(), bank.accounts()) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
