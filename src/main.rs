//! Bank Records CLI
//!
//! Manages bank accounts stored in a JSON flat file and lists or searches
//! them through the linked-sequence heap sort and binary search.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --data bank.json list balance
//! cargo run -- search "ann lee"
//! ```
//!
//! # Environment Variables
//!
//! - `BANK_DATA_FILE`: data file used when `--data` is not given
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bank_records::cli::{Cli, Command};
use bank_records::display::{self, HORIZONTAL_LINE};
use bank_records::{BankEngine, BankStore, EngineError, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut engine = BankEngine::open(BankStore::new(cli.data.clone()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::List { field } => match engine.list_sorted(field.as_str()) {
            Ok(sorted) => display::write_listing(&mut out, &sorted)?,
            Err(EngineError::EmptySequence) => writeln!(out, "No accounts to display")?,
            Err(e) => return Err(e),
        },
        Command::Search { query, field } => match engine.search(field.as_str(), query)? {
            Some((_, record)) => display::write_account(&mut out, &record)?,
            None => {
                writeln!(out, "{}", HORIZONTAL_LINE)?;
                writeln!(out, "Found no one as {}", query)?;
            }
        },
        Command::Show { account } => {
            let record = engine
                .account(account)
                .ok_or_else(|| EngineError::AccountNotFound(account.clone()))?
                .clone()
                .with("account_number", account.as_str());
            display::write_account(&mut out, &record)?;
        }
        Command::Create(args) => {
            let number = engine.create_account(args.clone().into(), &mut rand::thread_rng())?;
            writeln!(out, "Created account {}", number)?;
        }
        Command::Transfer { from, to, amount } => {
            engine.transfer(from, to, *amount)?;
            writeln!(out, "Transferred {} from {} to {}", amount, from, to)?;
        }
        Command::Update {
            account,
            field,
            value,
        } => {
            engine.update_field(account, *field, value)?;
            writeln!(out, "Updated {} of account {}", field.label(), account)?;
        }
        Command::Delete { account } => {
            engine.delete_account(account)?;
            writeln!(out, "Account number {} is removed.", account)?;
        }
        Command::Export => match engine.list_sorted("account_number") {
            Ok(sorted) => display::write_csv(&mut out, &sorted)?,
            Err(EngineError::EmptySequence) => {}
            Err(e) => return Err(e),
        },
    }

    out.flush()?;
    Ok(())
}
