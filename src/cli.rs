//! Command-line parsing.
//!
//! The data file comes from `--data <path>`, else `BANK_DATA_FILE`, else
//! `bank.json`.

use crate::account::{Gender, NewAccount};
use crate::decimal::Amount;
use crate::error::{EngineError, Result};
use crate::field::Field;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "bank-records")]
#[command(about = "Manage bank accounts stored in a JSON flat file")]
#[command(version)]
pub struct Cli {
    /// JSON file holding the accounts
    #[arg(long, env = "BANK_DATA_FILE", default_value = "bank.json")]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every account sorted by a field
    List {
        /// Field to sort by
        #[arg(default_value = "full_name")]
        field: Field,
    },

    /// Find an account by a field value (case and spaces are ignored)
    Search {
        /// Value to look for
        query: String,

        /// Field to search
        #[arg(default_value = "full_name")]
        field: Field,
    },

    /// Show one account
    Show { account: String },

    /// Open a new account
    Create(CreateArgs),

    /// Move money between two accounts
    Transfer {
        from: String,
        to: String,
        #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
        amount: Amount,
    },

    /// Change an editable field of an account
    Update {
        account: String,
        field: Field,
        value: String,
    },

    /// Remove an account
    Delete { account: String },

    /// Write every account as CSV to stdout
    Export,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    full_name: String,
    /// Male, Female or Others
    gender: Gender,
    city: String,
    phone_number: String,
    age: String,
    country: String,
    /// Opening balance
    #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
    balance: Amount,
}

impl From<CreateArgs> for NewAccount {
    fn from(args: CreateArgs) -> Self {
        NewAccount {
            full_name: args.full_name,
            gender: args.gender,
            city: args.city,
            phone_number: args.phone_number,
            age: args.age,
            country: args.country,
            balance: args.balance,
        }
    }
}

fn parse_amount(raw: &str) -> Result<Amount> {
    Amount::from_str(raw).map_err(|_| EngineError::InvalidAmount(raw.to_string()))
}
