//! Account model: creation input, account numbers and balance access.

use crate::decimal::Amount;
use crate::error::{EngineError, Result};
use crate::field::Field;
use crate::record::Record;
use crate::value::FieldValue;
use chrono::NaiveDate;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Bank prefix of every generated account number.
pub const ACCOUNT_PREFIX: &str = "60605498";

/// Random digits following [`ACCOUNT_PREFIX`].
const ACCOUNT_SUFFIX_DIGITS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Others => "Others",
        }
    }
}

impl FromStr for Gender {
    type Err = EngineError;

    /// Accepts exactly `Male`, `Female` or `Others`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Others" => Ok(Gender::Others),
            other => Err(EngineError::InvalidGender(other.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Details supplied when opening an account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub gender: Gender,
    pub city: String,
    pub phone_number: String,
    pub age: String,
    pub country: String,
    pub balance: Amount,
}

impl NewAccount {
    /// Converts into a stored record opened on `created`.
    ///
    /// The account number is not part of the stored record; the store keys
    /// records by it instead.
    pub fn into_record(self, created: NaiveDate) -> Record {
        Record::new()
            .with(Field::FullName.as_str(), self.full_name)
            .with(Field::Gender.as_str(), self.gender.as_str())
            .with(Field::Balance.as_str(), self.balance.to_decimal())
            .with(Field::AccountCreationDate.as_str(), created)
            .with(Field::City.as_str(), self.city)
            .with(Field::PhoneNumber.as_str(), self.phone_number)
            .with(Field::Age.as_str(), self.age)
            .with(Field::Country.as_str(), self.country)
    }
}

/// Generates `60605498` followed by 8 random digits, each in `1..=9`.
pub fn generate_account_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut number = String::with_capacity(ACCOUNT_PREFIX.len() + ACCOUNT_SUFFIX_DIGITS);
    number.push_str(ACCOUNT_PREFIX);
    for _ in 0..ACCOUNT_SUFFIX_DIGITS {
        let digit: u32 = rng.gen_range(1..=9);
        number.push(char::from_digit(digit, 10).unwrap_or('1'));
    }
    number
}

/// Reads the balance of `record`, which belongs to `account`.
pub fn balance(record: &Record, account: &str) -> Result<Amount> {
    match record.get(Field::Balance.as_str()) {
        Some(FieldValue::Number(value)) => Ok(Amount::new(*value)),
        Some(other) => Err(EngineError::InvalidRecord {
            account: account.to_string(),
            message: format!("balance '{}' is not a number", other),
        }),
        None => Err(EngineError::InvalidRecord {
            account: account.to_string(),
            message: "missing balance".to_string(),
        }),
    }
}

pub fn set_balance(record: &mut Record, amount: Amount) {
    record.insert(Field::Balance.as_str(), amount.to_decimal());
}
