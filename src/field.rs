//! Field names recognized by the account manager.
//!
//! The sort/search engine takes plain `&str` field names and does not consult
//! this list; it exists for the CLI, the display step and edit validation.

use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Gender,
    City,
    PhoneNumber,
    Age,
    Country,
    AccountCreationDate,
    AccountNumber,
    Balance,
}

impl Field {
    /// All fields in display/export order.
    pub const ALL: [Field; 9] = [
        Field::AccountNumber,
        Field::FullName,
        Field::AccountCreationDate,
        Field::Balance,
        Field::Gender,
        Field::City,
        Field::PhoneNumber,
        Field::Age,
        Field::Country,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Gender => "gender",
            Field::City => "city",
            Field::PhoneNumber => "phone_number",
            Field::Age => "age",
            Field::Country => "country",
            Field::AccountCreationDate => "account_creation_date",
            Field::AccountNumber => "account_number",
            Field::Balance => "balance",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Gender => "Gender",
            Field::City => "City",
            Field::PhoneNumber => "Phone Number",
            Field::Age => "Age",
            Field::Country => "Country",
            Field::AccountCreationDate => "Account Creation Date",
            Field::AccountNumber => "Account Number",
            Field::Balance => "Balance",
        }
    }

    /// Whether an administrator may overwrite this field directly.
    ///
    /// Balance moves only through transfers; number and creation date are
    /// assigned once.
    pub fn is_editable(self) -> bool {
        !matches!(
            self,
            Field::AccountCreationDate | Field::AccountNumber | Field::Balance
        )
    }
}

impl FromStr for Field {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| EngineError::UnknownField(name.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
