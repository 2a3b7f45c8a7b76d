//! Field values and the single comparison used by sort and search.
//!
//! A stored value is either a number, a calendar date, or free text. Text is
//! always compared through [`normalize`], so the sort order and the binary
//! search agree on what "equal" means.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Date layout used for `account_creation_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lowercases `text` and removes every space character.
///
/// Only `' '` is removed; tabs, newlines and punctuation are kept.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(' ', "")
}

/// A record field value.
///
/// Values of different kinds order `Number < Date < Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Number(Decimal),
    Date(NaiveDate),
    Text(String),
}

impl FieldValue {
    /// Builds a text value.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Classifies a raw string: ISO dates become `Date`, everything else `Text`.
    pub fn from_stored_str(value: &str) -> Self {
        match NaiveDate::parse_from_str(value, DATE_FORMAT) {
            Ok(date) => FieldValue::Date(date),
            Err(_) => FieldValue::Text(value.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Date(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }

    /// Orders two values. Numbers compare numerically, dates
    /// chronologically, and text by its normalized form.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => normalize(a).cmp(&normalize(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Every reading of a user query that [`compare`](Self::compare) can
    /// order against stored values: a number and a date when the normalized
    /// query parses as one, and always the normalized text.
    pub fn query_candidates(query: &str) -> Vec<FieldValue> {
        let query = normalize(query);
        let mut candidates = Vec::with_capacity(3);
        if let Ok(number) = Decimal::from_str(&query) {
            candidates.push(FieldValue::Number(number));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&query, DATE_FORMAT) {
            candidates.push(FieldValue::Date(date));
        }
        candidates.push(FieldValue::Text(query));
        candidates
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(value) => write!(f, "{}", value),
            FieldValue::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::text(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Parses the exact text of a JSON number.
fn decimal_from_json(number: &serde_json::Number) -> Option<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Written as the decimal's own digits so balances never pass through f64
            FieldValue::Number(value) => serde_json::Number::from_str(&value.to_string())
                .map_err(<S::Error as ser::Error>::custom)?
                .serialize(serializer),
            FieldValue::Date(date) => {
                serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
            }
            FieldValue::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(number) => decimal_from_json(&number)
                .map(FieldValue::Number)
                .ok_or_else(|| {
                    <D::Error as de::Error>::custom(format!("number {} out of range", number))
                }),
            serde_json::Value::String(text) => Ok(FieldValue::from_stored_str(&text)),
            other => Err(<D::Error as de::Error>::custom(format!(
                "expected a number or a string, got {}",
                other
            ))),
        }
    }
}
