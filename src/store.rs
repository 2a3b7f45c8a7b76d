//! JSON flat-file persistence for accounts.
//!
//! The file is one JSON object mapping account number to the account's
//! record. A missing file reads as an empty bank.

use crate::error::Result;
use crate::field::Field;
use crate::record::Record;
use crate::value::FieldValue;
use log::debug;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Accounts keyed by account number.
pub type Accounts = BTreeMap<String, Record>;

/// Default data file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "bank.json";

#[derive(Debug, Clone)]
pub struct BankStore {
    path: PathBuf,
}

impl BankStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        BankStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every account from the data file.
    pub fn load(&self) -> Result<Accounts> {
        if !self.path.exists() {
            debug!("{} does not exist, starting empty", self.path.display());
            return Ok(Accounts::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let accounts: Accounts = serde_json::from_reader(reader)?;
        debug!("Loaded {} accounts from {}", accounts.len(), self.path.display());
        Ok(accounts)
    }

    /// Replaces the data file with `accounts`.
    ///
    /// The JSON is written to a temporary file next to the data file and then
    /// renamed over it, so a failed write leaves the previous file intact.
    /// `account_number` fields are dropped; the map key is authoritative.
    pub fn save(&self, accounts: &Accounts) -> Result<()> {
        let stripped: Accounts = accounts
            .iter()
            .map(|(number, record)| {
                let mut record = record.clone();
                record.remove(Field::AccountNumber.as_str());
                (number.clone(), record)
            })
            .collect();

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(&mut temp);
            serde_json::to_writer_pretty(&mut writer, &stripped)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        debug!("Saved {} accounts to {}", accounts.len(), self.path.display());
        Ok(())
    }
}

/// One record per account with `account_number` attached as a text field,
/// in account-number order.
pub fn snapshot(accounts: &Accounts) -> Vec<Record> {
    accounts
        .iter()
        .map(|(number, record)| {
            record
                .clone()
                .with(Field::AccountNumber.as_str(), FieldValue::text(number.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = BankStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = BankStore::new(dir.path().join("bank.json"));

        let mut accounts = Accounts::new();
        accounts.insert(
            "6060549811111111".to_string(),
            Record::new()
                .with("full_name", "Ann")
                .with("balance", Decimal::from(200))
                .with("account_number", "6060549811111111"),
        );
        store.save(&accounts).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("account_number"));

        let loaded = store.load().unwrap();
        let record = &loaded["6060549811111111"];
        assert_eq!(record.get("full_name"), Some(&FieldValue::text("Ann")));
        assert_eq!(record.get("balance"), Some(&FieldValue::Number(Decimal::from(200))));
    }

    #[test]
    fn test_large_balance_keeps_cents() {
        let dir = tempdir().unwrap();
        let store = BankStore::new(dir.path().join("bank.json"));
        let balance = Decimal::from_str("98765432109876.53").unwrap();

        let mut accounts = Accounts::new();
        accounts.insert("1".to_string(), Record::new().with("balance", balance));
        store.save(&accounts).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("98765432109876.53"));
        assert_eq!(
            store.load().unwrap()["1"].get("balance"),
            Some(&FieldValue::Number(balance))
        );
    }

    #[test]
    fn test_save_replaces_file_without_leftovers() {
        let dir = tempdir().unwrap();
        let store = BankStore::new(dir.path().join("bank.json"));
        std::fs::write(store.path(), r#"{"old": {"full_name": "Old"}}"#).unwrap();

        let mut accounts = Accounts::new();
        accounts.insert("new".to_string(), Record::new().with("full_name", "New"));
        store.save(&accounts).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.contains_key("new"));
        assert!(!loaded.contains_key("old"));

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("bank.json")]);
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let dir = tempdir().unwrap();
        let store = BankStore::new(dir.path().join("missing").join("bank.json"));

        let mut accounts = Accounts::new();
        accounts.insert("1".to_string(), Record::new().with("full_name", "Ann"));
        assert!(matches!(store.save(&accounts), Err(crate::EngineError::Io(_))));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bank.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            BankStore::new(path).load(),
            Err(crate::EngineError::Json(_))
        ));
    }

    #[test]
    fn test_snapshot_attaches_account_number() {
        let mut accounts = Accounts::new();
        accounts.insert("2".to_string(), Record::new().with("full_name", "Bob"));
        accounts.insert("1".to_string(), Record::new().with("full_name", "Ann"));

        let records = snapshot(&accounts);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("account_number"), Some(&FieldValue::text("1")));
        assert_eq!(records[1].get("full_name"), Some(&FieldValue::text("Bob")));
    }
}
