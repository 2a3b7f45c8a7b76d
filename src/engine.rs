//! Account manager built on the record-sequence engine.
//!
//! Listing and lookup snapshot the accounts into a fresh [`Sequence`], heap
//! sort it, and (for lookups) binary search it. Mutations are applied to a
//! copy of the account map, which replaces the live map only once it has been
//! saved.

use crate::account::{self, NewAccount};
use crate::decimal::Amount;
use crate::error::{EngineError, Result};
use crate::field::Field;
use crate::record::Record;
use crate::search::binary_search;
use crate::sequence::Sequence;
use crate::sort::{heap_sort, SortedBy};
use crate::store::{self, Accounts, BankStore};
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use rand::Rng;

/// The bank's accounts plus an optional backing store.
///
/// Constructed with [`BankEngine::open`] every mutation is written back to
/// the data file before returning, and a failed write leaves the engine
/// unchanged; [`BankEngine::new`] keeps everything in memory.
pub struct BankEngine {
    accounts: Accounts,
    store: Option<BankStore>,
}

impl BankEngine {
    /// Creates an empty in-memory engine.
    pub fn new() -> Self {
        BankEngine {
            accounts: Accounts::new(),
            store: None,
        }
    }

    /// Loads all accounts from `store` and persists changes back to it.
    pub fn open(store: BankStore) -> Result<Self> {
        let accounts = store.load()?;
        Ok(BankEngine {
            accounts,
            store: Some(store),
        })
    }

    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    pub fn account(&self, number: &str) -> Option<&Record> {
        self.accounts.get(number)
    }

    /// Saves `next` and makes it the live account map.
    fn commit(&mut self, next: Accounts) -> Result<()> {
        if let Some(store) = &self.store {
            store.save(&next)?;
        }
        self.accounts = next;
        Ok(())
    }

    /// All accounts sorted ascending by `field`.
    ///
    /// Fails with [`EngineError::EmptySequence`] when there are no accounts.
    pub fn list_sorted(&self, field: &str) -> Result<SortedBy> {
        let sequence = Sequence::build(store::snapshot(&self.accounts))?;
        heap_sort(sequence, field)
    }

    /// Finds an account whose `field` matches `query` after normalization.
    ///
    /// Returns the matching position in the sorted listing and the record
    /// (which carries `account_number`). An empty bank is a miss.
    pub fn search(&self, field: &str, query: &str) -> Result<Option<(usize, Record)>> {
        let sorted = match self.list_sorted(field) {
            Ok(sorted) => sorted,
            Err(EngineError::EmptySequence) => {
                debug!("Search for '{}' on empty bank", query);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        match binary_search(&sorted, query)? {
            Some(index) => Ok(Some((index, sorted.get(index)?.clone()))),
            None => Ok(None),
        }
    }

    /// Opens a new account dated today and returns its number.
    pub fn create_account<R: Rng + ?Sized>(
        &mut self,
        new: NewAccount,
        rng: &mut R,
    ) -> Result<String> {
        self.create_account_on(new, Local::now().date_naive(), rng)
    }

    /// Opens a new account dated `created` and returns its number.
    pub fn create_account_on<R: Rng + ?Sized>(
        &mut self,
        new: NewAccount,
        created: NaiveDate,
        rng: &mut R,
    ) -> Result<String> {
        if new.balance < Amount::ZERO {
            warn!("Rejected opening balance {}", new.balance);
            return Err(EngineError::InvalidAmount(new.balance.to_string()));
        }

        let mut number = account::generate_account_number(rng);
        while self.accounts.contains_key(&number) {
            debug!("Account number {} already taken, regenerating", number);
            number = account::generate_account_number(rng);
        }

        let name = new.full_name.clone();
        let mut next = self.accounts.clone();
        next.insert(number.clone(), new.into_record(created));
        self.commit(next)?;

        info!("Created account {} for {}", number, name);
        Ok(number)
    }

    /// Moves `amount` from `sender` to `receiver`.
    pub fn transfer(&mut self, sender: &str, receiver: &str, amount: Amount) -> Result<()> {
        if !amount.is_positive() {
            warn!("Rejected transfer of non-positive amount {}", amount);
            return Err(EngineError::InvalidAmount(amount.to_string()));
        }
        if sender == receiver {
            warn!("Rejected transfer from {} to itself", sender);
            return Err(EngineError::InvalidTransfer(format!(
                "sender and recipient are both {}",
                sender
            )));
        }

        let sender_record = self
            .accounts
            .get(sender)
            .ok_or_else(|| EngineError::AccountNotFound(sender.to_string()))?;
        let receiver_record = self
            .accounts
            .get(receiver)
            .ok_or_else(|| EngineError::AccountNotFound(receiver.to_string()))?;

        let sender_balance = account::balance(sender_record, sender)?;
        let receiver_balance = account::balance(receiver_record, receiver)?;

        if sender_balance < amount {
            warn!(
                "Transfer of {} from {} rejected, balance is {}",
                amount, sender, sender_balance
            );
            return Err(EngineError::InsufficientFunds {
                account: sender.to_string(),
                balance: sender_balance.to_string(),
                amount: amount.to_string(),
            });
        }

        let mut next = self.accounts.clone();
        if let Some(record) = next.get_mut(sender) {
            account::set_balance(record, sender_balance - amount);
        }
        if let Some(record) = next.get_mut(receiver) {
            account::set_balance(record, receiver_balance + amount);
        }
        self.commit(next)?;

        info!("Transferred {} from {} to {}", amount, sender, receiver);
        Ok(())
    }

    /// Overwrites an editable text field of an account.
    ///
    /// `gender` must be one of `Male`, `Female` or `Others`.
    pub fn update_field(&mut self, number: &str, field: Field, value: &str) -> Result<()> {
        if !field.is_editable() {
            return Err(EngineError::UnknownField(field.as_str().to_string()));
        }
        if field == Field::Gender {
            value.parse::<account::Gender>()?;
        }

        let mut next = self.accounts.clone();
        next.get_mut(number)
            .ok_or_else(|| EngineError::AccountNotFound(number.to_string()))?
            .insert(field.as_str(), value);
        self.commit(next)?;

        info!("Updated {} of account {}", field, number);
        Ok(())
    }

    /// Removes an account, returning its record.
    pub fn delete_account(&mut self, number: &str) -> Result<Record> {
        let mut next = self.accounts.clone();
        let removed = next
            .remove(number)
            .ok_or_else(|| EngineError::AccountNotFound(number.to_string()))?;
        self.commit(next)?;

        info!("Account number {} is removed", number);
        Ok(removed)
    }
}

impl Default for BankEngine {
    fn default() -> Self {
        Self::new()
    }
}
