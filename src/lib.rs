//! # Bank Records
//!
//! A flat-file bank account manager whose listing and lookup run on a small
//! record-sequence engine: a singly-linked [`Sequence`], a field-parameterized
//! [`heap_sort`] and a normalized [`binary_search`].
//!
//! ## Design Principles
//!
//! - **Index-only algorithms**: sort and search use `get`/`swap`/`length`
//! - **Typed values**: numbers, dates and text compare through one function
//! - **Sorted-by proof**: [`binary_search`] only accepts a [`SortedBy`]
//! - **Fixed-point money**: balances use 2 decimal places via `rust_decimal`
//!
//! ## Example
//!
//! ```
//! use bank_records::{binary_search, heap_sort, Record, Sequence};
//! use rust_decimal::Decimal;
//!
//! let seq = Sequence::build(vec![
//!     Record::new().with("name", "Bob").with("balance", Decimal::from(50)),
//!     Record::new().with("name", "Ann").with("balance", Decimal::from(200)),
//! ])
//! .unwrap();
//!
//! let sorted = heap_sort(seq, "name").unwrap();
//! assert_eq!(binary_search(&sorted, "ann").unwrap(), Some(0));
//! ```

pub mod account;
pub mod cli;
pub mod decimal;
pub mod display;
pub mod engine;
pub mod error;
pub mod field;
pub mod record;
pub mod search;
pub mod sequence;
pub mod sort;
pub mod store;
pub mod value;

pub use account::{Gender, NewAccount};
pub use decimal::Amount;
pub use engine::BankEngine;
pub use error::{EngineError, Result};
pub use field::Field;
pub use record::{extract, Record};
pub use search::binary_search;
pub use sequence::Sequence;
pub use sort::{heap_sort, SortedBy};
pub use store::{BankStore, DEFAULT_DATA_FILE};
pub use value::{normalize, FieldValue};
