//! Error types for the record engine and its collaborators.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while sorting, searching, or managing accounts.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to open, read, or write the data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Backing store is not valid JSON
    #[error("Data file error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record lacks the requested sort/search key
    #[error("Field '{field}' not found on record")]
    FieldNotFound { field: String },

    /// A sequence position past the tail was requested
    #[error("Index {index} out of range for sequence of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// A sequence was requested from an empty record list
    #[error("No records to build a sequence from")]
    EmptySequence,

    /// Field name not recognized for this operation
    #[error("Unknown or non-editable field '{0}'")]
    UnknownField(String),

    /// No account with the given number
    #[error("Did not find any account with account number: {0}")]
    AccountNotFound(String),

    /// Sender balance does not cover the transfer
    #[error("Insufficient account balance: {account} has {balance}, needs {amount}")]
    InsufficientFunds {
        account: String,
        balance: String,
        amount: String,
    },

    /// Amount is unparseable or not positive
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    /// Gender outside Male/Female/Others
    #[error("Invalid gender '{0}', expected Male, Female or Others")]
    InvalidGender(String),

    /// Transfer between the same account
    #[error("Invalid transfer: {0}")]
    InvalidTransfer(String),

    /// Stored record has a malformed field
    #[error("Invalid record {account}: {message}")]
    InvalidRecord { account: String, message: String },
}
