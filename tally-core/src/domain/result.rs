//! Result and error types for the core library

use rust_decimal::Decimal;
use thiserror::Error;

/// Core library error type
///
/// Every variant is non-fatal: the caller is expected to report the
/// condition and prompt again. A rejected operation never mutates state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("account already exists: {0}")]
    DuplicateAccount(String),
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
